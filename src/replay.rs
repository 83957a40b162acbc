//! Headless replay of picker interactions
//!
//! A replay script has one interaction per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! select a.png
//! reason Clear
//! text Because it's cleaner
//! ```
//!
//! Everything after the first space is the argument, taken verbatim, so
//! option names and free text may contain spaces. `text` with no argument
//! clears the free text.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{ChoiceConfig, SelectionController, SelectionEvent, SelectionSnapshot};

/// Error type for replay script parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("line {line}: unknown command '{command}' (expected select, reason or text)")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: String },
}

/// Parse a replay script into interactions
pub fn parse_script(script: &str) -> Result<Vec<SelectionEvent>, ReplayError> {
    let mut events = Vec::new();

    for (idx, raw) in script.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }

        let raw = raw.trim_start();
        let (command, arg) = match raw.split_once(' ') {
            Some((command, arg)) => (command, Some(arg)),
            None => (raw.trim_end(), None),
        };

        let event = match (command, arg) {
            ("select", Some(arg)) if !arg.trim().is_empty() => {
                SelectionEvent::SelectOption(arg.trim_end().to_string())
            }
            ("reason", Some(arg)) if !arg.trim().is_empty() => {
                SelectionEvent::ToggleReason(arg.trim_end().to_string())
            }
            ("text", arg) => SelectionEvent::SetFreeText(arg.unwrap_or_default().to_string()),
            ("select" | "reason", _) => {
                return Err(ReplayError::MissingArgument {
                    line,
                    command: command.to_string(),
                });
            }
            (other, _) => {
                return Err(ReplayError::UnknownCommand {
                    line,
                    command: other.to_string(),
                });
            }
        };
        events.push(event);
    }

    Ok(events)
}

/// Drive a fresh picker through `events`, collecting every notification
pub fn replay(config: ChoiceConfig, events: &[SelectionEvent]) -> Vec<SelectionSnapshot> {
    let seen = Rc::new(RefCell::new(Vec::with_capacity(events.len())));
    let sink = Rc::clone(&seen);

    let mut controller = SelectionController::with_callback(config, move |snapshot| {
        sink.borrow_mut().push(snapshot.clone());
    });

    for event in events {
        tracing::debug!("[imagepick] replay {:?}", event);
        controller.apply(event);
    }
    drop(controller);

    Rc::try_unwrap(seen)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone())
}
