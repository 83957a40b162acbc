//! Shared test utilities for picker tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use imagepick::{ChoiceConfig, SelectionController, SelectionSnapshot};

/// Snapshots delivered to the callback, in order
pub type Recorded = Rc<RefCell<Vec<SelectionSnapshot>>>;

/// Creates a controller whose callback records every snapshot
pub fn recording_controller(config: ChoiceConfig) -> (SelectionController, Recorded) {
    let seen: Recorded = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let controller = SelectionController::with_callback(config, move |snapshot| {
        sink.borrow_mut().push(snapshot.clone());
    });
    (controller, seen)
}

/// Shorthand for building a snapshot
pub fn snapshot(image: Option<&str>, reasons: &[&str], custom_reason: &str) -> SelectionSnapshot {
    SelectionSnapshot {
        image: image.map(str::to_string),
        reasons: reasons.iter().map(|r| r.to_string()).collect(),
        custom_reason: custom_reason.to_string(),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
