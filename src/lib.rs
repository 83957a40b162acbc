//! imagepick - pick an image and say why
//!
//! A native picker component: it shows a grid of option images, lets the user
//! choose one, and then collects a rationale either as predefined reason tags
//! or as free text. After every change the full selection is handed to the
//! caller as a [`SelectionSnapshot`].
//!
//! ## Embedding
//!
//! ```no_run
//! use imagepick::{ChoiceConfig, SelectionController};
//!
//! let config = ChoiceConfig::new("Which one reads better?", vec!["a.png".into(), "b.png".into()])
//!     .with_reasons(vec!["Clear".into(), "Vague".into()]);
//! let controller = SelectionController::with_callback(config, |snapshot| {
//!     println!("{:?}", snapshot);
//! });
//! let app = imagepick::gui::PickerApp::new(controller);
//! # let _ = app;
//! ```

pub mod config;
pub mod domain;
pub mod gui;
pub mod replay;

pub use domain::*;
