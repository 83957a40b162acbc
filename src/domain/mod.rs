//! Core domain types for imagepick

mod choice;
mod selection;

pub use choice::{ChoiceConfig, ReasonMode};
pub use selection::{
    SelectionCallback, SelectionController, SelectionEvent, SelectionSnapshot, SelectionState,
};
