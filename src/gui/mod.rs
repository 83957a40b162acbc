//! Native GUI for the image picker
//!
//! Renders a grid of option images, then either reason tags or a free-text
//! field for the chosen one. Every interaction is forwarded to the
//! [`SelectionController`](crate::SelectionController), which notifies the caller.

pub mod app;
pub mod images;
pub mod picker;
pub mod runner;
pub mod theme;

pub use app::PickerApp;
pub use images::{ImageCache, ImageSlot};
pub use picker::render_image_picker;
pub use runner::run_gui;
