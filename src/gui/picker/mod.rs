//! Image picker rendering
//!
//! The picker is a pure function of the controller's state and configuration.
//! It never mutates state itself: interactions come back as
//! [`SelectionEvent`]s, in the order they happened, for the caller to apply
//! through the controller. Every interaction produces exactly one notification.

mod tile;
mod why;

use eframe::egui::{self, RichText, ScrollArea};

use crate::gui::images::ImageCache;
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::{SelectionController, SelectionEvent};

use tile::render_option_tile;
use why::render_why_panel;

/// Render the picker
///
/// Returns the events for this frame's interactions, empty if there were none
pub fn render_image_picker(
    ui: &mut egui::Ui,
    controller: &SelectionController,
    images: &ImageCache,
) -> Vec<SelectionEvent> {
    let config = controller.config();
    let mut actions = Vec::new();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if let Some(title) = &config.title {
                ui.label(RichText::new(title).color(TEXT_PRIMARY).size(18.0).strong());
                ui.add_space(4.0);
            }
            ui.label(RichText::new(&config.instructions).color(TEXT_DIM));
            ui.add_space(12.0);

            if config.options.is_empty() {
                ui.label(RichText::new("No options").color(TEXT_MUTED));
            }

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for (idx, option) in config.options.iter().enumerate() {
                    let is_selected = controller.chosen_option() == Some(option.as_str());
                    let clicked = render_option_tile(
                        ui,
                        option,
                        config.label_for(idx),
                        images.get(option),
                        is_selected,
                    );
                    if clicked {
                        actions.push(SelectionEvent::SelectOption(option.clone()));
                    }
                }
            });

            if controller.has_selection() {
                ui.add_space(16.0);
                actions.extend(render_why_panel(ui, controller));
            }
        });

    actions
}
