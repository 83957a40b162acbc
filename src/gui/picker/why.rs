//! The "why" panel: reason tags or a free-text rationale

use eframe::egui::{self, RichText};

use crate::gui::theme::{
    ACCENT_GREEN, BG_HIGHLIGHT, BG_PRIMARY, BG_SECONDARY, TEXT_DIM, TEXT_PRIMARY,
};
use crate::{SelectionController, SelectionEvent};

/// Render the rationale controls for the current choice
///
/// Only called while an option is chosen.
pub(super) fn render_why_panel(
    ui: &mut egui::Ui,
    controller: &SelectionController,
) -> Vec<SelectionEvent> {
    let reasons = &controller.config().reasons;
    let mut actions = Vec::new();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .stroke(egui::Stroke::new(1.0, BG_HIGHLIGHT))
        .inner_margin(12.0)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Why this one?").color(TEXT_PRIMARY).strong());
            ui.add_space(6.0);

            if reasons.shows_tag_buttons() {
                ui.horizontal_wrapped(|ui| {
                    for tag in reasons.tags() {
                        if render_reason_tag(ui, tag, controller.is_reason_chosen(tag)) {
                            actions.push(SelectionEvent::ToggleReason(tag.clone()));
                        }
                    }
                });
            }

            if reasons.shows_free_text() {
                let mut text = controller.free_text().to_string();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .hint_text("Tell us what made you pick it...")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    actions.push(SelectionEvent::SetFreeText(text));
                }
            }
        });

    actions
}

/// Returns true if the tag was clicked
fn render_reason_tag(ui: &mut egui::Ui, tag: &str, chosen: bool) -> bool {
    let (icon, text_color, fill) = if chosen {
        ("✓", BG_PRIMARY, ACCENT_GREEN)
    } else {
        ("✗", TEXT_DIM, BG_HIGHLIGHT)
    };

    ui.add(egui::Button::new(RichText::new(format!("{} {}", icon, tag)).color(text_color)).fill(fill))
        .clicked()
}
