//! Option tile rendering for the image picker

use eframe::egui::{self, Align2, FontId, RichText, Sense, Vec2};

use crate::gui::images::ImageSlot;
use crate::gui::theme::{
    ACCENT_CYAN, BG_HIGHLIGHT, BG_SECONDARY, BG_SELECTED, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

/// Image area inside a tile
pub(super) const TILE_IMAGE_SIZE: Vec2 = Vec2::new(160.0, 120.0);

/// Render a single option tile
///
/// Returns true if the tile was clicked
pub(super) fn render_option_tile(
    ui: &mut egui::Ui,
    option: &str,
    label: Option<&str>,
    slot: Option<&ImageSlot>,
    is_selected: bool,
) -> bool {
    let bg_color = if is_selected {
        BG_SELECTED
    } else {
        BG_SECONDARY
    };
    let border_color = if is_selected {
        ACCENT_CYAN
    } else {
        BG_HIGHLIGHT
    };

    let response = egui::Frame::default()
        .fill(bg_color)
        .stroke(egui::Stroke::new(2.0, border_color))
        .inner_margin(8.0)
        .corner_radius(6.0)
        .show(ui, |ui| {
            ui.set_width(TILE_IMAGE_SIZE.x);

            match slot {
                Some(ImageSlot::Ready(texture)) => {
                    ui.add(
                        egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                            .fit_to_exact_size(TILE_IMAGE_SIZE),
                    );
                }
                Some(ImageSlot::Failed) => render_placeholder(ui),
                Some(ImageSlot::Loading) | None => {
                    let (rect, _) = ui.allocate_exact_size(TILE_IMAGE_SIZE, Sense::hover());
                    ui.put(rect, egui::Spinner::new());
                }
            }

            ui.horizontal(|ui| {
                if let Some(label) = label {
                    ui.label(RichText::new(label).color(TEXT_PRIMARY).small());
                }
                if is_selected {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("★").color(ACCENT_CYAN));
                    });
                }
            });
        })
        .response
        .interact(Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(label.unwrap_or(option));

    response.clicked()
}

/// Stand-in for an image that could not be loaded
fn render_placeholder(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(TILE_IMAGE_SIZE, Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, BG_HIGHLIGHT);
    painter.text(
        rect.center() - Vec2::new(0.0, 10.0),
        Align2::CENTER_CENTER,
        "🖼",
        FontId::proportional(28.0),
        TEXT_DIM,
    );
    painter.text(
        rect.center() + Vec2::new(0.0, 20.0),
        Align2::CENTER_CENTER,
        "Image unavailable",
        FontId::proportional(11.0),
        TEXT_MUTED,
    );
}
