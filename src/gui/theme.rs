//! Picker theme: dark panels with amber text and a cyan selection accent

use eframe::egui::{self, Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(18, 20, 24);
/// Tiles and the "why" panel
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 28, 34);
/// Hover, placeholder and tile border
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(32, 40, 52);
/// Chosen tile
pub const BG_SELECTED: Color32 = Color32::from_rgb(40, 50, 65);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 176, 0);
pub const TEXT_DIM: Color32 = Color32::from_rgb(180, 130, 50);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 85, 60);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

/// Selection marker and chosen tile border
pub const ACCENT_CYAN: Color32 = Color32::from_rgb(0, 255, 200);
/// Chosen reason tag
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 255, 120);

/// Apply the dark theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.override_text_color = Some(TEXT_PRIMARY);
    ctx.set_style(style);
}
