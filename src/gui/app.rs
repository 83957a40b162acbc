//! eframe::App implementation for the picker window

use eframe::egui;

use super::images::ImageCache;
use super::picker::render_image_picker;
use super::theme::apply_theme;
use crate::SelectionController;

/// Native window hosting one picker instance
pub struct PickerApp {
    controller: SelectionController,
    images: ImageCache,
}

impl PickerApp {
    pub fn new(controller: SelectionController) -> Self {
        Self {
            controller,
            images: ImageCache::new(),
        }
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);

        self.images
            .ensure_loaded(ctx, &self.controller.config().options);
        self.images.poll(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            for event in render_image_picker(ui, &self.controller, &self.images) {
                self.controller.apply(&event);
            }
        });
    }
}
