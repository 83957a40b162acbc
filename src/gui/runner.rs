//! GUI runner - opens a picker window for one configuration
//!
//! Every snapshot is logged as it arrives. The last one is written out as JSON
//! when the window closes.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::{debug, info};

use super::app::PickerApp;
use crate::{ChoiceConfig, SelectionController, SelectionSnapshot};

/// Run the picker window until it is closed
pub fn run_gui(config: ChoiceConfig, output: Option<PathBuf>) -> Result<()> {
    let window_title = config
        .title
        .clone()
        .unwrap_or_else(|| "imagepick".to_string());

    info!(
        "[imagepick] Opening picker with {} option(s), reasons: {}",
        config.options.len(),
        config.reasons.describe()
    );

    let latest: Rc<RefCell<Option<SelectionSnapshot>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&latest);
    let controller = SelectionController::with_callback(config, move |snapshot| {
        match serde_json::to_string(snapshot) {
            Ok(json) => info!("[imagepick] selection: {}", json),
            Err(e) => debug!("[imagepick] Failed to serialize snapshot: {}", e),
        }
        *sink.borrow_mut() = Some(snapshot.clone());
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title.clone())
            .with_inner_size([820.0, 640.0])
            .with_min_inner_size([400.0, 300.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    let app = PickerApp::new(controller);

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    let last = latest.borrow().clone();
    match last {
        Some(snapshot) => write_snapshot(&snapshot, output.as_deref())?,
        None => info!("[imagepick] Window closed without a selection"),
    }

    Ok(())
}

/// Write a snapshot as pretty JSON to `output`, or to stdout
pub fn write_snapshot(snapshot: &SelectionSnapshot, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize selection")?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write selection: {}", path.display()))?;
            info!("[imagepick] Wrote selection to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Configure fonts with system fallbacks for the ✓ ✗ ★ 🖼 symbols
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    #[cfg(target_os = "macos")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
        ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
        ("segoe", "C:\\Windows\\Fonts\\segoeui.ttf"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf"),
        ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ];

    for (name, path) in font_fallbacks {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert((*name).to_owned(), FontData::from_owned(font_data).into());

            if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
                family.push((*name).to_owned());
            }
            debug!("[imagepick] Loaded fallback font '{}' from: {}", name, path);
        }
    }

    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_snapshot_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("selection.json");
        let snapshot = SelectionSnapshot {
            image: Some("a.png".into()),
            reasons: vec!["Clear".into()],
            custom_reason: String::new(),
        };

        write_snapshot(&snapshot, Some(&path)).unwrap();

        let written: SelectionSnapshot =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, snapshot);
    }
}
