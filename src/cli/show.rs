//! Show command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use imagepick::config::load_choice_config;

/// Open the picker window for a config file
pub fn show_command(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = load_choice_config(config_path)
        .with_context(|| format!("Failed to load picker config: {}", config_path.display()))?;

    imagepick::gui::run_gui(config, output)
}
