//! Check command implementation

use anyhow::{Context, Result};
use std::path::Path;

use imagepick::config::load_choice_config;

/// Parse a config and describe what the picker will show
pub fn check_command(config_path: &Path) -> Result<()> {
    let config = load_choice_config(config_path)
        .with_context(|| format!("Failed to load picker config: {}", config_path.display()))?;

    if let Some(title) = &config.title {
        println!("Title:    {}", title);
    }
    println!(
        "Mode:     {}",
        if config.single_select {
            "single-select (re-click clears)"
        } else {
            "select (re-click keeps)"
        }
    );
    println!("Reasons:  {}", config.reasons.describe());
    println!("Options ({}):", config.options.len());

    for (idx, option) in config.options.iter().enumerate() {
        match config.label_for(idx) {
            Some(label) => println!("  {}. {} - {}", idx + 1, option, label),
            None => println!("  {}. {}", idx + 1, option),
        }
    }

    if let Some(labels) = &config.labels {
        if labels.len() != config.options.len() {
            println!(
                "\nNote: {} label(s) for {} option(s); unmatched entries are ignored.",
                labels.len(),
                config.options.len()
            );
        }
    }

    Ok(())
}
