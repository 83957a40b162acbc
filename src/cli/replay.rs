//! Replay command implementation

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use imagepick::config::load_choice_config;
use imagepick::replay::{parse_script, replay};

/// Replay a script against a fresh picker and print every snapshot as a JSON line
pub fn replay_command(config_path: &Path, script_path: &Path) -> Result<()> {
    let config = load_choice_config(config_path)
        .with_context(|| format!("Failed to load picker config: {}", config_path.display()))?;

    let script = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
    let events = parse_script(&script)
        .with_context(|| format!("Invalid script: {}", script_path.display()))?;

    info!("[imagepick] Replaying {} interaction(s)", events.len());

    for snapshot in replay(config, &events) {
        println!("{}", serde_json::to_string(&snapshot)?);
    }

    Ok(())
}
