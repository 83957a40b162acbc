//! Init command implementation

use anyhow::{bail, Result};
use std::path::Path;

use imagepick::config::STARTER_CONFIG;

/// Write a starter picker config
pub fn init_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, STARTER_CONFIG)?;
    println!("Created: {}", path.display());

    Ok(())
}
