//! Picker config file I/O

use std::path::Path;

use crate::ChoiceConfig;

/// Starter config written by `imagepick init`
pub const STARTER_CONFIG: &str = r#"# imagepick configuration
# =======================
#
#   title         - Optional heading
#   instructions  - Text shown above the image grid
#   options       - Image paths, file:// URIs or http(s):// URLs (the string is the option's identity)
#   labels        - Optional captions, matched to options by position
#   single_select - Re-clicking the chosen image clears it (default: false)
#   reasons       - Optional reason tags. Leave the key out to ask for free text instead.
#                   An empty list (reasons = []) hides both tags and free text.

title = "Which one reads better?"
instructions = "Pick the image you prefer, then tell us why."
options = ["images/a.png", "images/b.png"]
labels = ["Variant A", "Variant B"]
single_select = true
reasons = ["Clear", "Vague"]
"#;

/// Error type for loading picker configs
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: .{0} (expected .toml, .yaml, .yml or .json)")]
    UnsupportedFormat(String),
}

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension. Files without one are TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(ConfigFormat::Toml);
        };
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse config content in the given format
pub fn parse_choice_config(content: &str, format: ConfigFormat) -> Result<ChoiceConfig, ConfigError> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Load a picker config from a file
pub fn load_choice_config(path: &Path) -> Result<ChoiceConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_choice_config(&content, format)?;
    tracing::debug!(
        "[imagepick] Loaded {} option(s) from {}",
        config.options.len(),
        path.display()
    );
    Ok(config)
}
