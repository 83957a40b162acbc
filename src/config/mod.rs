//! Loading picker configurations from disk
//!
//! A picker is described by one file holding a [`ChoiceConfig`](crate::ChoiceConfig).
//! TOML is the default format; YAML and JSON are picked by file extension.

mod io;

pub use io::{load_choice_config, parse_choice_config, ConfigError, ConfigFormat, STARTER_CONFIG};
