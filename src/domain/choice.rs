//! Picker configuration supplied by the caller
//!
//! A `ChoiceConfig` is fixed for the lifetime of a picker instance. Whether the
//! "why" panel shows tag buttons or a free-text field is decided here, once,
//! from the shape of `reasons`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How the rationale for a choice is collected.
///
/// This is a three-state setting: `Unset`, `Tags([])` and `Tags([..])`.
/// An empty tag list is still "set" and suppresses the free-text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReasonMode {
    /// No tag list was supplied; the free-text field is used instead
    #[default]
    Unset,
    /// Predefined reason tags shown as toggle buttons
    Tags(Vec<String>),
}

impl ReasonMode {
    pub fn is_set(&self) -> bool {
        matches!(self, ReasonMode::Tags(_))
    }

    /// Configured tags, empty when unset
    pub fn tags(&self) -> &[String] {
        match self {
            ReasonMode::Tags(tags) => tags,
            ReasonMode::Unset => &[],
        }
    }

    /// Tag buttons render only for a non-empty tag list
    pub fn shows_tag_buttons(&self) -> bool {
        matches!(self, ReasonMode::Tags(tags) if !tags.is_empty())
    }

    /// The free-text field renders only when no tag list was supplied at all
    pub fn shows_free_text(&self) -> bool {
        matches!(self, ReasonMode::Unset)
    }

    /// Short human-readable name, used by `imagepick check`
    pub fn describe(&self) -> String {
        match self {
            ReasonMode::Unset => "free text".to_string(),
            ReasonMode::Tags(tags) if tags.is_empty() => "tags (empty, nothing shown)".to_string(),
            ReasonMode::Tags(tags) => format!("tags ({})", tags.len()),
        }
    }
}

impl From<Option<Vec<String>>> for ReasonMode {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            Some(tags) => ReasonMode::Tags(tags),
            None => ReasonMode::Unset,
        }
    }
}

// Serialized as an optional list so config files stay plain:
// a missing key means `Unset`, `reasons = []` means `Tags([])`.
impl Serialize for ReasonMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReasonMode::Tags(tags) => serializer.serialize_some(tags),
            ReasonMode::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ReasonMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<String>>::deserialize(deserializer).map(ReasonMode::from)
    }
}

/// Caller-supplied picker configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceConfig {
    /// Optional heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Body text shown above the grid
    #[serde(default)]
    pub instructions: String,

    /// Image references (path, `file://` URI or `http(s)://` URL).
    /// The string itself is the option's identity.
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub reasons: ReasonMode,

    /// Re-clicking the chosen option clears it.
    /// When false the grid still holds a single option, just without toggle-off.
    #[serde(default, alias = "singleSelect")]
    pub single_select: bool,

    /// Captions aligned by index with `options`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

fn is_unset(mode: &ReasonMode) -> bool {
    !mode.is_set()
}

impl ChoiceConfig {
    pub fn new(instructions: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            instructions: instructions.into(),
            options,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_reasons(mut self, reasons: Vec<String>) -> Self {
        self.reasons = ReasonMode::Tags(reasons);
        self
    }

    pub fn with_single_select(mut self, single_select: bool) -> Self {
        self.single_select = single_select;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Caption for the option at `index`, if one was configured
    pub fn label_for(&self, index: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }

    pub fn contains_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
