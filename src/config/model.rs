//! Config struct definition and default implementation.

use super::types::default_true;
use serde::{Deserialize, Serialize};

/// Configuration for a prompt library.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Editing
    // =========================================================================
    /// Declare a string variable for every undeclared placeholder on save.
    #[serde(default = "default_true")]
    pub auto_detect_variables: bool,

    /// Visibility of new prompts when neither `--public` nor `--private` is given.
    #[serde(default)]
    pub default_public: bool,

    /// Tags added to every new prompt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_tags: Vec<String>,

    // =========================================================================
    // Resolution
    // =========================================================================
    /// Fail `resolve` when a nested reference falls back to its raw value.
    #[serde(default)]
    pub strict_resolve: bool,

    // =========================================================================
    // Audit
    // =========================================================================
    /// Append events to `.promptpad/events/events.ndjson`.
    #[serde(default = "default_true")]
    pub events_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_detect_variables: default_true(),
            default_public: false,
            default_tags: Vec::new(),
            strict_resolve: false,
            events_enabled: default_true(),
        }
    }
}
