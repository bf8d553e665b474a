//! Prompt document model for promptpad.
//!
//! A prompt is stored as a markdown file with YAML frontmatter. The body
//! after the closing delimiter is the template, kept byte-for-byte:
//!
//! ```text
//! ---
//! id: PROMPT-001
//! title: Greeting
//! variables:
//!   - name: name
//!     type: string
//!     config: {}
//!     order_index: 0
//! ---
//! Hello {{name}}!
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod io;
mod mutations;
pub mod value;
pub mod variable;

pub use mutations::normalize_tag;
pub use value::{ValueMap, VariableValue};
pub use variable::{Variable, VariableKind};

/// A named template with declared variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    /// Stable identifier (e.g., "PROMPT-001").
    pub id: String,

    /// Display title.
    pub title: String,

    /// Optional icon shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    /// Whether the prompt is shared publicly.
    #[serde(default)]
    pub is_public: bool,

    /// Hierarchical tag paths (e.g., "writing/email").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Declared variables in substitution order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<Variable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,

    /// Any fields not explicitly defined above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,

    /// Template body (everything after the frontmatter).
    #[serde(skip)]
    pub content: String,
}

impl Prompt {
    /// Create a prompt with no variables, tags, or timestamps.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            emoji: None,
            is_public: false,
            tags: Vec::new(),
            variables: Vec::new(),
            created: None,
            updated: None,
            extra: BTreeMap::new(),
            content: content.into(),
        }
    }

    /// Builder-style helper to attach variables.
    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.variables = variables;
        self
    }
}
