//! Mutation helpers used by the edit flows.
//!
//! Title, body, variables, and tags replace wholesale; nothing is patched
//! incrementally.

use super::{Prompt, Variable};
use chrono::{DateTime, Utc};

impl Prompt {
    /// Replace the variable list, renumbering `order_index` by position.
    pub fn replace_variables(&mut self, variables: Vec<Variable>) {
        self.variables = variables
            .into_iter()
            .enumerate()
            .map(|(i, mut v)| {
                v.order_index = i as u32;
                v
            })
            .collect();
    }

    /// Replace the tag set. Tags are trimmed, stripped of surrounding
    /// slashes, and de-duplicated keeping first occurrence.
    pub fn replace_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = normalize_tag(tag.as_ref());
            if !tag.is_empty() && !out.contains(&tag) {
                out.push(tag);
            }
        }
        self.tags = out;
    }

    /// Set the creation timestamp (if unset) and the update timestamp.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created.is_none() {
            self.created = Some(now);
        }
        self.updated = Some(now);
    }
}

/// Normalize a tag path: trim whitespace and surrounding `/`.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().trim_matches('/').trim().to_string()
}
