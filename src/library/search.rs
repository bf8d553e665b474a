//! Filtering prompts by text and tag.

use crate::prompt::{Prompt, normalize_tag};

/// Filters applied by `list` and `search`. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct PromptFilter {
    /// Case-insensitive substring matched against title and body.
    pub query: Option<String>,
    /// Tag path; matches the tag itself and anything nested under it.
    pub tag: Option<String>,
}

impl PromptFilter {
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(query) = &self.query
            && !matches_query(prompt, query)
        {
            return false;
        }
        if let Some(tag) = &self.tag
            && !has_tag(prompt, tag)
        {
            return false;
        }
        true
    }

    /// Keep the prompts that match, preserving order.
    pub fn apply<'a>(&self, prompts: &'a [Prompt]) -> Vec<&'a Prompt> {
        prompts.iter().filter(|p| self.matches(p)).collect()
    }
}

fn matches_query(prompt: &Prompt, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    prompt.title.to_lowercase().contains(&needle) || prompt.content.to_lowercase().contains(&needle)
}

/// `writing` matches `writing` and `writing/email` but not `writings`.
fn has_tag(prompt: &Prompt, tag: &str) -> bool {
    let wanted = normalize_tag(tag);
    if wanted.is_empty() {
        return true;
    }
    prompt.tags.iter().any(|t| {
        t == &wanted
            || t
                .strip_prefix(wanted.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
