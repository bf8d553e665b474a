//! Placeholder scanning and substitution.
//!
//! A placeholder is `{{` + one or more ASCII word characters + `}}`.
//! The scan is flat, not a balanced-brace parse, with one extra rule: a
//! span directly preceded by `{` or directly followed by `}` is not a
//! placeholder. So `{{{name}}}` and `{{na me}}` are both left alone.

use crate::prompt::ValueMap;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid placeholder regex")
});

/// A placeholder occurrence in template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The variable name between the braces.
    pub name: &'a str,
    /// Byte range of the whole `{{name}}` span.
    pub span: Range<usize>,
}

/// Iterate over the placeholders in `text`, left to right.
pub fn placeholders(text: &str) -> impl Iterator<Item = Placeholder<'_>> {
    let bytes = text.as_bytes();
    PLACEHOLDER_REGEX.captures_iter(text).filter_map(move |caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;

        let brace_before = whole.start() > 0 && bytes[whole.start() - 1] == b'{';
        let brace_after = bytes.get(whole.end()) == Some(&b'}');
        if brace_before || brace_after {
            return None;
        }

        Some(Placeholder {
            name: name.as_str(),
            span: whole.range(),
        })
    })
}

/// Return the distinct placeholder names in `template`, in order of first
/// occurrence.
///
/// ```text
/// "Hi {{name}}, {{topic}} and {{name}}"  ->  ["name", "topic"]
/// ```
pub fn extract_placeholder_names(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholders(template)
        .filter(|p| seen.insert(p.name))
        .map(|p| p.name.to_string())
        .collect()
}

/// Replace placeholders using a lookup. Placeholders for which `lookup`
/// returns `None` are left verbatim.
pub fn replace_placeholders<F>(text: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for placeholder in placeholders(text) {
        if let Some(value) = lookup(placeholder.name) {
            result.push_str(&text[last..placeholder.span.start]);
            result.push_str(&value);
            last = placeholder.span.end;
        }
    }

    result.push_str(&text[last..]);
    result
}

/// Replace every `{{name}}` placeholder with `value`.
pub fn replace_placeholder(text: &str, name: &str, value: &str) -> String {
    replace_placeholders(text, |found| (found == name).then(|| value.to_string()))
}

/// Replace every placeholder whose name is a key in `values` with that
/// value's textual form. Single pass: inserted text is not rescanned.
pub fn substitute_values(text: &str, values: &ValueMap) -> String {
    replace_placeholders(text, |name| values.get(name).map(|v| v.to_string()))
}
