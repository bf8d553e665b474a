//! Prompt ID validation, generation, and filename helpers.

use crate::error::{PadError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Prefix of every library-issued prompt ID.
const PROMPT_ID_PREFIX: &str = "PROMPT-";

/// Regex pattern for valid prompt IDs.
static PROMPT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PROMPT-\d{3,}$").expect("Invalid prompt ID regex"));

/// Validate a prompt ID given on the command line.
///
/// Accepts any case and returns the normalized (uppercase) ID. Path
/// separators and `..` are rejected before anything else.
pub fn validate_prompt_id(prompt_id: &str) -> Result<String> {
    if prompt_id.contains('/') || prompt_id.contains('\\') || prompt_id.contains("..") {
        return Err(PadError::UserError(format!(
            "invalid prompt ID '{}': contains path traversal characters.\n\
             Prompt IDs must be in the format PROMPT-NNN (e.g., PROMPT-001).",
            prompt_id
        )));
    }

    let normalized = prompt_id.trim().to_uppercase();

    if !PROMPT_ID_REGEX.is_match(&normalized) {
        return Err(PadError::UserError(format!(
            "invalid prompt ID '{}': must be in the format PROMPT-NNN (e.g., PROMPT-001).\n\
             The number must be at least 3 digits.",
            prompt_id
        )));
    }

    Ok(normalized)
}

/// Format a prompt ID from its number, zero-padded to three digits.
pub fn generate_prompt_id(number: u32) -> String {
    format!("{}{:03}", PROMPT_ID_PREFIX, number)
}

/// Slugify a title for use in a prompt filename.
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::new();
    let mut last_was_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen && !slug.is_empty() {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > 50 {
        if let Some(pos) = slug[..50].rfind('-') {
            slug.truncate(pos);
        } else {
            slug.truncate(50);
        }
    }

    if slug.is_empty() {
        slug = "untitled".to_string();
    }

    slug
}

/// Filename for a prompt: `PROMPT-001-slug.md`.
pub fn generate_prompt_filename(prompt_id: &str, title: &str) -> String {
    format!("{}-{}.md", prompt_id, slugify_title(title))
}

/// Reject filenames that could escape the prompts directory.
pub fn validate_filename_safe(filename: &str) -> Result<()> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(PadError::UserError(format!(
            "generated filename '{}' is not safe: contains path traversal characters",
            filename
        )));
    }

    if filename.starts_with('.') {
        return Err(PadError::UserError(format!(
            "generated filename '{}' is not safe: starts with '.'",
            filename
        )));
    }

    Ok(())
}

/// Extract `PROMPT-NNN` from a `PROMPT-NNN-slug.md` (or `PROMPT-NNN.md`) path.
pub(super) fn prompt_id_from_filename(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let rest = stem.strip_prefix(PROMPT_ID_PREFIX)?;
    let digits = rest.split('-').next()?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(format!("{}{}", PROMPT_ID_PREFIX, digits))
}

/// Numeric part of a prompt ID.
pub(super) fn prompt_number(prompt_id: &str) -> Option<u32> {
    prompt_id.strip_prefix(PROMPT_ID_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_prompt_id_valid() {
        assert_eq!(validate_prompt_id("PROMPT-001").unwrap(), "PROMPT-001");
        assert_eq!(validate_prompt_id("prompt-001").unwrap(), "PROMPT-001");
        assert_eq!(validate_prompt_id("PROMPT-1234").unwrap(), "PROMPT-1234");
    }

    #[test]
    fn test_validate_prompt_id_invalid_format() {
        assert!(validate_prompt_id("PROMPT-01").is_err());
        assert!(validate_prompt_id("PROMPT001").is_err());
        assert!(validate_prompt_id("001").is_err());
        assert!(validate_prompt_id("PROMPT-").is_err());
        assert!(validate_prompt_id("").is_err());
    }

    #[test]
    fn test_validate_prompt_id_path_traversal() {
        assert!(validate_prompt_id("../PROMPT-001").is_err());
        assert!(validate_prompt_id("PROMPT-001/..").is_err());
        assert!(validate_prompt_id("..\\PROMPT-001").is_err());
    }

    #[test]
    fn test_generate_prompt_id() {
        assert_eq!(generate_prompt_id(1), "PROMPT-001");
        assert_eq!(generate_prompt_id(42), "PROMPT-042");
        assert_eq!(generate_prompt_id(1000), "PROMPT-1000");
    }

    #[test]
    fn test_slugify_title() {
        assert_eq!(slugify_title("Email Reply Draft"), "email-reply-draft");
        assert_eq!(slugify_title("Summarize: {{topic}}!"), "summarize-topic");
        assert_eq!(slugify_title("   "), "untitled");
        assert_eq!(slugify_title("👋"), "untitled");

        let long = "a very long title that keeps going well past the fifty character limit";
        let slug = slugify_title(long);
        assert!(slug.len() <= 50);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_generate_prompt_filename() {
        assert_eq!(
            generate_prompt_filename("PROMPT-007", "Code Review"),
            "PROMPT-007-code-review.md"
        );
    }

    #[test]
    fn test_validate_filename_safe() {
        assert!(validate_filename_safe("PROMPT-001-x.md").is_ok());
        assert!(validate_filename_safe("../x.md").is_err());
        assert!(validate_filename_safe("a/b.md").is_err());
        assert!(validate_filename_safe(".hidden.md").is_err());
    }

    #[test]
    fn test_prompt_id_from_filename() {
        let id = |s: &str| prompt_id_from_filename(&PathBuf::from(s));
        assert_eq!(id("PROMPT-001-greeting.md"), Some("PROMPT-001".to_string()));
        assert_eq!(id("PROMPT-0012.md"), Some("PROMPT-0012".to_string()));
        assert_eq!(id("notes.md"), None);
        assert_eq!(id("PROMPT-abc-x.md"), None);
    }

    #[test]
    fn test_prompt_number() {
        assert_eq!(prompt_number("PROMPT-001"), Some(1));
        assert_eq!(prompt_number("PROMPT-120"), Some(120));
        assert_eq!(prompt_number("TASK-001"), None);
    }
}
