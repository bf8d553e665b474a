//! Parsing, serialization, and file I/O for prompt documents.

use super::Prompt;
use crate::error::{PadError, Result};
use std::path::Path;

const DELIMITER: &str = "---";

impl Prompt {
    /// Parse a prompt document.
    ///
    /// Both LF and CRLF line endings are accepted. The body is kept exactly
    /// as written, and variables are put into `order_index` order.
    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, body) = split_frontmatter(content)?;

        let mut prompt: Prompt = serde_yaml::from_str(frontmatter).map_err(|e| {
            PadError::UserError(format!("failed to parse prompt frontmatter: {}", e))
        })?;

        if prompt.id.trim().is_empty() {
            return Err(PadError::UserError(
                "prompt frontmatter has an empty 'id'".to_string(),
            ));
        }

        // Stable, so duplicate indices keep their file order.
        prompt.variables.sort_by_key(|v| v.order_index);
        prompt.content = body.to_string();
        Ok(prompt)
    }

    /// Load a prompt document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PadError::UserError(format!(
                "failed to read prompt file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| {
            PadError::UserError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Atomically save the prompt document to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_document()?;
        crate::fs::atomic_write_file(path, &content)
    }

    /// Serialize to the on-disk document form.
    pub fn to_document(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).map_err(|e| {
            PadError::UserError(format!("failed to serialize prompt frontmatter: {}", e))
        })?;

        let mut output = String::with_capacity(yaml.len() + self.content.len() + 8);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&yaml);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&self.content);
        Ok(output)
    }
}

/// Split a document into its frontmatter YAML and body.
///
/// The opening line must be `---`; the frontmatter ends at the next line
/// that is exactly `---` (ignoring a trailing `\r`).
fn split_frontmatter(content: &str) -> Result<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().unwrap_or_default();
    if first.trim_end_matches(['\r', '\n']) != DELIMITER {
        return Err(PadError::UserError(
            "prompt file must start with '---' frontmatter delimiter".to_string(),
        ));
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let frontmatter = &content[start..offset];
            let body = &content[offset + line.len()..];
            return Ok((frontmatter, body));
        }
        offset += line.len();
    }

    Err(PadError::UserError(
        "prompt file missing closing '---' frontmatter delimiter".to_string(),
    ))
}
