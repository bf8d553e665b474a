//! Recursive prompt resolution.
//!
//! A prompt resolves to its template with placeholders substituted. A
//! `prompt`-typed variable whose value names another prompt expands to that
//! prompt's own resolution, using the same value map.
//!
//! # Failure model
//!
//! - The root prompt missing is fatal ([`ResolveError::PromptNotFound`]).
//! - Nesting deeper than [`MAX_DEPTH`] is fatal for the whole resolution
//!   ([`ResolveError::DepthExceeded`]). This is also what stops cycles such
//!   as A -> B -> A; there is no visited set.
//! - A nested reference to a prompt that does not exist degrades: the
//!   placeholder receives the raw supplied value and a [`Fallback`] is
//!   recorded.
//! - Placeholders with no value anywhere stay in the output verbatim.

use super::placeholder::{replace_placeholder, substitute_values};
use crate::prompt::{Prompt, ValueMap};
use thiserror::Error;

/// Deepest frame allowed. The root is depth 0, so four frames in total.
pub const MAX_DEPTH: usize = 3;

/// Fatal resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("prompt '{id}' not found")]
    PromptNotFound { id: String },

    #[error("maximum prompt composition depth exceeded (reached depth {depth})")]
    DepthExceeded { depth: usize },
}

/// A nested reference that could not be expanded and fell back to its raw
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Prompt whose variable held the reference.
    pub prompt_id: String,
    /// The `prompt`-typed variable.
    pub variable: String,
    /// The supplied value that was treated as a prompt identifier.
    pub reference: String,
    pub reason: ResolveError,
}

/// Final text plus any degraded nested references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub fallbacks: Vec<Fallback>,
}

/// Resolve `prompt_id` against `prompts` with the supplied `values`.
#[allow(dead_code)]
pub fn resolve(prompt_id: &str, prompts: &[Prompt], values: &ValueMap) -> Result<String, ResolveError> {
    resolve_detailed(prompt_id, prompts, values).map(|r| r.text)
}

/// Like [`resolve`], but also reports every nested reference that fell back
/// to its raw value.
pub fn resolve_detailed(
    prompt_id: &str,
    prompts: &[Prompt],
    values: &ValueMap,
) -> Result<Resolution, ResolveError> {
    let mut fallbacks = Vec::new();
    let text = resolve_at(prompt_id, prompts, values, 0, &mut fallbacks)?;
    Ok(Resolution { text, fallbacks })
}

fn resolve_at(
    prompt_id: &str,
    prompts: &[Prompt],
    values: &ValueMap,
    depth: usize,
    fallbacks: &mut Vec<Fallback>,
) -> Result<String, ResolveError> {
    if depth > MAX_DEPTH {
        return Err(ResolveError::DepthExceeded { depth });
    }

    let prompt = prompts
        .iter()
        .find(|p| p.id == prompt_id)
        .ok_or_else(|| ResolveError::PromptNotFound {
            id: prompt_id.to_string(),
        })?;

    let mut text = prompt.content.clone();

    for (i, variable) in prompt.variables.iter().enumerate() {
        // A repeated name is governed by its last declaration.
        if prompt.variables[i + 1..].iter().any(|v| v.name == variable.name) {
            continue;
        }
        let Some(value) = values.get(&variable.name) else {
            continue;
        };
        let raw = value.to_string();

        let replacement = if variable.kind.is_prompt_reference() && !raw.is_empty() {
            match resolve_at(&raw, prompts, values, depth + 1, fallbacks) {
                Ok(nested) => nested,
                Err(err @ ResolveError::DepthExceeded { .. }) => return Err(err),
                Err(reason) => {
                    fallbacks.push(Fallback {
                        prompt_id: prompt.id.clone(),
                        variable: variable.name.clone(),
                        reference: raw.clone(),
                        reason,
                    });
                    raw
                }
            }
        } else {
            raw
        };

        text = replace_placeholder(&text, &variable.name, &replacement);
    }

    Ok(substitute_values(&text, values))
}
