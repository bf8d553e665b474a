//! The prompt library: one markdown document per prompt under
//! `.promptpad/prompts/`.
//!
//! This module provides:
//! - An index mapping prompt IDs to files
//! - Loading the full prompt set for listing, search, and resolution
//! - ID issuance, saving (with rename on title change), and deletion

mod ids;
mod search;

pub use ids::validate_prompt_id;
pub use search::PromptFilter;

use crate::context::LibraryContext;
use crate::error::{PadError, Result};
use crate::prompt::Prompt;
use ids::{
    generate_prompt_filename, generate_prompt_id, prompt_id_from_filename, prompt_number,
    validate_filename_safe,
};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Location of a prompt document in the library.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    /// The prompt ID (e.g., "PROMPT-001").
    pub id: String,

    /// Full path to the prompt file.
    pub path: PathBuf,
}

/// Index of every prompt file in a library.
#[derive(Debug)]
pub struct PromptLibrary {
    prompts_dir: PathBuf,
    entries: HashMap<String, PromptEntry>,
    max_number: u32,
}

impl PromptLibrary {
    /// Scan the prompts directory of `ctx`.
    ///
    /// Only `PROMPT-NNN[-slug].md` files are indexed; anything else in the
    /// directory is ignored. Two files claiming the same ID is an error.
    pub fn open(ctx: &LibraryContext) -> Result<Self> {
        let mut library = PromptLibrary {
            prompts_dir: ctx.prompts_dir.clone(),
            entries: HashMap::new(),
            max_number: 0,
        };

        if !library.prompts_dir.exists() {
            return Ok(library);
        }

        let entries = fs::read_dir(&library.prompts_dir).map_err(|e| {
            PadError::UserError(format!(
                "failed to read prompts directory '{}': {}",
                library.prompts_dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                PadError::UserError(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }

            let Some(id) = prompt_id_from_filename(&path) else {
                continue;
            };
            let Some(number) = prompt_number(&id) else {
                continue;
            };

            if let Some(existing) = library.entries.get(&id) {
                return Err(PadError::UserError(format!(
                    "duplicate prompt ID {}: '{}' and '{}'",
                    id,
                    existing.path.display(),
                    path.display()
                )));
            }

            library.max_number = library.max_number.max(number);
            library
                .entries
                .insert(id.clone(), PromptEntry { id, path });
        }

        Ok(library)
    }

    /// The ID the next `add` will receive.
    pub fn next_id(&self) -> String {
        generate_prompt_id(self.max_number + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Validate `prompt_id` and return its entry, or a user error naming it.
    ///
    /// Lookup is case-insensitive.
    pub fn require(&self, prompt_id: &str) -> Result<&PromptEntry> {
        let normalized = validate_prompt_id(prompt_id)?;
        self.entries.get(&normalized).ok_or_else(|| {
            PadError::UserError(format!(
                "prompt '{}' not found in '{}'",
                normalized,
                self.prompts_dir.display()
            ))
        })
    }

    /// Load one prompt.
    ///
    /// The frontmatter `id` must agree with the filename.
    pub fn load(&self, prompt_id: &str) -> Result<Prompt> {
        let entry = self.require(prompt_id)?;
        load_entry(entry)
    }

    /// Load every prompt, most recently updated first.
    ///
    /// Prompts without an `updated` timestamp sort last; ties are broken by
    /// ID so the order is stable.
    pub fn load_all(&self) -> Result<Vec<Prompt>> {
        let mut prompts = self
            .entries
            .values()
            .map(load_entry)
            .collect::<Result<Vec<_>>>()?;

        prompts.sort_by(|a, b| b.updated.cmp(&a.updated).then_with(|| a.id.cmp(&b.id)));
        Ok(prompts)
    }

    /// Write `prompt` to its file and update the index.
    ///
    /// The filename follows the title, so a retitled prompt gets a new file
    /// and the old one is removed after the new one is in place.
    pub fn save(&mut self, prompt: &Prompt) -> Result<PathBuf> {
        let id = validate_prompt_id(&prompt.id)?;
        let number = prompt_number(&id).ok_or_else(|| {
            PadError::UserError(format!("invalid prompt ID '{}'", prompt.id))
        })?;

        let filename = generate_prompt_filename(&id, &prompt.title);
        validate_filename_safe(&filename)?;

        fs::create_dir_all(&self.prompts_dir).map_err(|e| {
            PadError::UserError(format!(
                "failed to create prompts directory '{}': {}",
                self.prompts_dir.display(),
                e
            ))
        })?;

        let path = self.prompts_dir.join(&filename);
        prompt.save(&path)?;

        if let Some(previous) = self.entries.get(&id)
            && previous.path != path
        {
            crate::fs::remove_file(&previous.path)?;
        }

        self.max_number = self.max_number.max(number);
        self.entries.insert(
            id.clone(),
            PromptEntry {
                id,
                path: path.clone(),
            },
        );
        Ok(path)
    }

    /// Delete a prompt's file and drop it from the index.
    pub fn remove(&mut self, prompt_id: &str) -> Result<PromptEntry> {
        let id = self.require(prompt_id)?.id.clone();
        let entry = self.entries.remove(&id).ok_or_else(|| {
            PadError::UserError(format!("prompt '{}' not found", id))
        })?;
        crate::fs::remove_file(&entry.path)?;
        Ok(entry)
    }
}

fn load_entry(entry: &PromptEntry) -> Result<Prompt> {
    let prompt = Prompt::load(&entry.path)?;
    if !prompt.id.eq_ignore_ascii_case(&entry.id) {
        return Err(PadError::UserError(format!(
            "prompt file '{}' declares id '{}' but is named for {}",
            entry.path.display(),
            prompt.id,
            entry.id
        )));
    }
    Ok(prompt)
}
