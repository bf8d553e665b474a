//! Implementation of the `promptpad remove` command.

use super::load_config;
use crate::cli::RemoveArgs;
use crate::context::require_initialized_library;
use crate::error::{PadError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::library::PromptLibrary;
use serde_json::json;

/// Execute the `promptpad remove` command.
///
/// Deletion needs `--force`. Other prompts are not checked for references to
/// the removed one; resolving them later falls back to the raw ID.
pub fn cmd_remove(args: RemoveArgs) -> Result<()> {
    let ctx = require_initialized_library()?;
    let config = load_config(&ctx)?;

    let mut library = PromptLibrary::open(&ctx)?;
    let prompt = library.load(&args.prompt_id)?;

    if !args.force {
        return Err(PadError::UserError(format!(
            "refusing to remove {} (\"{}\") without --force",
            prompt.id, prompt.title
        )));
    }

    let entry = library.remove(&prompt.id)?;

    let event = Event::new(EventAction::Remove)
        .with_prompt(&entry.id)
        .with_details(json!({
            "title": prompt.title,
            "path": entry.path.display().to_string(),
        }));
    record_event(&ctx, &config, &event)?;

    println!("Removed prompt: {} ({})", entry.id, prompt.title);

    Ok(())
}
