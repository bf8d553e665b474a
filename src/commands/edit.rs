//! Implementation of the `promptpad edit` command.

use super::{enforce_declarations, load_config, parse_variable_specs, read_template, validate_title};
use crate::cli::EditArgs;
use crate::context::require_initialized_library;
use crate::error::{PadError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::library::PromptLibrary;
use crate::template::sync_declared_variables;
use chrono::Utc;
use serde_json::json;

/// Execute the `promptpad edit` command.
///
/// Applies the given fields, re-runs variable auto-detection against the
/// (possibly new) template, and saves only if the declaration check passes.
pub fn cmd_edit(args: EditArgs) -> Result<()> {
    let ctx = require_initialized_library()?;
    let config = load_config(&ctx)?;

    let mut library = PromptLibrary::open(&ctx)?;
    let mut prompt = library.load(&args.prompt_id)?;
    let mut changed: Vec<&str> = Vec::new();

    if let Some(title) = &args.title {
        prompt.title = validate_title(title)?;
        changed.push("title");
    }

    if let Some(content) = read_template(args.content, args.file)? {
        prompt.content = content;
        changed.push("content");
    }

    if args.clear_vars {
        prompt.replace_variables(Vec::new());
        changed.push("variables");
    } else if !args.vars.is_empty() {
        prompt.replace_variables(parse_variable_specs(&args.vars)?);
        changed.push("variables");
    }

    if args.clear_tags {
        prompt.replace_tags(Vec::<String>::new());
        changed.push("tags");
    } else if !args.tags.is_empty() {
        prompt.replace_tags(&args.tags);
        changed.push("tags");
    }

    if let Some(emoji) = args.emoji {
        prompt.emoji = Some(emoji).filter(|e| !e.trim().is_empty());
        changed.push("emoji");
    }

    if args.public || args.private {
        prompt.is_public = args.public;
        changed.push("is_public");
    }

    if changed.is_empty() {
        return Err(PadError::UserError(format!(
            "nothing to change for {}.\n\n\
             Pass at least one of --title, --content, --file, --var, --clear-vars, \
             --tag, --clear-tags, --emoji, --public, --private.",
            prompt.id
        )));
    }

    let detected = if config.auto_detect_variables {
        sync_declared_variables(&prompt.content, &mut prompt.variables)
    } else {
        Vec::new()
    };

    enforce_declarations(&prompt)?;

    prompt.touch(Utc::now());
    let path = library.save(&prompt)?;

    let event = Event::new(EventAction::Edit)
        .with_prompt(&prompt.id)
        .with_details(json!({
            "fields": changed,
            "detected": detected,
            "path": path.display().to_string(),
        }));
    record_event(&ctx, &config, &event)?;

    println!("Updated prompt: {}", prompt.id);
    println!("  Changed:  {}", changed.join(", "));
    if !detected.is_empty() {
        println!("  Detected: {} (declared as string)", detected.join(", "));
    }
    println!("  Path:     {}", path.display());

    Ok(())
}
