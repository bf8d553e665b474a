//! Implementation of the `promptpad resolve` command.
//!
//! Values come from `--values` (a YAML or JSON mapping) and then `--set`,
//! which overrides the file. They are validated against the root prompt's
//! declarations before anything is resolved.

use super::load_config;
use crate::cli::ResolveArgs;
use crate::context::require_initialized_library;
use crate::error::{PadError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::library::PromptLibrary;
use crate::prompt::value::{parse_assignment, parse_value_file};
use crate::prompt::ValueMap;
use crate::template::{Resolution, resolve_detailed, validate_values};
use serde_json::json;
use std::path::Path;

/// Execute the `promptpad resolve` command.
///
/// The resolved text goes to stdout. Nested references that fell back to
/// their raw value are reported on stderr; with `--strict` (or
/// `strict_resolve` in the config) they fail the command instead.
pub fn cmd_resolve(args: ResolveArgs) -> Result<()> {
    let ctx = require_initialized_library()?;
    let config = load_config(&ctx)?;
    let strict = args.strict || config.strict_resolve;

    let values = collect_values(&args.set, args.values_file.as_deref())?;
    let library = PromptLibrary::open(&ctx)?;
    let resolution = resolve_in_library(&library, &args.prompt_id, &values)?;

    for fallback in &resolution.fallbacks {
        eprintln!(
            "Warning: variable '{}' in {}: {}; inserted the raw value",
            fallback.variable, fallback.prompt_id, fallback.reason
        );
    }
    check_strict(&resolution, strict)?;

    let event = Event::new(EventAction::Resolve)
        .with_prompt(library.require(&args.prompt_id)?.id.clone())
        .with_details(json!({
            "values": values.keys().collect::<Vec<_>>(),
            "fallbacks": resolution.fallbacks.len(),
        }));
    // Resolution is read-only; a failed audit write must not lose the output.
    if let Err(e) = record_event(&ctx, &config, &event) {
        eprintln!("Warning: failed to record resolve event: {}", e);
    }

    if resolution.text.ends_with('\n') {
        print!("{}", resolution.text);
    } else {
        println!("{}", resolution.text);
    }

    Ok(())
}

/// Merge the values file (if any) with `--set` assignments.
fn collect_values(assignments: &[String], values_file: Option<&Path>) -> Result<ValueMap> {
    let mut values = match values_file {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                PadError::UserError(format!(
                    "failed to read values file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            parse_value_file(&content)?
        }
        None => ValueMap::new(),
    };

    for assignment in assignments {
        let (name, value) = parse_assignment(assignment)?;
        values.insert(name, value);
    }

    Ok(values)
}

/// Validate `values` against the root prompt and resolve it against the
/// whole library.
fn resolve_in_library(
    library: &PromptLibrary,
    prompt_id: &str,
    values: &ValueMap,
) -> Result<Resolution> {
    let root_id = library.require(prompt_id)?.id.clone();
    let prompts = library.load_all()?;

    let root = prompts
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(&root_id))
        .ok_or_else(|| PadError::UserError(format!("prompt '{}' not found", root_id)))?;

    let issues = validate_values(&root.variables, values);
    if !issues.is_empty() {
        let details: Vec<String> = issues
            .iter()
            .map(|issue| format!("  {}: {}", issue.name, issue.error))
            .collect();
        return Err(PadError::ValidationError(format!(
            "invalid values for {}:\n{}",
            root.id,
            details.join("\n")
        )));
    }

    Ok(resolve_detailed(&root.id, &prompts, values)?)
}

fn check_strict(resolution: &Resolution, strict: bool) -> Result<()> {
    if !strict || resolution.fallbacks.is_empty() {
        return Ok(());
    }

    let references: Vec<&str> = resolution
        .fallbacks
        .iter()
        .map(|f| f.reference.as_str())
        .collect();
    Err(PadError::ResolveError(format!(
        "nested prompt reference(s) could not be expanded: {}",
        references.join(", ")
    )))
}
