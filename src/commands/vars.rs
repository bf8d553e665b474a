//! Implementation of the `promptpad vars` and `promptpad check` commands.

use crate::cli::{CheckArgs, VarsArgs};
use crate::context::require_initialized_library;
use crate::error::{PadError, Result};
use crate::library::PromptLibrary;
use crate::template::{extract_placeholder_names, validate_declarations};

/// Execute the `promptpad vars` command.
///
/// Prints one placeholder name per line, in order of first occurrence.
/// With `--content` no library is needed.
pub fn cmd_vars(args: VarsArgs) -> Result<()> {
    let template = match (args.content, args.prompt_id) {
        (Some(content), _) => content,
        (None, Some(prompt_id)) => {
            let ctx = require_initialized_library()?;
            PromptLibrary::open(&ctx)?.load(&prompt_id)?.content
        }
        (None, None) => {
            return Err(PadError::UserError(
                "pass a prompt ID or --content".to_string(),
            ));
        }
    };

    for name in extract_placeholder_names(&template) {
        println!("{}", name);
    }

    Ok(())
}

/// Execute the `promptpad check` command.
///
/// Fails with a validation error (exit 2) when the template uses
/// placeholders that have no declaration.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let ctx = require_initialized_library()?;
    let prompt = PromptLibrary::open(&ctx)?.load(&args.prompt_id)?;

    let check = validate_declarations(&prompt.content, &prompt.variables);
    if !check.valid {
        return Err(PadError::ValidationError(format!(
            "{} uses undeclared variables: {}",
            prompt.id,
            check.missing.join(", ")
        )));
    }

    let used = extract_placeholder_names(&prompt.content);
    println!(
        "{}: all {} placeholder(s) declared.",
        prompt.id,
        used.len()
    );

    let unused: Vec<&str> = prompt
        .variables
        .iter()
        .map(|v| v.name.as_str())
        .filter(|name| !used.iter().any(|u| u == name))
        .collect();
    if !unused.is_empty() {
        println!("Declared but unused: {}", unused.join(", "));
    }

    Ok(())
}
