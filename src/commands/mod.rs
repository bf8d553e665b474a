//! Command implementations for promptpad.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers the editing commands share.

mod add;
mod edit;
mod init;
mod list;
mod remove;
mod resolve;
mod show;
mod vars;

use crate::cli::Command;
use crate::config::Config;
use crate::context::LibraryContext;
use crate::error::{PadError, Result};
use crate::prompt::{Prompt, Variable};
use crate::template::validate_declarations;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init => init::cmd_init(),
        Command::Add(args) => add::cmd_add(args),
        Command::Edit(args) => edit::cmd_edit(args),
        Command::Remove(args) => remove::cmd_remove(args),
        Command::List(args) => list::cmd_list(args),
        Command::Search(args) => list::cmd_search(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Vars(args) => vars::cmd_vars(args),
        Command::Check(args) => vars::cmd_check(args),
        Command::Resolve(args) => resolve::cmd_resolve(args),
    }
}

/// Load the library config, falling back to defaults when the file is absent.
fn load_config(ctx: &LibraryContext) -> Result<Config> {
    Config::load_or_default(ctx.config_path())
}

/// Template text from `--content` or `--file`, if either was given.
fn read_template(content: Option<String>, file: Option<PathBuf>) -> Result<Option<String>> {
    if let Some(path) = file {
        let text = std::fs::read_to_string(&path).map_err(|e| {
            PadError::UserError(format!(
                "failed to read template file '{}': {}",
                path.display(),
                e
            ))
        })?;
        return Ok(Some(text));
    }
    Ok(content)
}

fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(PadError::UserError("prompt title must not be empty".to_string()));
    }
    Ok(title.to_string())
}

/// Parse `--var` specs in the order given.
fn parse_variable_specs(specs: &[String]) -> Result<Vec<Variable>> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| Variable::parse_spec(spec, i as u32))
        .collect()
}

/// The save gate: refuse prompts that use undeclared placeholders.
fn enforce_declarations(prompt: &Prompt) -> Result<()> {
    let check = validate_declarations(&prompt.content, &prompt.variables);
    if check.valid {
        return Ok(());
    }

    let hints: Vec<String> = check
        .missing
        .iter()
        .map(|name| format!("--var {}", name))
        .collect();

    Err(PadError::ValidationError(format!(
        "template uses undeclared variables: {}\n\n\
         Declare them, e.g. {}",
        check.missing.join(", "),
        hints.join(" ")
    )))
}
