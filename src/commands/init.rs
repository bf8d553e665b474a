//! Implementation of the `promptpad init` command.
//!
//! Creates the library layout in the current directory (or in
//! `PROMPTPAD_DIR` when set):
//!
//! 1. `.promptpad/prompts/`
//! 2. `.promptpad/events/`
//! 3. `.promptpad/config.yaml` with default settings (if missing)
//!
//! Existing prompts and config are never touched.

use crate::config::Config;
use crate::context::{LIBRARY_ROOT_ENV, LibraryContext};
use crate::error::{PadError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::fs::atomic_write_file;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Execute the `promptpad init` command.
///
/// This command is idempotent: a second run reports the existing library
/// and changes nothing.
pub fn cmd_init() -> Result<()> {
    let ctx = init_target()?;

    if ctx.library_exists() && ctx.config_path().exists() {
        println!("Prompt library already initialized at {}", ctx.library_dir.display());
        return Ok(());
    }

    create_dir(&ctx.prompts_dir)?;
    create_dir(&ctx.events_dir())?;
    let config_created = write_default_config(&ctx)?;

    let config = Config::load(ctx.config_path())?;
    if config.events_enabled {
        let event = Event::new(EventAction::Init).with_details(json!({
            "root": ctx.root.display().to_string(),
            "config_created": config_created,
        }));
        append_event(&ctx, &event)?;
    }

    println!("Initialized prompt library.");
    println!();
    println!("Library:  {}", ctx.library_dir.display());
    println!("Prompts:  {}", ctx.prompts_dir.display());
    println!("Config:   {}", ctx.config_path().display());
    println!();
    println!("You can now add prompts with `promptpad add \"title\" --content \"...\"`.");

    Ok(())
}

/// `init` never searches parent directories: it creates the library where
/// it is asked to.
fn init_target() -> Result<LibraryContext> {
    if let Ok(root) = std::env::var(LIBRARY_ROOT_ENV)
        && !root.trim().is_empty()
    {
        return Ok(LibraryContext::at(root));
    }

    let cwd = std::env::current_dir().map_err(|e| {
        PadError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    Ok(LibraryContext::at(cwd))
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        PadError::UserError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Write the default config unless one exists. Returns whether it wrote.
fn write_default_config(ctx: &LibraryContext) -> Result<bool> {
    let path = ctx.config_path();
    if path.exists() {
        return Ok(false);
    }

    let yaml = Config::default().to_yaml()?;
    let content = format!("# promptpad library configuration\n{}", yaml);
    atomic_write_file(&path, &content)?;
    Ok(true)
}
