//! Implementation of the `promptpad list` and `promptpad search` commands.

use crate::cli::{ListArgs, SearchArgs};
use crate::context::require_initialized_library;
use crate::error::Result;
use crate::library::{PromptFilter, PromptLibrary};
use crate::prompt::Prompt;

/// Execute the `promptpad list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let filter = PromptFilter {
        query: None,
        tag: args.tag,
    };
    print_matches(&filter)
}

/// Execute the `promptpad search` command.
pub fn cmd_search(args: SearchArgs) -> Result<()> {
    let filter = PromptFilter {
        query: Some(args.query),
        tag: args.tag,
    };
    print_matches(&filter)
}

fn print_matches(filter: &PromptFilter) -> Result<()> {
    let ctx = require_initialized_library()?;
    let library = PromptLibrary::open(&ctx)?;
    let prompts = library.load_all()?;
    let matches = filter.apply(&prompts);

    if matches.is_empty() {
        if library.len() == 0 {
            println!("No prompts yet. Add one with `promptpad add \"title\"`.");
        } else {
            println!("No matching prompts.");
        }
        return Ok(());
    }

    for prompt in &matches {
        println!("{}", summary_line(prompt));
    }
    println!();
    println!("{} of {} prompt(s)", matches.len(), library.len());

    Ok(())
}

/// One-line summary: ID, emoji and title, variable count, tags, visibility.
fn summary_line(prompt: &Prompt) -> String {
    let mut line = format!("{:<12}", prompt.id);

    if let Some(emoji) = &prompt.emoji {
        line.push_str(emoji);
        line.push(' ');
    }
    line.push_str(&prompt.title);

    if !prompt.variables.is_empty() {
        line.push_str(&format!("  ({} var{})", prompt.variables.len(), plural(prompt.variables.len())));
    }
    if !prompt.tags.is_empty() {
        line.push_str(&format!("  [{}]", prompt.tags.join(", ")));
    }
    if prompt.is_public {
        line.push_str("  public");
    }

    line
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
