//! CLI argument parsing for promptpad.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// Promptpad: a file-backed library of reusable prompt templates.
///
/// Prompts are markdown files with YAML frontmatter under `.promptpad/`.
/// Templates use `{{name}}` placeholders, and a `prompt`-typed variable can
/// pull another prompt's resolved text into its slot.
#[derive(Parser, Debug)]
#[command(name = "promptpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptpad.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a prompt library in the current directory.
    ///
    /// Creates `.promptpad/` with a prompts directory and a default config.
    /// Running it again on an existing library is a no-op.
    Init,

    /// Add a new prompt to the library.
    Add(AddArgs),

    /// Edit an existing prompt.
    ///
    /// Only the given fields change. Variables and tags are replaced
    /// wholesale when given.
    Edit(EditArgs),

    /// Remove a prompt from the library.
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List prompts, most recently updated first.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Search prompt titles and bodies.
    Search(SearchArgs),

    /// Show a prompt's metadata, variables, and template.
    Show(ShowArgs),

    /// Print the placeholder names used by a template.
    Vars(VarsArgs),

    /// Check that every placeholder in a prompt is declared.
    Check(CheckArgs),

    /// Resolve a prompt with values and print the result.
    Resolve(ResolveArgs),
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("body").args(["content", "file"])))]
pub struct AddArgs {
    /// Title for the new prompt.
    pub title: String,

    /// Template text.
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read the template from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Declare a variable: NAME[:string|:number[:MIN..MAX]|:enum:A|B|:prompt].
    #[arg(long = "var", value_name = "SPEC")]
    pub vars: Vec<String>,

    /// Tag path (repeatable), e.g. `writing/email`.
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Emoji shown next to the title.
    #[arg(long)]
    pub emoji: Option<String>,

    /// Mark the prompt public.
    #[arg(long)]
    pub public: bool,
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("body").args(["content", "file"])))]
pub struct EditArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: String,

    /// New title.
    #[arg(long)]
    pub title: Option<String>,

    /// New template text.
    #[arg(short, long)]
    pub content: Option<String>,

    /// Read the new template from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Replace the declared variables (repeatable).
    #[arg(long = "var", value_name = "SPEC", conflicts_with = "clear_vars")]
    pub vars: Vec<String>,

    /// Remove every declared variable.
    #[arg(long)]
    pub clear_vars: bool,

    /// Replace the tags (repeatable).
    #[arg(short, long = "tag", value_name = "TAG", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove every tag.
    #[arg(long)]
    pub clear_tags: bool,

    /// New emoji; an empty string clears it.
    #[arg(long)]
    pub emoji: Option<String>,

    /// Mark the prompt public.
    #[arg(long, conflicts_with = "private")]
    pub public: bool,

    /// Mark the prompt private.
    #[arg(long)]
    pub private: bool,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: String,

    /// Confirm the deletion.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only prompts with this tag or a tag nested under it.
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the `search` command.
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Case-insensitive text to find in titles and templates.
    pub query: String,

    /// Only prompts with this tag or a tag nested under it.
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: String,
}

/// Arguments for the `vars` command.
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["prompt_id", "content"])))]
pub struct VarsArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: Option<String>,

    /// Template text to scan instead of a stored prompt.
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: String,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Prompt ID (e.g., PROMPT-001).
    pub prompt_id: String,

    /// Supply a value as NAME=VALUE (repeatable). Overrides `--values`.
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Read values from a YAML or JSON mapping.
    #[arg(long = "values", value_name = "FILE")]
    pub values_file: Option<PathBuf>,

    /// Fail when a nested prompt reference cannot be expanded.
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
