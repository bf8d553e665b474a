//! Implementation of the `promptpad show` command.
//!
//! Displays the metadata, declared variables, and template of a prompt.

use crate::cli::ShowArgs;
use crate::context::require_initialized_library;
use crate::error::Result;
use crate::library::PromptLibrary;
use crate::template::extract_placeholder_names;

/// Execute the `promptpad show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let ctx = require_initialized_library()?;

    let library = PromptLibrary::open(&ctx)?;
    let entry = library.require(&args.prompt_id)?;
    let prompt = library.load(&entry.id)?;

    println!("================================================================================");
    match &prompt.emoji {
        Some(emoji) => println!("{} {} {}", prompt.id, emoji, prompt.title),
        None => println!("{} {}", prompt.id, prompt.title),
    }
    println!("================================================================================");
    println!();

    println!(
        "Visibility: {}",
        if prompt.is_public { "public" } else { "private" }
    );
    if let Some(created) = prompt.created {
        println!("Created:    {}", created.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(updated) = prompt.updated {
        println!("Updated:    {}", updated.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if !prompt.tags.is_empty() {
        println!("Tags:       {}", prompt.tags.join(", "));
    }

    if !prompt.variables.is_empty() {
        let used = extract_placeholder_names(&prompt.content);
        println!();
        println!("Variables:");
        for variable in &prompt.variables {
            let unused = if used.contains(&variable.name) {
                ""
            } else {
                "  (unused)"
            };
            println!("  {:<16} {}{}", variable.name, variable.kind, unused);
        }
    }

    println!();
    println!("--------------------------------------------------------------------------------");
    println!();

    if prompt.content.trim().is_empty() {
        println!("(Empty template)");
    } else {
        println!("{}", prompt.content.trim_end());
    }

    println!();
    println!("--------------------------------------------------------------------------------");
    println!("Path: {}", entry.path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::AddArgs;
    use crate::commands::add::cmd_add;
    use crate::test_support::{DirGuard, create_test_library};
    use serial_test::serial;

    fn add_greeting() {
        cmd_add(AddArgs {
            title: "Greeting".to_string(),
            content: Some("Hello {{name}}".to_string()),
            file: None,
            vars: vec![],
            tags: vec!["social".to_string()],
            emoji: Some("👋".to_string()),
            public: false,
        })
        .unwrap();
    }

    #[test]
    #[serial]
    fn test_show_displays_prompt() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());
        add_greeting();

        let result = cmd_show(ShowArgs {
            prompt_id: "PROMPT-001".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn test_show_normalizes_prompt_id() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());
        add_greeting();

        let result = cmd_show(ShowArgs {
            prompt_id: "prompt-001".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    #[serial]
    fn test_show_not_found() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_show(ShowArgs {
            prompt_id: "PROMPT-999".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    #[serial]
    fn test_show_rejects_path_traversal() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_show(ShowArgs {
            prompt_id: "../PROMPT-001".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("path traversal"));
    }
}
