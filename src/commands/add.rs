//! Implementation of the `promptpad add` command.
//!
//! Creates a new prompt document with the next free ID.

use super::{enforce_declarations, load_config, parse_variable_specs, read_template, validate_title};
use crate::cli::AddArgs;
use crate::context::require_initialized_library;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::library::PromptLibrary;
use crate::prompt::Prompt;
use crate::template::sync_declared_variables;
use chrono::Utc;
use serde_json::json;

/// Execute the `promptpad add` command.
///
/// Explicit `--var` declarations come first. When `auto_detect_variables` is
/// on, every other placeholder in the template is declared as a string
/// after them. The save gate then rejects any placeholder still undeclared.
pub fn cmd_add(args: AddArgs) -> Result<()> {
    let ctx = require_initialized_library()?;
    let config = load_config(&ctx)?;

    let title = validate_title(&args.title)?;
    let content = read_template(args.content, args.file)?.unwrap_or_default();
    let variables = parse_variable_specs(&args.vars)?;

    let mut library = PromptLibrary::open(&ctx)?;
    let mut prompt = Prompt::new(library.next_id(), title, content);
    prompt.replace_variables(variables);
    prompt.replace_tags(config.default_tags.iter().chain(args.tags.iter()));
    prompt.emoji = args.emoji.filter(|e| !e.trim().is_empty());
    prompt.is_public = args.public || config.default_public;

    let detected = if config.auto_detect_variables {
        sync_declared_variables(&prompt.content, &mut prompt.variables)
    } else {
        Vec::new()
    };

    enforce_declarations(&prompt)?;

    prompt.touch(Utc::now());
    let path = library.save(&prompt)?;

    let event = Event::new(EventAction::Add)
        .with_prompt(&prompt.id)
        .with_details(json!({
            "title": prompt.title,
            "variables": prompt.variables.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
            "detected": detected,
            "path": path.display().to_string(),
        }));
    record_event(&ctx, &config, &event)?;

    println!("Created prompt: {}", prompt.id);
    println!();
    println!("  Title:     {}", prompt.title);
    if !prompt.variables.is_empty() {
        let names: Vec<&str> = prompt.variables.iter().map(|v| v.name.as_str()).collect();
        println!("  Variables: {}", names.join(", "));
    }
    if !detected.is_empty() {
        println!("  Detected:  {} (declared as string)", detected.join(", "));
    }
    if !prompt.tags.is_empty() {
        println!("  Tags:      {}", prompt.tags.join(", "));
    }
    println!("  Path:      {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LibraryContext;
    use crate::error::PadError;
    use crate::events::read_events;
    use crate::prompt::{Variable, VariableKind};
    use crate::test_support::{DirGuard, create_test_library, write_config};
    use serial_test::serial;

    fn args(title: &str, content: &str) -> AddArgs {
        AddArgs {
            title: title.to_string(),
            content: Some(content.to_string()),
            file: None,
            vars: vec![],
            tags: vec![],
            emoji: None,
            public: false,
        }
    }

    fn load(root: &std::path::Path, id: &str) -> Prompt {
        let library = PromptLibrary::open(&LibraryContext::at(root)).unwrap();
        library.load(id).unwrap()
    }

    #[test]
    #[serial]
    fn test_add_creates_prompt_file() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        let mut a = args("Email reply", "Reply to {{sender}} in a {{tone}} tone");
        a.vars = vec!["tone:enum:formal|casual".to_string()];
        a.tags = vec!["writing/email".to_string()];
        a.emoji = Some("✉️".to_string());
        cmd_add(a).unwrap();

        let path = temp_dir
            .path()
            .join(".promptpad/prompts/PROMPT-001-email-reply.md");
        assert!(path.exists(), "Prompt file should exist at {:?}", path);

        let prompt = load(temp_dir.path(), "PROMPT-001");
        assert_eq!(prompt.title, "Email reply");
        assert_eq!(prompt.content, "Reply to {{sender}} in a {{tone}} tone");
        assert_eq!(prompt.tags, vec!["writing/email"]);
        assert_eq!(prompt.emoji.as_deref(), Some("✉️"));
        assert!(prompt.created.is_some());
        assert_eq!(prompt.created, prompt.updated);

        // Explicit declaration first, detected one appended.
        assert_eq!(prompt.variables.len(), 2);
        assert_eq!(prompt.variables[0].name, "tone");
        assert!(matches!(prompt.variables[0].kind, VariableKind::Enum { .. }));
        assert_eq!(prompt.variables[1], Variable::string("sender", 1));
    }

    #[test]
    #[serial]
    fn test_add_increments_prompt_id() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        cmd_add(args("First", "one")).unwrap();
        cmd_add(args("Second", "two")).unwrap();

        assert_eq!(load(temp_dir.path(), "PROMPT-001").title, "First");
        assert_eq!(load(temp_dir.path(), "PROMPT-002").title, "Second");
    }

    #[test]
    #[serial]
    fn test_add_rejects_undeclared_without_auto_detect() {
        let temp_dir = create_test_library();
        write_config(temp_dir.path(), "auto_detect_variables: false\n");
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_add(args("Greeting", "Hello {{name}}")).unwrap_err();
        assert!(matches!(err, PadError::ValidationError(_)));
        assert!(err.to_string().contains("name"));

        let library = PromptLibrary::open(&LibraryContext::at(temp_dir.path())).unwrap();
        assert_eq!(library.len(), 0);
    }

    #[test]
    #[serial]
    fn test_add_applies_config_defaults() {
        let temp_dir = create_test_library();
        write_config(
            temp_dir.path(),
            "default_public: true\ndefault_tags: [team]\n",
        );
        let _guard = DirGuard::new(temp_dir.path());

        let mut a = args("Shared", "x");
        a.tags = vec!["team".to_string(), "ops".to_string()];
        cmd_add(a).unwrap();

        let prompt = load(temp_dir.path(), "PROMPT-001");
        assert!(prompt.is_public);
        assert_eq!(prompt.tags, vec!["team", "ops"]);
    }

    #[test]
    #[serial]
    fn test_add_records_event() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        cmd_add(args("Greeting", "Hello {{name}}")).unwrap();

        let events = read_events(&LibraryContext::at(temp_dir.path())).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Add);
        assert_eq!(events[0].prompt.as_deref(), Some("PROMPT-001"));
        assert_eq!(events[0].details["detected"][0], "name");
    }

    #[test]
    #[serial]
    fn test_add_rejects_empty_title() {
        let temp_dir = create_test_library();
        let _guard = DirGuard::new(temp_dir.path());

        assert!(cmd_add(args("  ", "x")).is_err());
    }

    #[test]
    #[serial]
    fn test_add_requires_library() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        let err = cmd_add(args("Greeting", "x")).unwrap_err();
        assert!(err.to_string().contains("promptpad init"));
    }
}
