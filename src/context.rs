//! Library location and path resolution for promptpad.
//!
//! A prompt library is a `.promptpad/` directory. Commands find it by
//! walking up from the working directory, so they work from any
//! subdirectory of the project that owns the library. Setting
//! `PROMPTPAD_DIR` names the library root directly and skips the search.

use crate::error::{PadError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the library directory under the root.
pub const LIBRARY_DIR: &str = ".promptpad";

/// Environment variable that overrides the library root.
pub const LIBRARY_ROOT_ENV: &str = "PROMPTPAD_DIR";

/// Resolved paths for a prompt library. All paths are absolute when
/// resolved from an absolute working directory.
#[derive(Debug, Clone)]
pub struct LibraryContext {
    /// Directory that contains `.promptpad/`.
    pub root: PathBuf,

    /// The `.promptpad/` directory itself.
    pub library_dir: PathBuf,

    /// Directory holding one markdown file per prompt.
    pub prompts_dir: PathBuf,
}

impl LibraryContext {
    /// Build the context for a library rooted at `root`, without checking
    /// that it exists.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let library_dir = root.join(LIBRARY_DIR);
        let prompts_dir = library_dir.join("prompts");
        Self {
            root,
            library_dir,
            prompts_dir,
        }
    }

    /// Resolve the library from the environment override or the current
    /// working directory.
    pub fn resolve() -> Result<Self> {
        if let Ok(root) = env::var(LIBRARY_ROOT_ENV)
            && !root.trim().is_empty()
        {
            return Ok(Self::at(root));
        }

        let cwd = env::current_dir().map_err(|e| {
            PadError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Self::resolve_from(&cwd)
    }

    /// Walk up from `cwd` to the nearest directory containing `.promptpad/`.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();

        cwd.ancestors()
            .find(|dir| dir.join(LIBRARY_DIR).is_dir())
            .map(Self::at)
            .ok_or_else(|| {
                PadError::UserError(format!(
                    "no prompt library found in '{}' or any parent directory.\n\n\
                     Run `promptpad init` to create one here.",
                    cwd.display()
                ))
            })
    }

    /// Check if the library directories exist.
    pub fn library_exists(&self) -> bool {
        self.library_dir.is_dir() && self.prompts_dir.is_dir()
    }

    /// Ensure the library is initialized, returning an error if not.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.library_exists() {
            return Err(PadError::UserError(format!(
                "prompt library not initialized.\n\
                 Expected: {}\n\n\
                 Run `promptpad init` to create it.",
                self.prompts_dir.display()
            )));
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.library_dir.join("config.yaml")
    }

    /// Get the path to the events directory.
    pub fn events_dir(&self) -> PathBuf {
        self.library_dir.join("events")
    }

    /// Get the path to the events log file.
    pub fn events_file(&self) -> PathBuf {
        self.events_dir().join("events.ndjson")
    }
}

/// Resolve the library context and ensure it is initialized.
///
/// Use this in every command except `init`.
pub fn require_initialized_library() -> Result<LibraryContext> {
    let ctx = LibraryContext::resolve()?;
    ctx.ensure_initialized()?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_at_builds_layout() {
        let ctx = LibraryContext::at("/work");
        assert_eq!(ctx.root, PathBuf::from("/work"));
        assert!(ctx.library_dir.ends_with(".promptpad"));
        assert!(ctx.prompts_dir.ends_with(".promptpad/prompts"));
        assert!(ctx.config_path().ends_with(".promptpad/config.yaml"));
        assert!(ctx.events_file().ends_with("events/events.ndjson"));
    }

    #[test]
    fn test_resolve_from_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(LIBRARY_DIR)).unwrap();

        let ctx = LibraryContext::resolve_from(temp_dir.path()).unwrap();
        assert_eq!(ctx.root, temp_dir.path());
    }

    #[test]
    fn test_resolve_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join(LIBRARY_DIR)).unwrap();
        let nested = temp_dir.path().join("src").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = LibraryContext::resolve_from(&nested).unwrap();
        assert_eq!(ctx.root, temp_dir.path());
    }

    #[test]
    fn test_resolve_without_library_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = LibraryContext::resolve_from(temp_dir.path()).unwrap_err();
        assert!(matches!(err, PadError::UserError(_)));
        assert!(err.to_string().contains("promptpad init"));
    }

    #[test]
    fn test_ensure_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = LibraryContext::at(temp_dir.path());
        assert!(!ctx.library_exists());
        assert!(ctx.ensure_initialized().is_err());

        std::fs::create_dir_all(&ctx.prompts_dir).unwrap();
        assert!(ctx.library_exists());
        assert!(ctx.ensure_initialized().is_ok());
    }
}
