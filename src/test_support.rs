use crate::context::LibraryContext;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A scratch directory holding an empty, initialized prompt library.
pub(crate) fn create_test_library() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let ctx = LibraryContext::at(temp_dir.path());
    std::fs::create_dir_all(&ctx.prompts_dir).unwrap();
    temp_dir
}

/// Write `content` as the library config.
pub(crate) fn write_config(root: &Path, content: &str) {
    let ctx = LibraryContext::at(root);
    std::fs::write(ctx.config_path(), content).unwrap();
}
