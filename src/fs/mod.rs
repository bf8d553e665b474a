//! Filesystem utilities for promptpad.
//!
//! Prompt documents and config are written atomically so a crash never
//! leaves a half-written file in the library.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file, remove_file};
