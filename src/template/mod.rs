//! Prompt template engine.
//!
//! Templates use `{{name}}` placeholders. This module provides:
//!
//! - Placeholder extraction and substitution ([`placeholder`])
//! - Declaration checks and auto-detection of new variables ([`declarations`])
//! - Type validation of supplied values ([`validate`])
//! - Recursive resolution of nested prompt references ([`resolve`])
//!
//! Everything here is pure: no I/O, no shared state.

pub mod declarations;
pub mod placeholder;
pub mod resolve;
pub mod validate;

pub use declarations::{sync_declared_variables, validate_declarations};
pub use placeholder::extract_placeholder_names;
pub use resolve::{Resolution, ResolveError, resolve_detailed};
pub use validate::validate_values;
