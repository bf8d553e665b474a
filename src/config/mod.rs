//! Configuration model for promptpad.
//!
//! This module defines the Config struct that represents `.promptpad/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;
mod types;

#[cfg(test)]
mod tests;

pub use model::Config;
