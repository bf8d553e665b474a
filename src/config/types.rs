//! Default value functions for serde.

pub(crate) fn default_true() -> bool {
    true
}
