//! Keeping a prompt's declared variables consistent with its template.

use super::placeholder::extract_placeholder_names;
use crate::prompt::Variable;
use std::collections::HashSet;

/// Result of checking a template against its declared variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationCheck {
    pub valid: bool,
    /// Placeholder names with no declaration, in order of first occurrence.
    pub missing: Vec<String>,
}

/// Check that every placeholder in `template` has a declared variable.
///
/// This is the save-time gate: a prompt with missing declarations is not
/// saved.
pub fn validate_declarations(template: &str, variables: &[Variable]) -> DeclarationCheck {
    let declared: HashSet<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    let missing: Vec<String> = extract_placeholder_names(template)
        .into_iter()
        .filter(|name| !declared.contains(name.as_str()))
        .collect();

    DeclarationCheck {
        valid: missing.is_empty(),
        missing,
    }
}

/// Append a string variable for every placeholder in `template` that has no
/// declaration yet, and return the names that were added.
///
/// New variables go to the end of the existing order. Declarations whose
/// placeholder no longer appears are kept; removing them is up to the user.
pub fn sync_declared_variables(template: &str, variables: &mut Vec<Variable>) -> Vec<String> {
    let missing = validate_declarations(template, variables).missing;

    for name in &missing {
        let order_index = variables.len() as u32;
        variables.push(Variable::string(name.clone(), order_index));
    }

    missing
}
