//! Type validation of supplied variable values.
//!
//! Validation never fails with an error; every outcome is a [`ValueCheck`].

use crate::prompt::variable::format_number;
use crate::prompt::{ValueMap, Variable, VariableKind, VariableValue};

/// Outcome of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCheck {
    pub valid: bool,
    pub error: Option<String>,
}

impl ValueCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

/// A rejected value, tagged with the variable it was supplied for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueIssue {
    pub name: String,
    pub error: String,
}

/// Validate `value` against the declared type of `variable`.
pub fn validate_value(variable: &Variable, value: &VariableValue) -> ValueCheck {
    match &variable.kind {
        VariableKind::String => {
            if !value.is_text() {
                return ValueCheck::fail("Value must be a string");
            }
            ValueCheck::ok()
        }

        VariableKind::Number { min, max } => {
            let number = match value {
                VariableValue::Number(n) => Some(*n),
                VariableValue::Text(s) => s.trim().parse::<f64>().ok(),
            };
            let Some(number) = number.filter(|n| n.is_finite()) else {
                return ValueCheck::fail("Value must be a number");
            };
            if let Some(min) = min
                && number < *min
            {
                return ValueCheck::fail(format!("Value must be at least {}", format_number(*min)));
            }
            if let Some(max) = max
                && number > *max
            {
                return ValueCheck::fail(format!("Value must be at most {}", format_number(*max)));
            }
            ValueCheck::ok()
        }

        VariableKind::Enum { options } => {
            if options.is_empty() {
                return ValueCheck::fail("Enum variable must have options");
            }
            let text = value.to_string();
            if !options.iter().any(|o| *o == text) {
                return ValueCheck::fail(format!("Value must be one of: {}", options.join(", ")));
            }
            ValueCheck::ok()
        }

        VariableKind::Prompt => {
            if !value.is_text() {
                return ValueCheck::fail("Value must be a prompt ID (string)");
            }
            ValueCheck::ok()
        }

        VariableKind::Unknown { tag } => {
            ValueCheck::fail(format!("Unknown variable type: {}", tag))
        }
    }
}

/// Validate every declared variable that has a supplied value.
///
/// Values for undeclared names and declared variables without a value are
/// not checked here. A repeated name is checked against its last
/// declaration only.
pub fn validate_values(variables: &[Variable], values: &ValueMap) -> Vec<ValueIssue> {
    variables
        .iter()
        .enumerate()
        .filter(|(i, variable)| !variables[i + 1..].iter().any(|v| v.name == variable.name))
        .filter_map(|(_, variable)| {
            let value = values.get(&variable.name)?;
            let error = validate_value(variable, value).error?;
            Some(ValueIssue {
                name: variable.name.clone(),
                error,
            })
        })
        .collect()
}
