//! Supplied variable values.
//!
//! A value map is built fresh for each resolution and never persisted.

use super::variable::format_number;
use crate::error::{PadError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A value supplied for a variable: text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableValue {
    Text(String),
    Number(f64),
}

impl VariableValue {
    pub fn is_text(&self) -> bool {
        matches!(self, VariableValue::Text(_))
    }
}

/// Numbers render in canonical decimal form, text verbatim.
impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Text(s) => f.write_str(s),
            VariableValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(s: &str) -> Self {
        VariableValue::Text(s.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(s: String) -> Self {
        VariableValue::Text(s)
    }
}

impl From<f64> for VariableValue {
    fn from(n: f64) -> Self {
        VariableValue::Number(n)
    }
}

impl From<i64> for VariableValue {
    fn from(n: i64) -> Self {
        VariableValue::Number(n as f64)
    }
}

/// Mapping from variable name to supplied value.
pub type ValueMap = BTreeMap<String, VariableValue>;

/// Helper to create a value map from a list of name/value pairs.
#[cfg(test)]
pub fn values<I, K, V>(pairs: I) -> ValueMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<VariableValue>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Parse a `name=value` assignment from the command line.
///
/// Everything after the first `=` is the value, taken as text.
pub fn parse_assignment(assignment: &str) -> Result<(String, VariableValue)> {
    let (name, value) = assignment.split_once('=').ok_or_else(|| {
        PadError::UserError(format!(
            "invalid assignment '{}': expected NAME=VALUE",
            assignment
        ))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(PadError::UserError(format!(
            "invalid assignment '{}': variable name is empty",
            assignment
        )));
    }

    Ok((name.to_string(), VariableValue::Text(value.to_string())))
}

/// Parse a YAML (or JSON) mapping of values.
///
/// Numeric scalars become numbers, strings stay text, and booleans are
/// taken as their textual form. Nested structures are rejected.
pub fn parse_value_file(content: &str) -> Result<ValueMap> {
    let doc: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| PadError::UserError(format!("failed to parse values file: {}", e)))?;

    let mapping = match doc {
        serde_yaml::Value::Null => return Ok(ValueMap::new()),
        serde_yaml::Value::Mapping(m) => m,
        _ => {
            return Err(PadError::UserError(
                "values file must contain a mapping of variable names to values".to_string(),
            ));
        }
    };

    let mut map = ValueMap::new();
    for (key, value) in mapping {
        let name = match key {
            serde_yaml::Value::String(s) => s,
            other => {
                return Err(PadError::UserError(format!(
                    "values file key {:?} is not a variable name",
                    other
                )));
            }
        };

        let value = match value {
            serde_yaml::Value::String(s) => VariableValue::Text(s),
            serde_yaml::Value::Number(n) => match n.as_f64() {
                Some(f) => VariableValue::Number(f),
                None => VariableValue::Text(n.to_string()),
            },
            serde_yaml::Value::Bool(b) => VariableValue::Text(b.to_string()),
            _ => {
                return Err(PadError::UserError(format!(
                    "value for '{}' must be a string or a number",
                    name
                )));
            }
        };

        map.insert(name, value);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_canonical_numbers() {
        assert_eq!(VariableValue::Number(5.0).to_string(), "5");
        assert_eq!(VariableValue::Number(2.25).to_string(), "2.25");
        assert_eq!(VariableValue::Text("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn test_values_helper() {
        let map = values([("a", VariableValue::from("x")), ("n", VariableValue::from(3.0))]);
        assert_eq!(map.get("a"), Some(&VariableValue::Text("x".to_string())));
        assert_eq!(map.get("n"), Some(&VariableValue::Number(3.0)));
    }

    #[test]
    fn test_parse_assignment() {
        let (name, value) = parse_assignment("topic=rust = fun").unwrap();
        assert_eq!(name, "topic");
        assert_eq!(value, VariableValue::Text("rust = fun".to_string()));

        let (_, value) = parse_assignment("empty=").unwrap();
        assert_eq!(value, VariableValue::Text(String::new()));

        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn test_parse_value_file() {
        let yaml = r#"
name: World
count: 3
ratio: 0.5
quoted: "7"
flag: true
"#;
        let map = parse_value_file(yaml).unwrap();
        assert_eq!(map.get("name"), Some(&VariableValue::Text("World".to_string())));
        assert_eq!(map.get("count"), Some(&VariableValue::Number(3.0)));
        assert_eq!(map.get("ratio"), Some(&VariableValue::Number(0.5)));
        assert_eq!(map.get("quoted"), Some(&VariableValue::Text("7".to_string())));
        assert_eq!(map.get("flag"), Some(&VariableValue::Text("true".to_string())));
    }

    #[test]
    fn test_parse_value_file_json() {
        let map = parse_value_file(r#"{"inner": "PROMPT-002", "n": 10}"#).unwrap();
        assert_eq!(
            map.get("inner"),
            Some(&VariableValue::Text("PROMPT-002".to_string()))
        );
        assert_eq!(map.get("n"), Some(&VariableValue::Number(10.0)));
    }

    #[test]
    fn test_parse_value_file_rejects_nested() {
        assert!(parse_value_file("a: [1, 2]").is_err());
        assert!(parse_value_file("- 1\n- 2\n").is_err());
        assert!(parse_value_file("").unwrap().is_empty());
    }
}
