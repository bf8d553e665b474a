//! Variable declarations attached to a prompt.
//!
//! A variable's type-specific configuration is a sum type selected by the
//! `type` tag. On disk the variable keeps a flat row shape:
//!
//! ```text
//! - name: count
//!   type: number
//!   config: { min: 0, max: 10 }
//!   order_index: 1
//! ```

use crate::error::{PadError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed, named slot a prompt declares for substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawVariable", into = "RawVariable")]
pub struct Variable {
    /// Name matching a `{{name}}` placeholder in the owning prompt.
    pub name: String,

    /// Declared type and its configuration.
    pub kind: VariableKind,

    /// Display and substitution order within the owning prompt.
    pub order_index: u32,
}

/// Declared variable type with type-specific configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableKind {
    /// Free text.
    String,
    /// Numeric value with optional inclusive bounds.
    Number { min: Option<f64>, max: Option<f64> },
    /// One of a fixed list of options (case-sensitive).
    Enum { options: Vec<String> },
    /// Identifier of another prompt, expanded at resolution time.
    Prompt,
    /// A type tag this version does not recognize. Kept so that loading
    /// never fails on it; value validation rejects it.
    Unknown { tag: String },
}

impl VariableKind {
    /// The on-disk `type` tag.
    pub fn tag(&self) -> &str {
        match self {
            VariableKind::String => "string",
            VariableKind::Number { .. } => "number",
            VariableKind::Enum { .. } => "enum",
            VariableKind::Prompt => "prompt",
            VariableKind::Unknown { tag } => tag,
        }
    }

    pub fn is_prompt_reference(&self) -> bool {
        matches!(self, VariableKind::Prompt)
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Number { min, max } if min.is_some() || max.is_some() => {
                let lo = min.map(format_number).unwrap_or_default();
                let hi = max.map(format_number).unwrap_or_default();
                write!(f, "number [{}..{}]", lo, hi)
            }
            VariableKind::Enum { options } => write!(f, "enum [{}]", options.join("|")),
            other => write!(f, "{}", other.tag()),
        }
    }
}

impl Variable {
    /// Create a plain string variable.
    pub fn string(name: impl Into<String>, order_index: u32) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::String,
            order_index,
        }
    }

    /// Parse a variable from its command-line spec.
    ///
    /// Accepted forms:
    ///
    /// - `name` or `name:string`
    /// - `name:number` or `name:number:MIN..MAX` (either bound may be empty)
    /// - `name:enum:a|b|c`
    /// - `name:prompt`
    pub fn parse_spec(spec: &str, order_index: u32) -> Result<Self> {
        let mut parts = spec.splitn(3, ':');
        let name = parts.next().unwrap_or_default().trim();
        let kind = parts.next().map(str::trim).unwrap_or("string");
        let config = parts.next().map(str::trim);

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(PadError::UserError(format!(
                "invalid variable spec '{}': name must contain only letters, digits, and '_'",
                spec
            )));
        }

        let kind = match (kind, config) {
            ("string", None) => VariableKind::String,
            ("prompt", None) => VariableKind::Prompt,
            ("number", None) => VariableKind::Number {
                min: None,
                max: None,
            },
            ("number", Some(range)) => parse_range(spec, range)?,
            ("enum", Some(options)) => {
                let options: Vec<String> = options
                    .split('|')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect();
                if options.is_empty() {
                    return Err(PadError::UserError(format!(
                        "invalid variable spec '{}': enum needs at least one option (e.g. tone:enum:formal|casual)",
                        spec
                    )));
                }
                VariableKind::Enum { options }
            }
            ("enum", None) => {
                return Err(PadError::UserError(format!(
                    "invalid variable spec '{}': enum needs options (e.g. tone:enum:formal|casual)",
                    spec
                )));
            }
            ("string" | "prompt", Some(_)) => {
                return Err(PadError::UserError(format!(
                    "invalid variable spec '{}': type '{}' takes no configuration",
                    spec, kind
                )));
            }
            (other, _) => {
                return Err(PadError::UserError(format!(
                    "invalid variable spec '{}': unknown type '{}' (expected string, number, enum, or prompt)",
                    spec, other
                )));
            }
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            order_index,
        })
    }
}

fn parse_range(spec: &str, range: &str) -> Result<VariableKind> {
    let invalid = || {
        PadError::UserError(format!(
            "invalid variable spec '{}': number range must look like MIN..MAX (e.g. count:number:0..10)",
            spec
        ))
    };

    let (lo, hi) = range.split_once("..").ok_or_else(invalid)?;
    let bound = |s: &str| -> Result<Option<f64>> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(invalid()),
        }
    };

    let min = bound(lo)?;
    let max = bound(hi)?;
    if let (Some(lo), Some(hi)) = (min, max)
        && lo > hi
    {
        return Err(PadError::UserError(format!(
            "invalid variable spec '{}': minimum {} is greater than maximum {}",
            spec,
            format_number(lo),
            format_number(hi)
        )));
    }

    Ok(VariableKind::Number { min, max })
}

/// Render a number in canonical decimal form (`5`, `1.5`, `-2`).
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // Avoid rendering negative zero as "-0".
        return "0".to_string();
    }
    n.to_string()
}

/// Flat on-disk representation of a variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawVariable {
    name: String,
    #[serde(rename = "type", default = "default_type_tag")]
    kind: String,
    #[serde(default)]
    config: RawConfig,
    #[serde(default)]
    order_index: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<Vec<String>>,
}

fn default_type_tag() -> String {
    "string".to_string()
}

impl From<RawVariable> for Variable {
    fn from(raw: RawVariable) -> Self {
        let kind = match raw.kind.as_str() {
            "string" => VariableKind::String,
            "number" => VariableKind::Number {
                min: raw.config.min,
                max: raw.config.max,
            },
            "enum" => VariableKind::Enum {
                options: raw.config.options.unwrap_or_default(),
            },
            "prompt" => VariableKind::Prompt,
            _ => VariableKind::Unknown { tag: raw.kind },
        };
        Self {
            name: raw.name,
            kind,
            order_index: raw.order_index,
        }
    }
}

impl From<Variable> for RawVariable {
    fn from(var: Variable) -> Self {
        let config = match &var.kind {
            VariableKind::Number { min, max } => RawConfig {
                min: *min,
                max: *max,
                options: None,
            },
            VariableKind::Enum { options } => RawConfig {
                options: Some(options.clone()),
                ..RawConfig::default()
            },
            _ => RawConfig::default(),
        };
        Self {
            kind: var.kind.tag().to_string(),
            name: var.name,
            config,
            order_index: var.order_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec_defaults_to_string() {
        let var = Variable::parse_spec("topic", 0).unwrap();
        assert_eq!(var.name, "topic");
        assert_eq!(var.kind, VariableKind::String);
        assert_eq!(var.order_index, 0);
    }

    #[test]
    fn test_parse_spec_number_range() {
        let var = Variable::parse_spec("count:number:0..10", 2).unwrap();
        assert_eq!(
            var.kind,
            VariableKind::Number {
                min: Some(0.0),
                max: Some(10.0)
            }
        );
        assert_eq!(var.order_index, 2);

        let var = Variable::parse_spec("count:number:..5", 0).unwrap();
        assert_eq!(
            var.kind,
            VariableKind::Number {
                min: None,
                max: Some(5.0)
            }
        );
    }

    #[test]
    fn test_parse_spec_enum_and_prompt() {
        let var = Variable::parse_spec("tone:enum:formal|casual", 0).unwrap();
        assert_eq!(
            var.kind,
            VariableKind::Enum {
                options: vec!["formal".to_string(), "casual".to_string()]
            }
        );

        let var = Variable::parse_spec("inner:prompt", 0).unwrap();
        assert!(var.kind.is_prompt_reference());
    }

    #[test]
    fn test_parse_spec_rejects_bad_input() {
        assert!(Variable::parse_spec("", 0).is_err());
        assert!(Variable::parse_spec("na me", 0).is_err());
        assert!(Variable::parse_spec("x:date", 0).is_err());
        assert!(Variable::parse_spec("x:enum", 0).is_err());
        assert!(Variable::parse_spec("x:enum:|", 0).is_err());
        assert!(Variable::parse_spec("x:number:abc", 0).is_err());
        assert!(Variable::parse_spec("x:number:10..1", 0).is_err());
        assert!(Variable::parse_spec("x:prompt:extra", 0).is_err());
    }

    #[test]
    fn test_yaml_row_shape() {
        let yaml = r#"
name: count
type: number
config:
  min: 1
order_index: 3
"#;
        let var: Variable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(var.name, "count");
        assert_eq!(
            var.kind,
            VariableKind::Number {
                min: Some(1.0),
                max: None
            }
        );
        assert_eq!(var.order_index, 3);

        let out = serde_yaml::to_string(&var).unwrap();
        assert!(out.contains("type: number"));
        assert!(out.contains("min: 1"));
        assert!(!out.contains("max"));
    }

    #[test]
    fn test_unknown_type_tag_is_preserved() {
        let yaml = "name: when\ntype: date\n";
        let var: Variable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            var.kind,
            VariableKind::Unknown {
                tag: "date".to_string()
            }
        );
        assert!(serde_yaml::to_string(&var).unwrap().contains("type: date"));
    }

    #[test]
    fn test_enum_without_options_loads_empty() {
        let var: Variable = serde_yaml::from_str("name: tone\ntype: enum\n").unwrap();
        assert_eq!(var.kind, VariableKind::Enum { options: vec![] });
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(VariableKind::String.to_string(), "string");
        assert_eq!(
            VariableKind::Number {
                min: Some(0.0),
                max: None
            }
            .to_string(),
            "number [0..]"
        );
        assert_eq!(
            VariableKind::Enum {
                options: vec!["a".to_string(), "b".to_string()]
            }
            .to_string(),
            "enum [a|b]"
        );
    }
}
