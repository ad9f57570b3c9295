//! Record validation from declarative field rules.

use crate::error::{Constraint, FieldViolation, ValidationError};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }

    /// Lax conversion to this kind: numeric strings, integral floats and the usual
    /// boolean spellings are accepted. `None` means the value cannot be this kind.
    fn coerce(self, v: &Value) -> Option<Value> {
        match (self, v) {
            (FieldKind::Text, Value::String(_))
            | (FieldKind::Number, Value::Number(_))
            | (FieldKind::Boolean, Value::Bool(_)) => Some(v.clone()),
            (FieldKind::Number, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number),
            (FieldKind::Integer, Value::Number(n)) => match n.as_i64() {
                Some(i) => Some(Value::from(i)),
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| Value::from(f as i64)),
            },
            (FieldKind::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::from),
            (FieldKind::Boolean, Value::String(s)) => parse_bool(s).map(Value::Bool),
            (FieldKind::Boolean, Value::Number(n)) => match n.as_i64() {
                Some(0) => Some(Value::Bool(false)),
                Some(1) => Some(Value::Bool(true)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Boolean spellings accepted from text: true/false, t/f, yes/no, y/n, on/off, 1/0.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// One field of a persisted entity. Serialized as-is by `GET /schema`.
#[derive(Clone, Debug, Serialize)]
pub struct FieldRule {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    pub description: &'static str,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: None,
            min_length: None,
            minimum: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, description)
        }
    }

    pub const fn non_empty(self) -> Self {
        Self {
            min_length: Some(1),
            ..self
        }
    }

    pub const fn at_least(self, minimum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            ..self
        }
    }

    pub const fn defaults_to(self, value: bool) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }
}

pub struct RecordValidator;

impl RecordValidator {
    /// Check `raw` against every rule and collect all violations. Accepted values are rewritten
    /// in their coerced form. Fields without a rule are left untouched.
    pub fn validate(raw: &mut Map<String, Value>, rules: &[FieldRule]) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        for rule in rules {
            match raw.get_mut(rule.name) {
                None | Some(Value::Null) => {
                    if rule.required {
                        violations.push(FieldViolation {
                            field: rule.name.to_string(),
                            constraint: Constraint::Missing,
                            message: format!("{} is required", rule.name),
                        });
                    }
                }
                Some(v) => match rule.kind.coerce(v) {
                    Some(coerced) => {
                        *v = coerced;
                        if let Some(violation) = check_bounds(rule, v) {
                            violations.push(violation);
                        }
                    }
                    None => {
                        let expected = rule.kind.label();
                        violations.push(FieldViolation {
                            field: rule.name.to_string(),
                            constraint: Constraint::WrongType { expected },
                            message: format!("{} must be of type {}", rule.name, expected),
                        });
                    }
                },
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}

fn check_bounds(rule: &FieldRule, v: &Value) -> Option<FieldViolation> {
    let field = rule.name.to_string();
    if let (Some(min), Some(s)) = (rule.min_length, v.as_str()) {
        if s.chars().count() < min {
            return Some(FieldViolation {
                message: format!("{} must be at least {} characters", field, min),
                field,
                constraint: Constraint::TooShort { min_length: min },
            });
        }
    }
    if let (Some(min), Some(n)) = (rule.minimum, v.as_f64()) {
        if n < min {
            return Some(FieldViolation {
                message: format!("{} must be at least {}", field, min),
                field,
                constraint: Constraint::BelowMinimum { minimum: min },
            });
        }
    }
    None
}
