//! Request validation from per-field constraint rules.

use crate::error::ValidationErrors;
use crate::model::{FrameworkPayload, NewFramework, NewVersion, VersionPayload};

pub const NAME_MAX_LENGTH: usize = 30;

/// A named constraint. The name is what clients see in `errors[].message`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Constraint {
    NotNull,
    NotEmpty,
    Size { max: usize },
    Min(f64),
    Max(f64),
}

impl Constraint {
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::NotNull => "NotNull",
            Constraint::NotEmpty => "NotEmpty",
            Constraint::Size { .. } => "Size",
            Constraint::Min(_) => "Min",
            Constraint::Max(_) => "Max",
        }
    }

    /// Absent values only fail the presence constraints; bounds apply to present values.
    fn holds(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Constraint::NotNull, v) => !v.is_absent(),
            (Constraint::NotEmpty, FieldValue::Text(s)) => s.is_some_and(|s| !s.is_empty()),
            (Constraint::Size { max }, FieldValue::Text(Some(s))) => s.chars().count() <= *max,
            (Constraint::Min(min), FieldValue::Number(Some(n))) => n >= *min,
            (Constraint::Max(max), FieldValue::Number(Some(n))) => n <= *max,
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

impl FieldValue<'_> {
    fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Text(None) | FieldValue::Number(None))
    }
}

pub const FRAMEWORK_NAME_RULES: &[Constraint] = &[
    Constraint::NotEmpty,
    Constraint::Size {
        max: NAME_MAX_LENGTH,
    },
];
pub const HYPE_LEVEL_RULES: &[Constraint] = &[Constraint::Min(0.0), Constraint::Max(100.0)];
pub const VERSION_RULES: &[Constraint] = &[Constraint::NotNull, Constraint::Min(1.0)];

pub struct RequestValidator;

impl RequestValidator {
    /// Evaluate every rule of every field, collecting one entry per violation.
    pub fn validate(fields: &[(&str, FieldValue<'_>, &[Constraint])]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        for (field, value, rules) in fields {
            for rule in rules.iter() {
                if !rule.holds(*value) {
                    errors.push(field, rule.kind());
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn framework(payload: FrameworkPayload) -> Result<NewFramework, ValidationErrors> {
        let hype_level = payload.hype_level.map(f64::trunc);
        Self::validate(&[
            ("name", FieldValue::Text(payload.name.as_deref()), FRAMEWORK_NAME_RULES),
            (
                "hypeLevel",
                FieldValue::Number(hype_level),
                HYPE_LEVEL_RULES,
            ),
        ])?;
        Ok(NewFramework {
            name: payload.name.unwrap_or_default(),
            // range-checked above
            hype_level: hype_level.unwrap_or(0.0) as i32,
            deprecation_date: payload.deprecation_date,
        })
    }

    pub fn version(payload: VersionPayload) -> Result<NewVersion, ValidationErrors> {
        Self::validate(&[("version", FieldValue::Number(payload.version), VERSION_RULES)])?;
        Ok(NewVersion {
            version: payload.version.unwrap_or_default(),
            description: payload.description,
        })
    }
}
