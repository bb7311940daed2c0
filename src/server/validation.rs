//! Declarative validation of server action inputs.
//!
//! An input type implements [`Validate`] to turn its raw, deserialized form into the value
//! the action works with, collecting every problem into [`ValidationErrors`] instead of
//! stopping at the first one.

use std::{collections::BTreeMap, fmt};

use crate::model::action::{FieldErrorsDto, ValidationErrorsDto};

/// Parse a raw action input into its validated form.
pub trait Validate {
    /// The validated value handed to the action.
    type Valid;

    /// Validate `self`, returning every failed rule on error.
    fn validate(self) -> Result<Self::Valid, ValidationErrors>;
}

/// Validation errors keyed by field name, plus errors for the input as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    root: Vec<String>,
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Create an empty set of errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create errors holding a single error for the input as a whole.
    pub fn root(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add_root(message);
        errors
    }

    /// Record an error for the input as a whole.
    pub fn add_root(&mut self, message: impl Into<String>) {
        self.root.push(message.into());
    }

    /// Record an error for `field`.
    pub fn add_field(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Errors recorded for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Errors recorded for the input as a whole.
    pub fn root_errors(&self) -> &[String] {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.fields.is_empty()
    }

    /// `Ok(valid)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, valid: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(valid)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.root.clone();

        for (field, errors) in &self.fields {
            for error in errors {
                messages.push(format!("{}: {}", field, error));
            }
        }

        write!(f, "{}", messages.join("; "))
    }
}

impl From<ValidationErrors> for ValidationErrorsDto {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors: errors.root,
            fields: errors
                .fields
                .into_iter()
                .map(|(field, errors)| (field, FieldErrorsDto { errors }))
                .collect(),
        }
    }
}

/// Require `value` to be present, recording `Required` on `field` otherwise.
pub fn required<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add_field(field, "Required");
    }

    value
}

/// Require `value` to contain at least `min` characters.
pub fn min_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize) {
    if value.chars().count() < min {
        errors.add_field(
            field,
            format!("String must contain at least {} character(s)", min),
        );
    }
}
