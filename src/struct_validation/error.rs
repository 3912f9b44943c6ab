use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::struct_validation::{Primitive, Rule, RuleParseError};

/// A single rule a field did not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' failed on the '{rule}' rule (value: {value})")]
pub struct FieldError {
    /// Path to the field, such as `partners[1].cpf`.
    pub field: String,
    pub rule: Rule,
    pub value: Primitive,
}

/// Every rule violation found in a record, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Violations reported for the field at the given path.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.0.iter().filter(move |error| error.field == field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructValidationError {
    /// The rule annotations of a field could not be parsed. This is a programming error in the
    /// `Record` implementation, not a problem with the data.
    #[error("invalid rules for field '{field}': {source}")]
    InvalidRules {
        field: String,
        source: RuleParseError,
    },

    /// No unwrap function is registered for the type of this field.
    #[error("no primitive representation registered for the type of field '{field}'")]
    UnsupportedType { field: String },

    #[error(transparent)]
    Violations(#[from] ValidationErrors),
}

impl StructValidationError {
    /// The rule violations, if this error is about the data rather than the record definition.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            StructValidationError::Violations(errors) => Some(errors),
            _ => None,
        }
    }
}
