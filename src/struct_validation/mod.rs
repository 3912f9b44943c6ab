use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::observability::labels::Labels;
use crate::{Cnpj, Cpf, Date, Identifier, Path, PathSegment, Record, RecordVisitor};

use self::metrics::Metrics;

pub mod error;
mod metrics;
pub mod primitive;
pub mod rules;

#[cfg(test)]
mod test;

pub use error::{FieldError, StructValidationError, ValidationErrors};
pub use primitive::Primitive;
pub use rules::{FieldRules, Rule, RuleParseError};

type UnwrapFn = Box<dyn Fn(&dyn Any) -> Option<Primitive> + Send + Sync>;

/// Unwraps a [Date] to the primitive the `date` and `required` rules understand.
pub fn date_primitive(date: &Date) -> Primitive {
    date.to_timestamp()
        .map_or(Primitive::Null, Primitive::Timestamp)
}

/// Unwraps any identifier to its canonical formatted text.
pub fn identifier_primitive(identifier: &impl AsRef<str>) -> Primitive {
    Primitive::Text(identifier.as_ref().to_string())
}

fn saturating_integer<T: TryInto<i64>>(value: T) -> Primitive {
    Primitive::Integer(value.try_into().unwrap_or(i64::MAX))
}

pub struct StructValidatorBuilder {
    unwrap_fns: HashMap<TypeId, UnwrapFn>,
    labels: Labels,
}

impl StructValidatorBuilder {
    pub fn new() -> Self {
        Self {
            unwrap_fns: HashMap::new(),
            labels: Labels::empty(),
        }
        .register_custom_type(|value: &String| Primitive::Text(value.clone()))
        .register_custom_type(|value: &Option<String>| {
            value.clone().map_or(Primitive::Null, Primitive::Text)
        })
        .register_custom_type(|value: &bool| Primitive::Bool(*value))
        .register_custom_type(|value: &i32| Primitive::Integer(i64::from(*value)))
        .register_custom_type(|value: &i64| Primitive::Integer(*value))
        .register_custom_type(|value: &u32| Primitive::Integer(i64::from(*value)))
        .register_custom_type(|value: &u64| saturating_integer(*value))
        .register_custom_type(|value: &usize| saturating_integer(*value))
        .register_custom_type(date_primitive)
        .register_custom_type(|value: &Cpf| identifier_primitive(value))
        .register_custom_type(|value: &Cnpj| identifier_primitive(value))
        .register_custom_type(|value: &Identifier| identifier_primitive(value))
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Registers how fields of type `T` are unwrapped before rules are applied, replacing any
    /// previous registration for `T`.
    pub fn register_custom_type<T: Any>(
        mut self,
        unwrap: impl Fn(&T) -> Primitive + Send + Sync + 'static,
    ) -> Self {
        self.unwrap_fns.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &dyn Any| value.downcast_ref::<T>().map(|value| unwrap(value))),
        );
        self
    }

    pub fn build(self) -> StructValidator {
        StructValidator {
            unwrap_fns: self.unwrap_fns,
            metrics: Metrics::new(&self.labels),
        }
    }
}

impl Default for StructValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the rule annotations of every field a [Record] visits.
pub struct StructValidator {
    unwrap_fns: HashMap<TypeId, UnwrapFn>,
    metrics: Metrics,
}

impl StructValidator {
    /// A validator with the default registry and no labels.
    pub fn new() -> Self {
        StructValidatorBuilder::new().build()
    }

    pub fn builder() -> StructValidatorBuilder {
        StructValidatorBuilder::new()
    }

    /// Validates every field of the record. All rule violations are collected and returned
    /// together. A field with unparseable rules or an unregistered type aborts validation.
    pub fn validate<R: Record>(&self, record: &R) -> Result<(), StructValidationError> {
        let mut collector = FieldCollector {
            validator: self,
            path: Path::root(),
            violations: vec![],
            failure: None,
        };
        record.visit_record(&mut collector);
        self.metrics.records.increment(1);

        if let Some(failure) = collector.failure {
            return Err(failure);
        }
        if collector.violations.is_empty() {
            return Ok(());
        }

        self.metrics.rejected_records.increment(1);
        self.metrics
            .field_violations
            .increment(collector.violations.len() as u64);
        Err(StructValidationError::Violations(ValidationErrors::new(
            collector.violations,
        )))
    }

    /// Validates a single value outside of any record. Errors report an empty field path.
    pub fn validate_value<T: Any>(&self, value: &T, rules: &str) -> Result<(), StructValidationError> {
        let violations = self.check_field(&Path::root(), value, rules)?;
        if violations.is_empty() {
            Ok(())
        } else {
            Err(StructValidationError::Violations(ValidationErrors::new(
                violations,
            )))
        }
    }

    fn to_primitive(&self, value: &dyn Any) -> Option<Primitive> {
        self.unwrap_fns
            .get(&value.type_id())
            .and_then(|unwrap| unwrap(value))
    }

    fn check_field(
        &self,
        path: &Path,
        value: &dyn Any,
        rules: &str,
    ) -> Result<Vec<FieldError>, StructValidationError> {
        let field_rules: FieldRules =
            rules
                .parse()
                .map_err(|source| StructValidationError::InvalidRules {
                    field: path.to_string(),
                    source,
                })?;
        let primitive = self
            .to_primitive(value)
            .ok_or_else(|| StructValidationError::UnsupportedType {
                field: path.to_string(),
            })?;

        Ok(field_rules
            .failed_rules(&primitive)
            .into_iter()
            .map(|rule| FieldError {
                field: path.to_string(),
                rule,
                value: primitive.clone(),
            })
            .collect())
    }
}

impl Default for StructValidator {
    fn default() -> Self {
        Self::new()
    }
}

struct FieldCollector<'v, 'a> {
    validator: &'v StructValidator,
    path: Path<'a>,
    violations: Vec<FieldError>,
    failure: Option<StructValidationError>,
}

impl<'a> RecordVisitor<'a> for FieldCollector<'_, 'a> {
    fn push_segment(&mut self, segment: PathSegment<'a>) {
        self.path.push(segment);
    }

    fn pop_segment(&mut self) {
        self.path.pop();
    }

    fn visit_value(&mut self, value: &'a dyn Any, rules: &'a str) {
        if self.failure.is_some() {
            return;
        }
        match self.validator.check_field(&self.path, value, rules) {
            Ok(violations) => self.violations.extend(violations),
            Err(failure) => self.failure = Some(failure),
        }
    }
}
