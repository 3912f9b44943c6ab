use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use thiserror::Error;

use crate::struct_validation::Primitive;
use crate::validation::Validator;
use crate::{Date, DocumentKind};

const OMIT_EMPTY: &str = "omitempty";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Rule {
    /// The value must not be the zero value of its type.
    Required,
    /// A `YYYY-MM-DD` string, or a set date.
    Date,
    /// A valid CPF, formatted or not.
    Cpf,
    /// A valid CNPJ, formatted or not.
    Cnpj,
    /// A non-empty string of ASCII digits, or an integer.
    Numeric,
    /// Minimum string length (in chars) or integer value.
    Min { value: i64 },
    /// Maximum string length (in chars) or integer value.
    Max { value: i64 },
    /// Exact string length (in chars) or integer value.
    Len { value: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    #[error("rule '{0}' requires a parameter")]
    MissingParameter(String),

    #[error("rule '{0}' does not take a parameter")]
    UnexpectedParameter(String),

    #[error("invalid parameter '{parameter}' for rule '{rule}'")]
    InvalidParameter { rule: String, parameter: String },
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Date => "date",
            Rule::Cpf => "cpf",
            Rule::Cnpj => "cnpj",
            Rule::Numeric => "numeric",
            Rule::Min { .. } => "min",
            Rule::Max { .. } => "max",
            Rule::Len { .. } => "len",
        }
    }

    /// If the value satisfies this rule.
    pub fn check(&self, value: &Primitive) -> bool {
        match self {
            Rule::Required => !value.is_zero(),
            Rule::Date => match value {
                Primitive::Text(text) => Date::parse(text).is_ok(),
                Primitive::Timestamp(_) => true,
                _ => false,
            },
            Rule::Cpf => is_valid_document(value, DocumentKind::Cpf),
            Rule::Cnpj => is_valid_document(value, DocumentKind::Cnpj),
            Rule::Numeric => match value {
                Primitive::Text(text) => {
                    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
                }
                Primitive::Integer(_) => true,
                _ => false,
            },
            Rule::Min { value: min } => size(value).is_some_and(|size| size >= *min),
            Rule::Max { value: max } => size(value).is_some_and(|size| size <= *max),
            Rule::Len { value: len } => size(value).is_some_and(|size| size == *len),
        }
    }
}

fn is_valid_document(value: &Primitive, kind: DocumentKind) -> bool {
    match value {
        Primitive::Text(text) => kind.is_valid_match(text),
        _ => false,
    }
}

fn size(value: &Primitive) -> Option<i64> {
    match value {
        Primitive::Text(text) => Some(i64::try_from(text.chars().count()).unwrap_or(i64::MAX)),
        Primitive::Integer(value) => Some(*value),
        _ => None,
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Min { value } | Rule::Max { value } | Rule::Len { value } => {
                write!(f, "{}={}", self.name(), value)
            }
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, parameter) = match s.split_once('=') {
            Some((name, parameter)) => (name, Some(parameter)),
            None => (s, None),
        };

        let parse_parameter = || -> Result<i64, RuleParseError> {
            let parameter =
                parameter.ok_or_else(|| RuleParseError::MissingParameter(name.to_string()))?;
            parameter
                .parse()
                .map_err(|_| RuleParseError::InvalidParameter {
                    rule: name.to_string(),
                    parameter: parameter.to_string(),
                })
        };

        let rule = match name {
            "required" => Rule::Required,
            "date" => Rule::Date,
            "cpf" => Rule::Cpf,
            "cnpj" => Rule::Cnpj,
            "numeric" => Rule::Numeric,
            "min" => {
                return Ok(Rule::Min {
                    value: parse_parameter()?,
                })
            }
            "max" => {
                return Ok(Rule::Max {
                    value: parse_parameter()?,
                })
            }
            "len" => {
                return Ok(Rule::Len {
                    value: parse_parameter()?,
                })
            }
            _ => return Err(RuleParseError::UnknownRule(name.to_string())),
        };

        if parameter.is_some() {
            return Err(RuleParseError::UnexpectedParameter(name.to_string()));
        }
        Ok(rule)
    }
}

/// The rules annotated on a single field, e.g. `"omitempty,cpf"`.
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRules {
    /// Skip every rule when the value is the zero value of its type
    #[serde(default)]
    pub omit_empty: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl FieldRules {
    /// Returns the rules the value does not satisfy, in annotation order.
    pub fn failed_rules(&self, value: &Primitive) -> Vec<Rule> {
        if self.omit_empty && value.is_zero() {
            return vec![];
        }
        self.rules
            .iter()
            .filter(|rule| !rule.check(value))
            .copied()
            .collect()
    }
}

impl FromStr for FieldRules {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut field_rules = FieldRules::default();
        for tag in s.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
            if tag == OMIT_EMPTY {
                field_rules.omit_empty = true;
            } else {
                field_rules.rules.push(tag.parse()?);
            }
        }
        Ok(field_rules)
    }
}
