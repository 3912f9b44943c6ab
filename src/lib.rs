// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod date;
mod document_kind;
mod error;
mod generator;
mod identifier;
mod normalization;
mod observability;
mod path;
mod record;
mod struct_validation;
mod validation;

// This is the public API of the brdocs library
pub use checksum::{check_digit, check_digits, WeightCursor};
pub use date::Date;
pub use document_kind::DocumentKind;
pub use error::{DateError, DocumentError, IdentifierError};
pub use generator::{generate_cpf, generate_cpf_digits, generate_cpf_formatted};
pub use identifier::{format, Cnpj, Cpf, Identifier};
pub use normalization::{digits, only_digits};
pub use observability::labels::Labels;
pub use path::{Path, PathSegment};
pub use record::{Record, RecordVisitor};
pub use struct_validation::{
    date_primitive, identifier_primitive, FieldError, FieldRules, Primitive, Rule,
    RuleParseError, StructValidationError, StructValidator, StructValidatorBuilder,
    ValidationErrors,
};
pub use validation::{
    validate_and_normalize, validate_cnpj, validate_cpf, validate_document, Validator,
};
