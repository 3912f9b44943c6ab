mod cnpj;
mod cpf;

pub use cnpj::Cnpj;
pub use cpf::Cpf;

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

use crate::validation::validate_document;
use crate::{DocumentError, DocumentKind, IdentifierError};

lazy_static! {
    static ref FORMATTED_CPF: Regex =
        Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").unwrap();
    static ref ONLY_DIGITS_CPF: Regex =
        Regex::new(r"^([0-9]{3})([0-9]{3})([0-9]{3})([0-9]{2})$").unwrap();
    static ref FORMATTED_CNPJ: Regex =
        Regex::new(r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$").unwrap();
    static ref ONLY_DIGITS_CNPJ: Regex =
        Regex::new(r"^([0-9]{2})([0-9]{3})([0-9]{3})([0-9]{4})([0-9]{2})$").unwrap();
}

/// The grammar of the two accepted raw shapes of a document.
struct Shape {
    formatted: &'static Regex,
    only_digits: &'static Regex,
    /// Rewrites an `only_digits` match into the formatted shape
    replacement: &'static str,
}

fn shape(kind: DocumentKind) -> Shape {
    match kind {
        DocumentKind::Cpf => Shape {
            formatted: &FORMATTED_CPF,
            only_digits: &ONLY_DIGITS_CPF,
            replacement: "$1.$2.$3-$4",
        },
        DocumentKind::Cnpj => Shape {
            formatted: &FORMATTED_CNPJ,
            only_digits: &ONLY_DIGITS_CNPJ,
            replacement: "$1.$2.$3/$4-$5",
        },
    }
}

/// Brings the input to the canonical formatted shape of the document. Only two shapes are
/// accepted: exactly the digits, or the canonical punctuation. This doesn't look at the check
/// digits.
pub fn format(input: &str, kind: DocumentKind) -> Result<String, DocumentError> {
    let shape = shape(kind);
    if shape.formatted.is_match(input) {
        return Ok(input.to_owned());
    }
    if shape.only_digits.is_match(input) {
        return Ok(shape
            .only_digits
            .replace(input, shape.replacement)
            .into_owned());
    }
    Err(DocumentError::InvalidFormat(kind))
}

/// A CPF or CNPJ that is known to be valid.
///
/// The only way to get one is through a constructor that checks both the shape and the check
/// digits, and there is no way to modify it afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    kind: DocumentKind,
    // always in the canonical formatted shape of `kind`
    value: String,
}

impl Identifier {
    pub fn new(input: &str, kind: DocumentKind) -> Result<Self, IdentifierError> {
        let value = format(input, kind).map_err(|err| IdentifierError::new(err, input))?;
        validate_document(&value, kind).map_err(|err| IdentifierError::new(err, &value))?;
        Ok(Self { kind, value })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The canonical formatted representation, e.g. `841.494.050-18`
    pub fn formatted(&self) -> &str {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Only the numerical digits, e.g. `84149405018`
    pub fn digits_only(&self) -> String {
        // The separators sit at fixed positions of the canonical shape and are all ASCII, so
        // char indices and byte indices agree.
        self.value
            .char_indices()
            .filter(|(idx, _)| !self.kind.is_separator_index(*idx))
            .map(|(_, c)| c)
            .collect()
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
