use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::generator::generate_cpf;
use crate::identifier::Identifier;
use crate::{DocumentKind, IdentifierError};

/// A valid CPF, held in its canonical `ddd.ddd.ddd-dd` form.
///
/// Serializes as the formatted string. Deserializing accepts the formatted or the digits-only
/// shape and runs the same checks as [Cpf::new].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(Identifier);

impl Cpf {
    /// The input must be either `ddddddddddd` or `ddd.ddd.ddd-dd`, with valid check digits.
    pub fn new(input: &str) -> Result<Self, IdentifierError> {
        Identifier::new(input, DocumentKind::Cpf).map(Self)
    }

    /// A random valid CPF.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let digits = generate_cpf(rng);
        // generated digits always have the digits-only shape and valid check digits
        Self::new(&digits).unwrap_or_else(|err| unreachable!("generated an invalid CPF: {err}"))
    }

    pub fn formatted(&self) -> &str {
        self.0.formatted()
    }

    pub fn digits_only(&self) -> String {
        self.0.digits_only()
    }

    pub fn as_identifier(&self) -> &Identifier {
        &self.0
    }
}

impl Display for Cpf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl FromStr for Cpf {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0.into_string()
    }
}

impl From<Cpf> for Identifier {
    fn from(value: Cpf) -> Self {
        value.0
    }
}
