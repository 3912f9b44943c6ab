use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;
use crate::{DocumentKind, IdentifierError};

/// A valid CNPJ, held in its canonical `dd.ddd.ddd/dddd-dd` form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(Identifier);

impl Cnpj {
    /// The input must be either `dddddddddddddd` or `dd.ddd.ddd/dddd-dd`, with valid check digits.
    pub fn new(input: &str) -> Result<Self, IdentifierError> {
        Identifier::new(input, DocumentKind::Cnpj).map(Self)
    }

    pub fn formatted(&self) -> &str {
        self.0.formatted()
    }

    pub fn digits_only(&self) -> String {
        self.0.digits_only()
    }

    /// The formatted root `dd.ddd.ddd` (first 8 digits), shared by every establishment of the
    /// same company.
    pub fn root(&self) -> &str {
        // "dd.ddd.ddd" is the first 10 bytes of the canonical shape
        &self.0.formatted()[..10]
    }

    pub fn as_identifier(&self) -> &Identifier {
        &self.0
    }
}

impl Display for Cnpj {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl FromStr for Cnpj {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cnpj> for String {
    fn from(value: Cnpj) -> Self {
        value.0.into_string()
    }
}

impl From<Cnpj> for Identifier {
    fn from(value: Cnpj) -> Self {
        value.0
    }
}
