use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The two Brazilian taxpayer identifiers.
///
/// The pair (first check digit index, initial weight) fully determines the checksum; every other
/// constant here only describes the textual shape of the identifier.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, 11 digits: `ddd.ddd.ddd-dd`
    #[serde(rename = "CPF")]
    #[strum(serialize = "CPF")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits: `dd.ddd.ddd/dddd-dd`
    #[serde(rename = "CNPJ")]
    #[strum(serialize = "CNPJ")]
    Cnpj,
}

// ddd.ddd.ddd-dd
const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (7, '.'), (11, '-')];
// dd.ddd.ddd/dddd-dd
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (6, '.'), (10, '/'), (15, '-')];

impl DocumentKind {
    /// Index of the first check digit, which is also the length of the checksum base.
    pub fn first_check_index(&self) -> usize {
        match self {
            DocumentKind::Cpf => 9,
            DocumentKind::Cnpj => 12,
        }
    }

    /// Weight applied to the first digit when computing the first check digit.
    /// The second check digit starts one higher.
    pub fn initial_weight(&self) -> u32 {
        match self {
            DocumentKind::Cpf => 10,
            DocumentKind::Cnpj => 5,
        }
    }

    /// Number of digits, check digits included.
    pub fn digit_count(&self) -> usize {
        self.first_check_index() + 2
    }

    /// Byte positions and characters of the punctuation in the canonical formatted form.
    pub fn separators(&self) -> &'static [(usize, char)] {
        match self {
            DocumentKind::Cpf => CPF_SEPARATORS,
            DocumentKind::Cnpj => CNPJ_SEPARATORS,
        }
    }

    pub fn formatted_len(&self) -> usize {
        self.digit_count() + self.separators().len()
    }

    pub(crate) fn is_separator_index(&self, index: usize) -> bool {
        self.separators().iter().any(|(idx, _)| *idx == index)
    }
}
