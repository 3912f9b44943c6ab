use crate::checksum::check_digits;
use crate::normalization::digits;
use crate::{DocumentError, DocumentKind};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

impl Validator for DocumentKind {
    fn is_valid_match(&self, input: &str) -> bool {
        validate_document(input, *self).is_ok()
    }
}

/// Checks that the input is a valid CPF. Punctuation and whitespace are ignored, but the
/// input must contain exactly 11 digits.
pub fn validate_cpf(input: &str) -> Result<(), DocumentError> {
    validate_document(input, DocumentKind::Cpf)
}

/// Checks that the input is a valid CNPJ. Punctuation and whitespace are ignored, but the
/// input must contain exactly 14 digits.
pub fn validate_cnpj(input: &str) -> Result<(), DocumentError> {
    validate_document(input, DocumentKind::Cnpj)
}

pub fn validate_document(input: &str, kind: DocumentKind) -> Result<(), DocumentError> {
    // This is the same as `validate_and_normalize`, but drops the digits
    validate_and_normalize(input, kind).map(|_| ())
}

/// Validates the input and returns its digits (check digits included).
pub fn validate_and_normalize(input: &str, kind: DocumentKind) -> Result<Vec<u8>, DocumentError> {
    let normalized = digits(input);

    let first_check_index = kind.first_check_index();
    if normalized.is_empty() || normalized.len() < first_check_index {
        return Err(DocumentError::InvalidDocument(kind));
    }

    // e.g. 111.111.111-11 or 22.222.222/2222-22
    if all_equal(&normalized) {
        return Err(DocumentError::InvalidDocument(kind));
    }

    let base = &normalized[..first_check_index];
    let [first, second] = check_digits(base, kind.initial_weight());

    // Comparing the whole sequence also rejects inputs with extra trailing digits
    if normalized[first_check_index..] != [first, second] {
        return Err(DocumentError::InvalidDocument(kind));
    }

    Ok(normalized)
}

fn all_equal(digits: &[u8]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}
