//! Random valid CPF numbers, for test fixtures and sandboxes.
//!
//! The check digits here use the positional form of the modulo-11 rule: for a base of length
//! `n` the digit at index `i` has weight `n + 1 - i`. For bases of up to 9 digits (10 for the
//! second check digit) that is exactly the sequence the shared [WeightCursor] produces, because
//! the cursor never reaches its wrap-around. The tests assert that the two agree for every
//! CPF base.
//!
//! [WeightCursor]: crate::checksum::WeightCursor

use rand::seq::SliceRandom;
use rand::Rng;

use crate::identifier::format;
use crate::normalization::digits_to_string;
use crate::DocumentKind;

/// A random permutation of the digits `0..=8`, followed by its two check digits.
pub fn generate_cpf_digits<R: Rng + ?Sized>(rng: &mut R) -> Vec<u8> {
    let base_len = DocumentKind::Cpf.first_check_index();

    let mut cpf: Vec<u8> = (0..base_len as u8).collect();
    cpf.shuffle(rng);

    let first = positional_check_digit(&cpf);
    cpf.push(first);
    let second = positional_check_digit(&cpf);
    cpf.push(second);
    cpf
}

/// A random valid CPF with only the numerical digits, e.g. `80545919002`
pub fn generate_cpf<R: Rng + ?Sized>(rng: &mut R) -> String {
    digits_to_string(&generate_cpf_digits(rng))
}

/// A random valid CPF in the canonical `ddd.ddd.ddd-dd` form
pub fn generate_cpf_formatted<R: Rng + ?Sized>(rng: &mut R) -> String {
    let cpf = generate_cpf(rng);
    // 11 ASCII digits always have the digits-only shape
    format(&cpf, DocumentKind::Cpf).unwrap_or(cpf)
}

fn positional_check_digit(data: &[u8]) -> u8 {
    let n = data.len() as u32;
    let total: u32 = data
        .iter()
        .zip(0u32..)
        .map(|(digit, i)| u32::from(*digit) * (n + 1 - i))
        .sum();

    match total % 11 {
        remainder if remainder < 2 => 0,
        remainder => (11 - remainder) as u8,
    }
}
