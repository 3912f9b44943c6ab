//! Weighted modulo-11 check digits shared by CPF and CNPJ.
//!
//! Both documents use the same rule and differ only in the digits fed in and the initial weight:
//!
//! - CPF weights: `10, 9, 8, 7, 6, 5, 4, 3, 2`
//! - CNPJ weights: `5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2`
//!
//! The CNPJ sequence comes out of the same cursor because the weight wraps back to 9 whenever it
//! would drop below 2.

const MIN_WEIGHT: u32 = 2;
const MAX_WEIGHT: u32 = 9;
const MODULO: u32 = 11;

/// Infinite sequence of weights: starts at the initial weight, decrements by one and wraps to
/// [`MAX_WEIGHT`] instead of going below [`MIN_WEIGHT`].
#[derive(Clone, Debug)]
pub struct WeightCursor {
    weight: u32,
}

impl WeightCursor {
    pub fn new(initial_weight: u32) -> Self {
        Self {
            weight: initial_weight,
        }
    }
}

impl Iterator for WeightCursor {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.weight;
        self.weight = current.saturating_sub(1);
        if self.weight < MIN_WEIGHT {
            self.weight = MAX_WEIGHT;
        }
        Some(current)
    }
}

/// Computes one check digit over `digits` (values in `0..=9`).
pub fn check_digit(digits: &[u8], initial_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(WeightCursor::new(initial_weight))
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();

    match sum % MODULO {
        remainder if remainder < 2 => 0,
        // 11 - remainder is in 2..=9 here
        remainder => (MODULO - remainder) as u8,
    }
}

/// Computes both check digits for a checksum base: the second one runs over the base followed by
/// the first check digit, with the weight incremented by one.
pub fn check_digits(base: &[u8], initial_weight: u32) -> [u8; 2] {
    let first = check_digit(base, initial_weight);

    let mut extended = Vec::with_capacity(base.len() + 1);
    extended.extend_from_slice(base);
    extended.push(first);
    let second = check_digit(&extended, initial_weight + 1);

    [first, second]
}
