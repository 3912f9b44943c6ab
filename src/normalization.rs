/// Collect the decimal digits of the input, in order, as values in `0..=9`.
/// Every other character (punctuation, whitespace, letters, non-ASCII digits) is dropped.
pub fn digits(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|digit| digit as u8)
        .collect()
}

/// Same projection as [`digits`], kept as text.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Renders a digit sequence back to text.
pub(crate) fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
