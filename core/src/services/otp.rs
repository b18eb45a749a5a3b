//! One-time code generation.

use rand::Rng;

/// Default number of digits in a generated code
pub const DEFAULT_CODE_LENGTH: u32 = 4;

/// Generate a random numeric one-time code of exactly `length` digits
///
/// The value is uniform in `[10^(length-1), 10^length)`, so the leading
/// digit is never zero. A general-purpose RNG is sufficient here: codes
/// are short-lived email-verification tokens, not high-entropy secrets.
pub fn generate_code(length: u32) -> u32 {
    let lower = 10u32.pow(length - 1);
    let upper = 10u32.pow(length);
    rand::thread_rng().gen_range(lower..upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_in_range() {
        for _ in 0..1000 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!((1000..10000).contains(&code));
        }
    }

    #[test]
    fn test_code_length_is_exact() {
        for length in 1..=6 {
            let code = generate_code(length);
            assert_eq!(code.to_string().len(), length as usize);
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<u32> =
            (0..100).map(|_| generate_code(6)).collect();
        assert!(codes.len() > 1);
    }
}
