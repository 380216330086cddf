//! Input parsing and sample-array generation.
//!
//! Arrays enter the system two ways: free-text comma-separated input, or
//! seeded random generation. Free-text parsing follows a lenient contract:
//! tokens that do not parse as integers are silently discarded, and callers
//! treat an all-discarded result as "ignore the operation entirely". The
//! strict per-token parser is public so the rejection reasons stay
//! observable and testable.
//!
//! # Determinism
//!
//! Random arrays come from a caller-supplied seeded ChaCha8 RNG, so the same
//! seed always produces the same session.

use crate::error::InputError;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::ops::RangeInclusive;

/// Largest value magnitude the visualizer accepts.
///
/// Counting sort allocates a table of `max + 1` slots, so unbounded values
/// would turn a classroom demo into a giant allocation.
pub const MAX_VALUE: i64 = 9_999;

/// Parse a single token as an integer value.
///
/// The token is trimmed first. Negative values are accepted here (bucket
/// sort supports them); algorithms that need non-negative keys validate
/// separately.
///
/// # Errors
/// - `InputError::NonNumeric` if the trimmed token is not an integer
/// - `InputError::OutOfRange` if |value| exceeds [`MAX_VALUE`]
pub fn parse_token(token: &str) -> Result<i64, InputError> {
    let trimmed = token.trim();
    let value: i64 = trimmed.parse().map_err(|_| InputError::NonNumeric {
        token: trimmed.to_string(),
    })?;

    if value.abs() > MAX_VALUE {
        return Err(InputError::OutOfRange {
            value,
            limit: MAX_VALUE,
        });
    }

    Ok(value)
}

/// Parse comma-separated free text, silently discarding invalid tokens.
///
/// Returns the values that parsed, in input order. An empty result means
/// the whole operation should be ignored; this function never errors.
pub fn parse_sequence(text: &str) -> Vec<i64> {
    text.split(',')
        .filter_map(|token| parse_token(token).ok())
        .collect()
}

/// Reject negative values for algorithms keyed directly by value.
///
/// Counting and radix sort index tables by the value (or its digits), which
/// is undefined for negatives. Returns the first offender.
pub fn require_non_negative(values: &[i64]) -> Result<(), InputError> {
    match values.iter().find(|v| **v < 0) {
        Some(&value) => Err(InputError::NegativeValue { value }),
        None => Ok(()),
    }
}

/// Generate a random sample array for a fresh session.
///
/// # Arguments
/// - `rng`: seeded RNG owned by the session
/// - `len`: number of elements
/// - `range`: per-algorithm value range (e.g. `1..=20` for counting sort)
pub fn random_array(rng: &mut ChaCha8Rng, len: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_parse_token_trims_whitespace() {
        assert_eq!(parse_token("  42 "), Ok(42));
        assert_eq!(parse_token("-7"), Ok(-7));
    }

    #[test]
    fn test_parse_token_non_numeric() {
        let err = parse_token("abc").unwrap_err();
        assert_eq!(
            err,
            InputError::NonNumeric {
                token: "abc".to_string()
            }
        );
        assert!(parse_token("3.5").is_err());
        assert!(parse_token("").is_err());
    }

    #[test]
    fn test_parse_token_out_of_range() {
        assert!(parse_token("9999").is_ok());
        let err = parse_token("10000").unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                value: 10_000,
                limit: MAX_VALUE
            }
        );
        assert!(parse_token("-10000").is_err());
    }

    #[test]
    fn test_parse_sequence_filters_silently() {
        assert_eq!(parse_sequence("5, 12, 3, 8"), vec![5, 12, 3, 8]);
        assert_eq!(parse_sequence("5, x, 3, , 8"), vec![5, 3, 8]);
        assert_eq!(parse_sequence("nope, also nope"), Vec::<i64>::new());
        assert_eq!(parse_sequence(""), Vec::<i64>::new());
    }

    #[test]
    fn test_require_non_negative() {
        assert!(require_non_negative(&[0, 3, 7]).is_ok());
        assert_eq!(
            require_non_negative(&[3, -2, 7]),
            Err(InputError::NegativeValue { value: -2 })
        );
    }

    #[test]
    fn test_random_array_length_and_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let values = random_array(&mut rng, 10, 1..=20);
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| (1..=20).contains(v)));
    }

    #[test]
    fn test_random_array_determinism() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(12345);
        let mut rng2 = ChaCha8Rng::seed_from_u64(12345);
        assert_eq!(
            random_array(&mut rng1, 10, 1..=999),
            random_array(&mut rng2, 10, 1..=999)
        );
    }

    #[test]
    fn test_random_array_different_seeds() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(1);
        let mut rng2 = ChaCha8Rng::seed_from_u64(2);
        assert_ne!(
            random_array(&mut rng1, 10, 1..=999),
            random_array(&mut rng2, 10, 1..=999)
        );
    }
}
