//! # Test Data Generators
//!
//! Random values for request payloads in test scripts. Bounds are validated
//! before any random draw: inverted bounds raise a `Range` error rather than
//! being silently swapped.

use rand::Rng;

use crate::error::CheckError;
use crate::kind;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A uniformly random integer in `[min, max]`, inclusive on both ends.
/// `min > max` is a `Range` error.
pub fn random_number(min: i64, max: i64) -> Result<i64, CheckError> {
    kind::require_bounds("random_number", min, max)?;
    Ok(rand::thread_rng().gen_range(min..=max))
}

/// A random alphabetic string of the given length.
pub fn random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}
