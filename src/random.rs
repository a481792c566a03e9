//! Random string and integer helpers.
//!
//! Used by acceptance tests and resource naming; not cryptographic. Invalid
//! arguments are caller bugs and panic rather than returning errors.

use rand::seq::SliceRandom;
use rand::Rng;

/// Lowercase ASCII letters
pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits
pub const DIGIT: &str = "0123456789";
/// Space, tab, newline
pub const WHITESPACE: &str = " \t\n";
/// Punctuation safe for most resource identifiers
pub const SPECIAL: &str = "!@#$%^&*()-_=+";

/// Returns a string of `len` characters drawn uniformly from `alphabet`.
///
/// # Panics
///
/// Panics when `alphabet` is empty, even for a zero-length request.
pub fn string(len: usize, alphabet: &str) -> String {
    assert!(!alphabet.is_empty(), "random::string: empty alphabet");
    let chars: Vec<char> = alphabet.chars().collect();
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| chars[rng.gen_range(0..chars.len())])
        .collect()
}

/// Returns `len` distinct integers in random order.
pub fn unique_ints(len: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..len as i64).collect();
    values.shuffle(&mut rand::thread_rng());
    values
}
