//! Random string construction over arbitrary character sets.

use crate::error::RandomError;
use crate::number::number_in_range;

/// Number of characters produced by [`string`].
pub const DEFAULT_LENGTH: isize = 32;

/// Charset used by [`string`] and [`string_with_length`]: the 62 ASCII
/// alphanumerics.
pub const DEFAULT_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Returns a random string of [`DEFAULT_LENGTH`] characters drawn from
/// [`DEFAULT_CHARSET`].
///
/// With 62 symbols over 32 positions the output space is about 2^190, so two
/// calls collide only with cryptographically negligible probability.
pub fn string() -> Result<String, RandomError> {
    string_with_charset(DEFAULT_LENGTH, DEFAULT_CHARSET)
}

/// Returns a random string of exactly `length` characters from
/// [`DEFAULT_CHARSET`].
///
/// A zero length yields an empty string without consuming entropy; a
/// negative length fails with [`RandomError::InvalidLength`].
pub fn string_with_length(length: isize) -> Result<String, RandomError> {
    string_with_charset(length, DEFAULT_CHARSET)
}

/// Returns a random string of exactly `length` characters drawn from
/// `charset`.
///
/// Each output character is an independent uniform draw over the charset
/// *positions*, so a character listed twice is twice as likely; that
/// weighting is a documented property of the charset, not a sampling bias.
/// The charset is treated as a sequence of characters rather than bytes, so
/// multi-byte symbols are drawn whole.
///
/// An empty charset fails with [`RandomError::InvalidCharset`] even when
/// `length` is zero: charset validity is checked before the length shortcut.
/// A negative length fails with [`RandomError::InvalidLength`].
pub fn string_with_charset(length: isize, charset: &str) -> Result<String, RandomError> {
    if charset.is_empty() {
        return Err(RandomError::InvalidCharset);
    }
    if length < 0 {
        return Err(RandomError::InvalidLength(length));
    }

    let symbols: Vec<char> = charset.chars().collect();
    let last = symbols.len() as i64 - 1;

    let mut out = String::with_capacity(length as usize);
    for _ in 0..length {
        let index = number_in_range(0, last)?;
        out.push(symbols[index as usize]);
    }
    Ok(out)
}
