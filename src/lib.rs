//! Cryptographically secure randomness primitives.
//!
//! This crate covers the small set of generation utilities needed where
//! predictable output would be a security defect: unbiased integers over the
//! full 64-bit domain or an arbitrary inclusive range, token-style random
//! strings over arbitrary character sets, uniform element selection, and
//! uniform in-place shuffling. Every draw is sourced from the operating
//! system CSPRNG; there is no seedable mode and no statistical fallback.
//!
//! Bounded draws never reduce with a bare modulo. [`number_in_range`] uses
//! rejection sampling, so no value of the target interval is favoured no
//! matter how the interval divides the 64-bit output space.
//!
//! All operations are stateless and safe to call from concurrent threads.
//!
//! # Example
//!
//! ```
//! use csrand::{number_in_range, pick, shuffle, string};
//!
//! let token = string()?;
//! assert_eq!(token.chars().count() as isize, csrand::DEFAULT_LENGTH);
//!
//! let die = number_in_range(1, 6)?;
//! assert!((1..=6).contains(&die));
//!
//! let suits = ["clubs", "diamonds", "hearts", "spades"];
//! let suit = pick(&suits)?;
//! assert!(suits.contains(suit));
//!
//! let mut deck: Vec<u8> = (1..=52).collect();
//! shuffle(&mut deck)?;
//! # Ok::<(), csrand::RandomError>(())
//! ```

mod entropy;
mod error;
mod number;
mod sequence;
mod text;

pub use entropy::{bytes, fill};
pub use error::RandomError;
pub use number::{number, number_in_range};
pub use sequence::{pick, shuffle};
pub use text::{
    string, string_with_charset, string_with_length, DEFAULT_CHARSET, DEFAULT_LENGTH,
};
