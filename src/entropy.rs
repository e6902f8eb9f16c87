//! Access to the operating system's cryptographically secure entropy source.
//!
//! Every primitive in the crate draws its bytes here. Only the OS-backed RNG
//! is exposed: the crate offers no seedable mode and no statistical
//! generator, not even as a fallback when the OS source fails.

use crate::error::RandomError;
use rand_core::{OsRng, RngCore};

/// Fills `dest` with cryptographically secure random bytes.
///
/// Fails with [`RandomError::EntropyUnavailable`] when the operating system
/// cannot supply entropy; the buffer contents are unspecified in that case.
pub fn fill(dest: &mut [u8]) -> Result<(), RandomError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|_| RandomError::EntropyUnavailable)
}

/// Returns `len` cryptographically secure random bytes.
pub fn bytes(len: usize) -> Result<Vec<u8>, RandomError> {
    let mut buf = vec![0u8; len];
    fill(&mut buf)?;
    Ok(buf)
}

/// Draws eight random bytes and decodes them little-endian.
///
/// This is the byte-order policy for the whole crate; no bit of the output
/// is preferentially zeroed.
pub(crate) fn next_u64() -> Result<u64, RandomError> {
    let mut buf = [0u8; 8];
    fill(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}
