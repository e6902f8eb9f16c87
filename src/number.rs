//! Unbiased integer sampling over the full 64-bit domain and arbitrary
//! inclusive ranges.
//!
//! Bounded draws never use a bare modulo reduction. Reducing a 64-bit value
//! modulo a span that does not divide 2^64 would favour the low residues, so
//! [`number_in_range`] rejects draws from the incomplete residue group at the
//! top of the output space and redraws instead.

use crate::entropy;
use crate::error::RandomError;

/// Returns a uniformly distributed random value spanning the full signed
/// 64-bit range.
pub fn number() -> Result<i64, RandomError> {
    Ok(entropy::next_u64()? as i64)
}

/// Returns a uniformly distributed integer in the closed interval
/// `[min, max]`.
///
/// Fails with [`RandomError::InvalidRange`] when `min > max`. A single-value
/// range returns `min` immediately without consuming entropy.
///
/// Draws are accepted by rejection sampling: a raw 64-bit value is kept only
/// when it falls below the largest multiple of the span representable in the
/// output space, then reduced modulo the span. The rejected band always
/// covers fewer than 2^63 of the 2^64 possible draws, so every draw is
/// accepted with probability above 1/2 and the expected number of draws per
/// call stays below two.
pub fn number_in_range(min: i64, max: i64) -> Result<i64, RandomError> {
    if min > max {
        return Err(RandomError::InvalidRange { min, max });
    }
    if min == max {
        return Ok(min);
    }

    // Widened so the span of i64::MIN..=i64::MAX cannot overflow.
    let span = (max as i128) - (min as i128) + 1;
    if span > u64::MAX as i128 {
        // The interval covers the whole domain; a raw draw is already uniform.
        return number();
    }

    let span = span as u64;
    let cutoff = acceptance_cutoff(span);
    loop {
        let raw = entropy::next_u64()?;
        if raw <= cutoff {
            let offset = raw % span;
            return Ok(((min as i128) + (offset as i128)) as i64);
        }
    }
}

/// Largest raw draw accepted when reducing a 64-bit value modulo `span`.
///
/// The count of accepted draws, `cutoff + 1`, is the greatest multiple of
/// `span` not exceeding 2^64, so the accepted draws cover every residue the
/// same number of times.
fn acceptance_cutoff(span: u64) -> u64 {
    // 2^64 mod span, computed without leaving 64-bit arithmetic.
    let rejected = (u64::MAX % span + 1) % span;
    u64::MAX - rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn number_produces_mostly_unique_values() {
        const ITERATIONS: usize = 1000;
        let mut seen = HashSet::new();
        for _ in 0..ITERATIONS {
            seen.insert(number().expect("entropy should be available"));
        }

        // Over a 64-bit domain even a single duplicate is extremely unlikely.
        let unique_ratio = seen.len() as f64 / ITERATIONS as f64;
        assert!(
            unique_ratio > 0.99,
            "expected mostly unique draws, got uniqueness ratio {unique_ratio}"
        );
    }

    #[test]
    fn number_in_range_stays_within_bounds() {
        let ranges = [
            (1, 100),
            (-100, -1),
            (-5, 5),
            (0, 1),
            (i64::MIN, i64::MIN + 10),
            (i64::MAX - 10, i64::MAX),
        ];

        for (min, max) in ranges {
            for _ in 0..200 {
                let value =
                    number_in_range(min, max).expect("draw should succeed for a valid range");
                assert!(
                    (min..=max).contains(&value),
                    "value {value} outside [{min}, {max}]"
                );
            }
        }
    }

    #[test]
    fn equal_bounds_return_the_single_value() {
        assert_eq!(number_in_range(5, 5).unwrap(), 5);
        assert_eq!(number_in_range(i64::MIN, i64::MIN).unwrap(), i64::MIN);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        assert_eq!(
            number_in_range(100, 1),
            Err(RandomError::InvalidRange { min: 100, max: 1 })
        );
    }

    #[test]
    fn full_domain_range_succeeds() {
        // The only range whose span does not fit in a u64.
        number_in_range(i64::MIN, i64::MAX).expect("full-domain draw should succeed");
    }

    #[test]
    fn small_range_covers_every_value() {
        let mut seen = HashSet::new();
        for _ in 0..300 {
            seen.insert(number_in_range(10, 12).expect("draw should succeed"));
        }
        assert_eq!(
            seen,
            HashSet::from([10, 11, 12]),
            "300 draws over three values should reach all of them"
        );
    }

    #[test]
    fn acceptance_cutoff_keeps_whole_space_for_power_of_two_spans() {
        // Spans dividing 2^64 leave no incomplete residue group.
        assert_eq!(acceptance_cutoff(2), u64::MAX);
        assert_eq!(acceptance_cutoff(1 << 32), u64::MAX);
        assert_eq!(acceptance_cutoff(1 << 63), u64::MAX);
    }

    #[test]
    fn acceptance_cutoff_bounds_the_rejected_band() {
        let spans = [3u64, 5, 6, 7, 10, 62, 100, (1 << 62) + 1, u64::MAX];
        for span in spans {
            let cutoff = acceptance_cutoff(span);
            // Accepted draws form complete residue groups.
            assert_eq!(cutoff % span, span - 1, "span {span}");
            // The rejected band stays below one span and below half the
            // output space, which bounds the expected redraw count below two.
            assert!(u64::MAX - cutoff < span, "span {span}");
            assert!(u64::MAX - cutoff < 1 << 63, "span {span}");
        }
    }
}
