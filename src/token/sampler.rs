//! Rejection sampling of uniform decimal values.
//!
//! Reducing a uniform `B`-byte integer modulo `10^length` over-represents
//! the low residues whenever `2^(8B)` is not a multiple of `10^length`,
//! which is always. The sampler draws `B` bytes, rejects every value above
//! the largest multiple of `10^length` that fits, and only then reduces:
//!
//! ```text
//! range_max = 2^(8B) - 1
//! threshold = range_max - (range_max mod 10^length) - 1
//! accept v <= threshold, return v mod 10^length
//! ```
//!
//! `threshold + 1` is a multiple of `10^length`, so every residue has the
//! same number of preimages among accepted values. With the default budget
//! of `64 + length` bytes the per-draw rejection probability is below
//! `2^-512`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{error, trace};

use crate::token::error::{OptionError, TokenError};
use crate::token::source::ByteSource;

/// Safety cap on consecutive rejected draws.
///
/// Every budget accepted by validation rejects less than half of all draws,
/// so reaching the cap has probability below `2^-1048576` for a uniform
/// source.
pub const MAX_SAMPLING_ATTEMPTS: u32 = 1 << 20;

/// Largest value accepted when drawing `byte_budget` bytes for a token of
/// `length` digits.
///
/// Returns `None` when `2^(8 * byte_budget) <= 10^length`: no draw could
/// ever be accepted.
pub fn calculate_threshold(byte_budget: usize, length: usize) -> Option<BigUint> {
    bounds(byte_budget, length).map(|(_, threshold)| threshold)
}

/// `(10^length, threshold)`.
fn bounds(byte_budget: usize, length: usize) -> Option<(BigUint, BigUint)> {
    let exponent = u32::try_from(length).ok()?;
    let bits = byte_budget.checked_mul(8)?;

    let modulus = BigUint::from(10u32).pow(exponent);
    let range_max = (BigUint::one() << bits) - 1u32;

    let remainder = &range_max % &modulus;
    let accepted = range_max - remainder;

    if accepted.is_zero() {
        return None;
    }

    Some((modulus, accepted - 1u32))
}

/// Precomputed sampling parameters for one `(length, byte_budget)` pair.
///
/// Building a `Sampler` costs a big-integer exponentiation and remainder;
/// callers producing many tokens of the same shape can keep one around.
#[derive(Clone, Debug)]
pub struct Sampler {
    byte_budget: usize,
    modulus: BigUint,
    threshold: BigUint,
}

impl Sampler {
    /// Fails with [`TokenError::InvalidLength`] for a zero or oversized
    /// length, and with [`OptionError::ByteBudgetTooSmall`] when no
    /// threshold exists.
    pub fn new(length: usize, byte_budget: usize) -> Result<Self, TokenError> {
        if length == 0 || u32::try_from(length).is_err() {
            return Err(TokenError::InvalidLength);
        }

        if byte_budget == 0 {
            return Err(OptionError::ByteBudgetNotPositive.into());
        }

        let (modulus, threshold) = bounds(byte_budget, length).ok_or(
            OptionError::ByteBudgetTooSmall {
                budget: byte_budget,
                length,
            },
        )?;

        Ok(Self {
            byte_budget,
            modulus,
            threshold,
        })
    }

    pub fn byte_budget(&self) -> usize {
        self.byte_budget
    }

    /// `10^length`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn threshold(&self) -> &BigUint {
        &self.threshold
    }

    /// Draws until a value at or below the threshold appears and returns it
    /// reduced modulo `10^length`.
    ///
    /// Each rejected buffer is wiped before the next draw.
    ///
    /// # Errors
    /// [`TokenError::SamplingExhausted`] after [`MAX_SAMPLING_ATTEMPTS`]
    /// consecutive rejections.
    pub fn sample<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<BigUint, TokenError> {
        for attempt in 1..=MAX_SAMPLING_ATTEMPTS {
            let mut bytes = source.draw(self.byte_budget);
            debug_assert_eq!(
                bytes.len(),
                self.byte_budget,
                "byte source returned the wrong number of bytes"
            );

            let candidate = BigUint::from_bytes_be(&bytes);
            bytes.fill(0);

            if candidate <= self.threshold {
                return Ok(candidate % &self.modulus);
            }

            trace!(attempt, byte_budget = self.byte_budget, "draw above threshold rejected");
        }

        error!(
            attempts = MAX_SAMPLING_ATTEMPTS,
            byte_budget = self.byte_budget,
            "rejection sampling exhausted"
        );

        Err(TokenError::SamplingExhausted {
            attempts: MAX_SAMPLING_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_single_byte() {
        // 255 - 255 % 10 - 1
        assert_eq!(calculate_threshold(1, 1), Some(BigUint::from(249u32)));
        // 255 - 255 % 100 - 1
        assert_eq!(calculate_threshold(1, 2), Some(BigUint::from(199u32)));
    }

    #[test]
    fn threshold_two_bytes() {
        // 65535 - 65535 % 10000 - 1
        assert_eq!(calculate_threshold(2, 4), Some(BigUint::from(59_999u32)));
    }

    #[test]
    fn threshold_missing_when_range_too_narrow() {
        assert_eq!(calculate_threshold(1, 3), None);
        assert_eq!(calculate_threshold(2, 5), None);
    }

    #[test]
    fn accepted_range_is_multiple_of_modulus() {
        for length in 1..40 {
            for budget in [length, length + 1, 64 + length] {
                let Some((modulus, threshold)) = bounds(budget, length) else {
                    continue;
                };

                assert!(((threshold + 1u32) % modulus).is_zero());
            }
        }
    }

    #[test]
    fn rejects_draws_above_threshold() {
        let mut draws = vec![vec![0xFFu8], vec![0xFA], vec![0x07]].into_iter();
        let mut source = move |_n: usize| -> Vec<u8> { draws.next().unwrap_or_default() };

        let sampler = Sampler::new(1, 1).unwrap();

        // 255 and 250 are rejected, 7 is accepted
        assert_eq!(sampler.sample(&mut source).unwrap(), BigUint::from(7u32));
    }

    #[test]
    fn accepts_threshold_itself() {
        let mut source = |_n: usize| vec![249u8];
        let sampler = Sampler::new(1, 1).unwrap();

        assert_eq!(sampler.sample(&mut source).unwrap(), BigUint::from(9u32));
    }
}
