//! Fail-fast validation of lengths and options.
//!
//! Each check returns on the first violation, and all of them run before a
//! single random byte is drawn.

use serde_json::Value;

use crate::token::error::{OptionError, TokenError};
use crate::token::options::{MAX_SAFE_NUMBER_DIGITS, ReturnType, TokenOptions};
use crate::token::sampler::calculate_threshold;

/// Rejects zero and lengths that do not fit the `u32` exponent used to
/// compute `10^length`.
pub fn validate_length(length: usize) -> Result<(), TokenError> {
    if length == 0 || u32::try_from(length).is_err() {
        return Err(TokenError::InvalidLength);
    }

    Ok(())
}

/// Reads a token length from a loosely typed JSON value.
///
/// Only positive integers are accepted: `-5`, `2.45`, `0`, `"6"` and
/// `null` all fail with [`TokenError::InvalidLength`]. Integral floats such
/// as `6.0` count as integers.
pub fn length_from_json(value: &Value) -> Result<usize, TokenError> {
    let length = positive_integer(value)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(TokenError::InvalidLength)?;

    validate_length(length)?;

    Ok(length)
}

/// Skipping padding on a single digit is meaningless.
pub fn validate_skip_padding(length: usize, options: &TokenOptions) -> Result<(), TokenError> {
    if options.skip_padding == Some(true) && length == 1 {
        return Err(OptionError::SkipPaddingSingleDigit.into());
    }

    Ok(())
}

/// Numbers are capped at [`MAX_SAFE_NUMBER_DIGITS`], and non-string tokens
/// cannot carry padding.
pub fn validate_return_type(length: usize, options: &TokenOptions) -> Result<(), TokenError> {
    let Some(return_type) = options.return_type else {
        return Ok(());
    };

    if return_type == ReturnType::Number && length > MAX_SAFE_NUMBER_DIGITS {
        return Err(TokenError::PrecisionOverflow { length });
    }

    if return_type != ReturnType::String && options.skip_padding == Some(false) {
        return Err(OptionError::PaddingWithNonStringReturnType.into());
    }

    Ok(())
}

/// A budget override must be positive and wide enough that an acceptance
/// threshold exists for `length` digits.
pub fn validate_byte_budget(length: usize, options: &TokenOptions) -> Result<(), TokenError> {
    let Some(budget) = options.byte_budget else {
        return Ok(());
    };

    if budget == 0 {
        return Err(OptionError::ByteBudgetNotPositive.into());
    }

    if calculate_threshold(budget, length).is_none() {
        return Err(OptionError::ByteBudgetTooSmall { budget, length }.into());
    }

    Ok(())
}

/// Positive integral JSON number, if `value` is one.
pub(crate) fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }

    // 2^64 as f64; anything at or above it does not fit a u64
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;

    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f < LIMIT)
        .map(|f| f as u64)
}
