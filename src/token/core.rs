//! Token generation entry points.
//!
//! All entry points run the same pipeline:
//!
//! 1. validate the length, then report a deprecated option through `tracing`
//! 2. validate the options (no entropy is consumed on failure)
//! 3. resolve the byte budget and report budget advisories
//! 4. sample a uniform value below `10^length`
//! 5. format it as requested

use serde_json::Value;
use tracing::warn;

use crate::token::error::TokenError;
use crate::token::format::{Token, format_token};
use crate::token::options::{Advisory, TokenOptions, json_has_deprecated_option};
use crate::token::sampler::Sampler;
use crate::token::source::{ByteSource, OsRandom};
use crate::token::validate::{length_from_json, validate_length};

/// Generates a token of `length` digits from the operating system CSPRNG.
///
/// # Example
///
/// ```
/// use digit_token::{TokenOptions, generate_token};
///
/// let token = generate_token(6, &TokenOptions::default()).unwrap();
/// let digits = token.as_str().unwrap();
///
/// assert_eq!(digits.len(), 6);
/// assert!(digits.bytes().all(|b| b.is_ascii_digit()));
/// ```
///
/// # Errors
/// Returns [`TokenError::InvalidLength`], [`TokenError::InvalidOption`] or
/// [`TokenError::PrecisionOverflow`] for bad input, before any randomness
/// is drawn.
pub fn generate_token(length: usize, options: &TokenOptions) -> Result<Token, TokenError> {
    generate_token_with(length, options, &mut OsRandom)
}

/// Generates a token of `length` digits from a caller-supplied byte source.
///
/// The source is only touched once validation has passed.
pub fn generate_token_with<S>(
    length: usize,
    options: &TokenOptions,
    source: &mut S,
) -> Result<Token, TokenError>
where
    S: ByteSource + ?Sized,
{
    validate_length(length)?;

    if let Some(advisory) = options.deprecation_advisory() {
        report(&advisory, length);
    }

    generate_validated(length, options, source)
}

/// Generates a token from loosely typed JSON input.
///
/// `length` must be a positive integral number. `options` is either `null`
/// or an object with the camelCase keys described on
/// [`TokenOptions::from_json`]. The length is checked before the options,
/// so an invalid length is reported whatever the options contain.
pub fn generate_token_from_json(length: &Value, options: &Value) -> Result<Token, TokenError> {
    let length = length_from_json(length)?;

    if json_has_deprecated_option(options) {
        report(&Advisory::DeprecatedOption, length);
    }

    let options = TokenOptions::from_json_for(length, options)?;

    generate_validated(length, &options, &mut OsRandom)
}

/// Shorthand for a default, zero-padded string token.
pub fn generate_digits(length: usize) -> Result<String, TokenError> {
    generate_token(length, &TokenOptions::default()).map(|token| token.to_string())
}

/// Validation, budget advisories, sampling and formatting. The deprecation
/// advisory is the caller's job.
fn generate_validated<S>(
    length: usize,
    options: &TokenOptions,
    source: &mut S,
) -> Result<Token, TokenError>
where
    S: ByteSource + ?Sized,
{
    options.validate(length)?;

    for advisory in options.budget_advisories(length) {
        report(&advisory, length);
    }

    let sampler = Sampler::new(length, options.resolve_byte_budget(length))?;
    let value = sampler.sample(source)?;

    format_token(value, length, options)
}

fn report(advisory: &Advisory, length: usize) {
    warn!(length, "{advisory}");
}
