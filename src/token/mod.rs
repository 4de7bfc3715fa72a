//! Bias-free numeric token generation
//!
//! A token is a uniformly random number below `10^length`, rendered as a
//! zero-padded digit string (the default), a native number or an
//! arbitrary-precision integer.
//!
//! - `source`: random bytes, [`OsRandom`] by default or any [`ByteSource`]
//! - `sampler`: byte draws to uniform values by rejection ([`Sampler`])
//! - `options`, `validate`: per-call [`TokenOptions`] and their checks
//! - `format`: rendering of the final [`Token`]

mod core;
mod error;
mod format;
mod options;
mod sampler;
mod source;
mod validate;

pub use self::core::{generate_digits, generate_token, generate_token_from_json, generate_token_with};
pub use error::{OptionError, TokenError};
pub use format::{Token, format_token, pad_token};
pub use options::{
    Advisory, DEFAULT_BYTE_BUDGET_BASE, MAX_SAFE_NUMBER_DIGITS, ReturnType, TokenOptions,
    default_byte_budget,
};
pub use sampler::{MAX_SAMPLING_ATTEMPTS, Sampler, calculate_threshold};
pub use source::{ByteSource, OsRandom};
pub use validate::{
    length_from_json, validate_byte_budget, validate_length, validate_return_type,
    validate_skip_padding,
};
