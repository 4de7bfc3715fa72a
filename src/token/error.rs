//! Error taxonomy for token generation.
//!
//! Every variant except [`TokenError::SamplingExhausted`] is a pure function
//! of the inputs: it is raised before any random byte is drawn and it
//! reproduces on every call with the same arguments.

use thiserror::Error;

/// Errors returned by the token generation entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Length missing, non-integer, non-positive, or too large to be used
    /// as an exponent.
    #[error("Invalid length: must be called with a positive integer.")]
    InvalidLength,

    /// A malformed or contradictory option.
    #[error("Invalid options: {0}")]
    InvalidOption(#[from] OptionError),

    /// A numeric return type was requested for more digits than a native
    /// number represents exactly.
    #[error(
        "Invalid options: number (integer) return type is too small for length of {length} digits. Please consider using BigInt or String as return type."
    )]
    PrecisionOverflow {
        /// The requested token length.
        length: usize,
    },

    /// The rejection loop hit its safety cap. This points at a broken byte
    /// source or a miscomputed threshold, not at bad luck.
    #[error("sampling rejected {attempts} consecutive draws; the byte source is not uniform")]
    SamplingExhausted {
        /// Number of draws performed before giving up.
        attempts: u32,
    },
}

/// Reasons an options object is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The options value is not an object.
    #[error("options must be an object.")]
    NotAnObject,

    /// `skipPadding` holds something other than a boolean.
    #[error("skipPadding must be a boolean.")]
    SkipPaddingNotBoolean,

    /// `skipPadding` was enabled for a single digit token.
    #[error("skipPadding can only be used with token length >1.")]
    SkipPaddingSingleDigit,

    /// `returnType` holds something other than a string.
    #[error("returnType must be specified in a string. For example 'number' or 'string'.")]
    ReturnTypeNotString,

    /// `returnType` names no known representation.
    #[error("unsupported return type '{0}'. Please choose one of string | number | bigint.")]
    UnsupportedReturnType(String),

    /// Padding was demanded for a numeric or big integer token.
    #[error(
        "skipPadding must be enabled with non-string return types. Please consult the documentation for further information."
    )]
    PaddingWithNonStringReturnType,

    /// The byte budget is zero, negative or not an integer.
    #[error("byteBudget must be a positive integer.")]
    ByteBudgetNotPositive,

    /// `2^(8 * budget)` does not exceed `10^length`, so no acceptance
    /// threshold exists.
    #[error("byteBudget of {budget} bytes cannot cover {length} decimal digits.")]
    ByteBudgetTooSmall {
        /// The requested byte budget.
        budget: usize,
        /// The requested token length.
        length: usize,
    },

    /// A byte source was supplied as data instead of as a callable source.
    #[error("byteSource must be a function that returns a byte buffer.")]
    ByteSourceNotCallable,
}
