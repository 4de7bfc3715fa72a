//! Rendering sampled values into tokens.

use std::fmt::{Display, Formatter, Result as FmtResult};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::token::error::TokenError;
use crate::token::options::{MAX_SAFE_NUMBER_DIGITS, ReturnType, TokenOptions};

/// A generated token in the representation requested by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// ASCII decimal digits. Exactly `length` characters unless padding was
    /// skipped, in which case leading zeros are dropped.
    Digits(String),
    /// At most [`MAX_SAFE_NUMBER_DIGITS`](crate::token::MAX_SAFE_NUMBER_DIGITS)
    /// digits, leading zeros dropped.
    Number(u64),
    /// Arbitrary precision, leading zeros dropped.
    BigInt(BigUint),
}

impl Token {
    pub fn return_type(&self) -> ReturnType {
        match self {
            Token::Digits(_) => ReturnType::String,
            Token::Number(_) => ReturnType::Number,
            Token::BigInt(_) => ReturnType::BigInt,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Token::Digits(digits) => Some(digits.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigUint> {
        match self {
            Token::BigInt(n) => Some(n),
            _ => None,
        }
    }

    /// Numeric value of the token, whatever its representation.
    pub fn to_biguint(&self) -> BigUint {
        match self {
            // Digits are ASCII 0-9 by construction
            Token::Digits(digits) => {
                BigUint::parse_bytes(digits.as_bytes(), 10).unwrap_or_default()
            }
            Token::Number(n) => BigUint::from(*n),
            Token::BigInt(n) => n.clone(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Digits(digits) => f.write_str(digits),
            Token::Number(n) => write!(f, "{n}"),
            Token::BigInt(n) => write!(f, "{n}"),
        }
    }
}

/// Converts a sampled value into the representation `options` ask for.
///
/// # Errors
/// [`TokenError::PrecisionOverflow`] when a `Number` token is requested for
/// more than [`MAX_SAFE_NUMBER_DIGITS`] digits. Validation rejects that
/// combination earlier, so generation never reaches it.
pub fn format_token(
    value: BigUint,
    length: usize,
    options: &TokenOptions,
) -> Result<Token, TokenError> {
    match options.return_type() {
        ReturnType::BigInt => Ok(Token::BigInt(value)),
        ReturnType::Number => {
            if length > MAX_SAFE_NUMBER_DIGITS {
                return Err(TokenError::PrecisionOverflow { length });
            }

            // Below 10^15 once the length check passed
            value
                .to_u64()
                .map(Token::Number)
                .ok_or(TokenError::PrecisionOverflow { length })
        }
        ReturnType::String => {
            let digits = value.to_str_radix(10);

            if options.pads() {
                Ok(Token::Digits(pad_token(length, digits)))
            } else {
                Ok(Token::Digits(digits))
            }
        }
    }
}

/// Left-pads `digits` with `'0'` up to `length` characters.
///
/// Strings already at or above `length` are returned unchanged.
pub fn pad_token(length: usize, digits: String) -> String {
    if digits.len() >= length {
        return digits;
    }

    format!("{digits:0>length$}")
}
