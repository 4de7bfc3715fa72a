//! Per-call token options and their resolution.
//!
//! [`TokenOptions`] is plain data: every field is optional and `None` means
//! "use the default". Options are validated once, at the start of a
//! generation call, and are never modified by it.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::token::error::{OptionError, TokenError};
use crate::token::validate;

/// Bytes drawn per sampling attempt on top of the token length.
pub const DEFAULT_BYTE_BUDGET_BASE: usize = 64;

/// Longest token that can be returned as [`ReturnType::Number`].
///
/// Fifteen decimal digits is the widest value every consumer of a double
/// precision number represents exactly.
pub const MAX_SAFE_NUMBER_DIGITS: usize = 15;

/// Output representation of a token.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReturnType {
    /// Decimal digit string, zero-padded unless padding is skipped.
    #[default]
    String,
    /// Native unsigned number. Leading zeros are lost.
    Number,
    /// Arbitrary-precision integer. Leading zeros are lost.
    BigInt,
}

impl ReturnType {
    /// Canonical lower-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReturnType::String => "string",
            ReturnType::Number => "number",
            ReturnType::BigInt => "bigint",
        }
    }
}

impl Display for ReturnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnType {
    type Err = OptionError;

    /// Case-insensitive. `"integer"` is accepted as a legacy alias of
    /// `"number"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(ReturnType::String),
            "number" | "integer" => Ok(ReturnType::Number),
            "bigint" => Ok(ReturnType::BigInt),
            _ => Err(OptionError::UnsupportedReturnType(s.to_owned())),
        }
    }
}

/// Non-fatal conditions worth telling the caller about.
///
/// Advisories never change the generated token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// `avoid_modulo_bias` was supplied. Sampling is always bias-free.
    DeprecatedOption,
    /// The byte budget is below the default; more draws may be rejected.
    ScarceMemory {
        /// Resolved byte budget.
        budget: usize,
        /// Default budget for the requested length.
        ideal: usize,
    },
    /// The byte budget is more than twice the default.
    OvercompensatedMemory {
        /// Resolved byte budget.
        budget: usize,
        /// Default budget for the requested length.
        ideal: usize,
    },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Advisory::DeprecatedOption => f.write_str(
                "Warning - deprecated option: The updated algorithm avoids modulo bias by default, therefore the avoidModuloBias option is no longer necessary and has been deprecated.",
            ),
            Advisory::ScarceMemory { .. } => f.write_str(
                "Warning - scarce memory: Allocated memory is less than ideal for the algorithm, this *may* result in decreased performance.",
            ),
            Advisory::OvercompensatedMemory { .. } => f.write_str(
                "Warning - overcompensated memory: Allocated memory is more than ideal for the algorithm, this *may* result in decreased performance.",
            ),
        }
    }
}

/// Options for a single token generation call.
///
/// # Example
///
/// ```
/// use digit_token::{ReturnType, TokenOptions};
///
/// let options = TokenOptions {
///     return_type: Some(ReturnType::Number),
///     ..TokenOptions::default()
/// };
/// assert!(options.validate(6).is_ok());
/// assert!(options.validate(16).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenOptions {
    /// Output representation; `None` means [`ReturnType::String`].
    pub return_type: Option<ReturnType>,
    /// Return string tokens without leading zeros. Such tokens may be
    /// shorter than the requested length.
    pub skip_padding: Option<bool>,
    /// Random bytes drawn per sampling attempt. Defaults to
    /// [`DEFAULT_BYTE_BUDGET_BASE`] plus the token length.
    pub byte_budget: Option<usize>,
    /// Deprecated and ignored apart from an advisory.
    pub avoid_modulo_bias: Option<bool>,
}

impl TokenOptions {
    /// Effective return type.
    pub fn return_type(&self) -> ReturnType {
        self.return_type.unwrap_or_default()
    }

    /// Whether string tokens are left-padded to the full length.
    pub fn pads(&self) -> bool {
        self.return_type() == ReturnType::String && self.skip_padding != Some(true)
    }

    /// Byte budget used for a token of `length` digits.
    pub fn resolve_byte_budget(&self, length: usize) -> usize {
        self.byte_budget.unwrap_or_else(|| default_byte_budget(length))
    }

    /// Runs the full validation chain for a token of `length` digits.
    ///
    /// The length itself is checked first, then the options in a fixed
    /// order; the first violation is returned.
    pub fn validate(&self, length: usize) -> Result<(), TokenError> {
        validate::validate_length(length)?;
        validate::validate_skip_padding(length, self)?;
        validate::validate_return_type(length, self)?;
        validate::validate_byte_budget(length, self)?;

        Ok(())
    }

    /// Advisories for a token of `length` digits, in reporting order.
    pub fn advisories(&self, length: usize) -> Vec<Advisory> {
        self.deprecation_advisory()
            .into_iter()
            .chain(self.budget_advisories(length))
            .collect()
    }

    /// Reported before any option is checked, so failing calls still
    /// surface it.
    pub fn deprecation_advisory(&self) -> Option<Advisory> {
        self.avoid_modulo_bias.map(|_| Advisory::DeprecatedOption)
    }

    /// Scarce or overcompensated budget overrides.
    pub fn budget_advisories(&self, length: usize) -> Vec<Advisory> {
        let mut out = Vec::new();

        if let Some(budget) = self.byte_budget {
            let ideal = default_byte_budget(length);

            if budget < ideal {
                out.push(Advisory::ScarceMemory { budget, ideal });
            }

            if budget > ideal.saturating_mul(2) {
                out.push(Advisory::OvercompensatedMemory { budget, ideal });
            }
        }

        out
    }

    /// Builds options from a loosely typed JSON object.
    ///
    /// Recognised keys are `returnType`, `skipPadding`, `byteBudget`
    /// (legacy `customMemory`), `byteSource` (legacy `customByteStream`) and
    /// `avoidModuloBias`. `null` values count as absent and unknown keys are
    /// ignored. A `null` document yields the default options.
    ///
    /// Only the shape is checked here. Use [`TokenOptions::from_json_for`]
    /// when the token length is known.
    pub fn from_json(value: &Value) -> Result<Self, TokenError> {
        let Some(object) = json_object(value)? else {
            return Ok(Self::default());
        };

        let options = Self {
            skip_padding: json_skip_padding(object)?,
            return_type: json_return_type(object)?,
            byte_budget: json_byte_budget(object)?,
            avoid_modulo_bias: json_avoid_modulo_bias(object),
        };
        json_byte_source(object)?;

        Ok(options)
    }

    /// Builds and validates options for a token of `length` digits.
    ///
    /// Each field is parsed and then checked against `length` before the
    /// next field is looked at, so the first violation in the order
    /// skipPadding, returnType, byteBudget, byteSource is the one reported.
    pub fn from_json_for(length: usize, value: &Value) -> Result<Self, TokenError> {
        validate::validate_length(length)?;

        let Some(object) = json_object(value)? else {
            return Ok(Self::default());
        };

        let mut options = Self {
            avoid_modulo_bias: json_avoid_modulo_bias(object),
            ..Self::default()
        };

        options.skip_padding = json_skip_padding(object)?;
        validate::validate_skip_padding(length, &options)?;

        options.return_type = json_return_type(object)?;
        validate::validate_return_type(length, &options)?;

        options.byte_budget = json_byte_budget(object)?;
        validate::validate_byte_budget(length, &options)?;

        json_byte_source(object)?;

        Ok(options)
    }
}

/// `None` for a `null` document.
fn json_object(value: &Value) -> Result<Option<&Map<String, Value>>, TokenError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(object) => Ok(Some(object)),
        _ => Err(OptionError::NotAnObject.into()),
    }
}

fn json_skip_padding(object: &Map<String, Value>) -> Result<Option<bool>, TokenError> {
    match field(object, &["skipPadding"]) {
        None => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(*flag)),
        Some(_) => Err(OptionError::SkipPaddingNotBoolean.into()),
    }
}

fn json_return_type(object: &Map<String, Value>) -> Result<Option<ReturnType>, TokenError> {
    match field(object, &["returnType"]) {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(name.parse::<ReturnType>()?)),
        Some(_) => Err(OptionError::ReturnTypeNotString.into()),
    }
}

fn json_byte_budget(object: &Map<String, Value>) -> Result<Option<usize>, TokenError> {
    let Some(budget) = field(object, &["byteBudget", "customMemory"]) else {
        return Ok(None);
    };

    validate::positive_integer(budget)
        .and_then(|n| usize::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| OptionError::ByteBudgetNotPositive.into())
}

/// Data is never callable; a source has to be passed as a [`ByteSource`](crate::token::ByteSource).
fn json_byte_source(object: &Map<String, Value>) -> Result<(), TokenError> {
    if field(object, &["byteSource", "customByteStream"]).is_some() {
        return Err(OptionError::ByteSourceNotCallable.into());
    }

    Ok(())
}

/// Any value, even a non-boolean, only earns the deprecation advisory.
fn json_avoid_modulo_bias(object: &Map<String, Value>) -> Option<bool> {
    object
        .get("avoidModuloBias")
        .map(|flag| flag.as_bool().unwrap_or(true))
}

/// Whether a raw options document carries the deprecated flag.
pub(crate) fn json_has_deprecated_option(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key("avoidModuloBias"))
}

/// Default byte budget for a token of `length` digits.
pub fn default_byte_budget(length: usize) -> usize {
    DEFAULT_BYTE_BUDGET_BASE.saturating_add(length)
}

/// First non-null value among `keys`.
fn field<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}
