//! Cryptographically secure numeric tokens without modulo bias
//!
//! This crate generates fixed-length, digit-only tokens (one-time
//! passwords, PINs, verification codes) of any requested length. Every
//! value below `10^length` is equally likely, whatever the length.
//!
//! # Module overview
//!
//! - `os`
//!   Platform entropy. One implementation per operating system, all
//!   exposing the same function that fills a buffer from the kernel CSPRNG.
//!
//! - `rng`
//!   A seedable ChaCha20 CSPRNG. Useful as a byte source when many tokens
//!   are generated in a row, and for reproducible output in tests.
//!
//! - `token`
//!   The generator itself: byte sources, the rejection sampler, options,
//!   validation and output formatting.
//!
//! # Quick start
//!
//! ```
//! use digit_token::{ReturnType, TokenOptions, generate_digits, generate_token};
//!
//! let pin = generate_digits(6).unwrap();
//! assert_eq!(pin.len(), 6);
//!
//! let options = TokenOptions {
//!     return_type: Some(ReturnType::BigInt),
//!     ..TokenOptions::default()
//! };
//! let big = generate_token(40, &options).unwrap();
//! assert!(big.as_bigint().is_some());
//! ```
//!
//! # Logging
//!
//! Non-fatal advisories (deprecated options, unusual byte budgets) are
//! emitted as `tracing` warnings. The crate never installs a subscriber.
//!
//! # Scope
//!
//! Tokens are values only. Storage, expiry and verification belong to the
//! caller.

mod os;

pub mod rng;
pub mod token;

pub use token::{
    ByteSource, OptionError, OsRandom, ReturnType, Token, TokenError, TokenOptions,
    generate_digits, generate_token, generate_token_from_json, generate_token_with,
};
