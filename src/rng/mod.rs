//! Random number generation
//!
//! Userspace randomness built on ChaCha20. The default token byte source
//! reads the operating system directly; [`Csprng`] is the seedable
//! alternative for callers that want to amortise system calls across many
//! tokens or need reproducible output.

pub(crate) mod chacha20;
mod csprng;

pub use csprng::Csprng;
