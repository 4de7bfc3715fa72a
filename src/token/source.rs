//! Byte sources feeding the sampler.
//!
//! A [`ByteSource`] hands out raw random bytes on demand. Production code
//! uses [`OsRandom`]; anything else (a seeded [`Csprng`], a closure, a
//! hardware RNG wrapper) can be injected through
//! [`generate_token_with`](crate::token::generate_token_with).

use crate::os::sys_random;
use crate::rng::Csprng;

/// Capability to produce uniformly distributed random bytes.
///
/// Implementations must return exactly `count` bytes. The sampler does not
/// check this in release builds: a short buffer silently narrows the range
/// of drawn values and reintroduces bias.
pub trait ByteSource {
    /// Returns `count` fresh random bytes.
    fn draw(&mut self, count: usize) -> Vec<u8>;
}

/// The operating system CSPRNG.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsRandom;

impl ByteSource for OsRandom {
    fn draw(&mut self, count: usize) -> Vec<u8> {
        let mut out = vec![0u8; count];
        sys_random(&mut out);
        out
    }
}

impl ByteSource for Csprng {
    fn draw(&mut self, count: usize) -> Vec<u8> {
        let mut out = vec![0u8; count];
        self.fill_bytes(&mut out);
        out
    }
}

/// Caller-supplied generator functions, e.g. `|n| vec![0u8; n]`.
impl<F> ByteSource for F
where
    F: FnMut(usize) -> Vec<u8>,
{
    fn draw(&mut self, count: usize) -> Vec<u8> {
        self(count)
    }
}
