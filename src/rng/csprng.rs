//! ChaCha20-based CSPRNG
//!
//! A seedable generator that expands a 256-bit key with the ChaCha20 block
//! function. Seeded from the operating system it is a drop-in alternative
//! to [`OsRandom`](crate::token::OsRandom); seeded explicitly it produces
//! reproducible byte streams, which is how tests and benchmarks pin token
//! output.
//!
//! After every fill the generator rekeys itself, so a later compromise of
//! the state does not reveal tokens generated earlier.

use crate::os::sys_random;
use crate::rng::chacha20::block;

/// Cryptographically secure pseudorandom number generator.
pub struct Csprng {
    /// ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Fixed to zero for DRBG usage
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Equivalent to [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Seeds the generator with 32 bytes of operating system entropy.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Seeds the generator from caller-provided key material.
    ///
    /// The seed must be uniformly random and secret for the output to be
    /// unpredictable. Two generators built from the same seed produce the
    /// same stream.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills `out` with keystream bytes, then rekeys.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(64) {
            let keystream = block(&self.key, self.counter, &self.nonce);
            self.counter = self.counter.wrapping_add(1);

            chunk.copy_from_slice(&keystream[..chunk.len()]);
        }

        self.rekey();
    }

    /// Replaces the key with the first half of a fresh keystream block.
    fn rekey(&mut self) {
        let mut keystream = block(&self.key, self.counter, &self.nonce);
        self.counter = self.counter.wrapping_add(1);

        self.key.copy_from_slice(&keystream[..32]);
        keystream.fill(0);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.fill(0);
    }
}
