//! Pluggable pseudo-random generator framework.
//!
//! Generator dispatch is a sum type, [`RandomGenerator`], over the
//! generator variants, rather than a table of function pointers; each
//! variant is built through its own constructor. Every variant implements
//! the same two mandatory operations (`next_u32`, `fill_bytes`);
//! state-save/load is exposed only for the variants where it actually
//! makes sense.

mod mother;
mod mt19937;
mod os_entropy;
mod tls_prf;
mod unpredictable;
mod xorshift128;

pub use mother::Mother;
pub use mt19937::MersenneTwister;
pub use os_entropy::OsEntropy;
pub use tls_prf::TlsPrf;
pub use unpredictable::unpredictable_entropy;
pub use xorshift128::Xorshift128;

use crate::digest::Digest;

/// A handle over one of the supported generator algorithms.
///
/// This is a value type: cloning/moving a handle moves its entire state.
/// A handle is single-threaded; callers sharing one across threads must
/// supply their own synchronization.
pub enum RandomGenerator<D: Digest> {
    /// Marsaglia's multiply-with-carry generator.
    Mother(Mother),
    /// Mersenne Twister (MT19937).
    Mt19937(MersenneTwister),
    /// Marsaglia's 2003 Xorshift128 variant.
    Xorshift128(Xorshift128),
    /// OS-provided entropy, refilled on demand from a kernel CSPRNG.
    OsEntropy(OsEntropy),
    /// TLS 1.0-1.2 P_hash(HMAC-D) streaming generator over digest `D`.
    TlsPrf(TlsPrf<D>),
}

impl<D: Digest> RandomGenerator<D> {
    /// Produces the next 32-bit word from the underlying generator.
    pub fn next_u32(&mut self) -> u32 {
        match self {
            RandomGenerator::Mother(g) => g.next_u32(),
            RandomGenerator::Mt19937(g) => g.next_u32(),
            RandomGenerator::Xorshift128(g) => g.next_u32(),
            RandomGenerator::OsEntropy(g) => g.next_u32(),
            RandomGenerator::TlsPrf(g) => g.next_u32(),
        }
    }

    /// Fills `out` with generator output, word at a time.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;
        while offset < out.len() {
            let word = self.next_u32().to_le_bytes();
            let n = word.len().min(out.len() - offset);
            out[offset..offset + n].copy_from_slice(&word[..n]);
            offset += n;
        }
    }

    /// Draws a uniformly distributed index in `0..bound` by rejection
    /// sampling over 32-bit words, avoiding modulo bias.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let limit = u32::MAX - (u32::MAX % bound);
        loop {
            let v = self.next_u32();
            if v < limit {
                return v % bound;
            }
        }
    }
}

/// Optional state persistence, implemented only by generators whose state
/// is meaningfully saveable (the ambient, PRNG-internal ones; OS entropy and
/// TLS-PRF do not support this since their "state" is either external or
/// derived from a running key-exchange).
pub trait StatefulGenerator {
    /// Serializes internal state to an opaque, implementation-defined blob.
    fn save_state(&self) -> Vec<u8>;
    /// Restores internal state from a blob produced by [`save_state`].
    ///
    /// [`save_state`]: StatefulGenerator::save_state
    fn load_state(&mut self, blob: &[u8]) -> Result<(), crate::error::CoreError>;
}
