//! TLS 1.0-1.2 P_hash(HMAC-D) construction, wrapped as a streaming generator.
//!
//! Generic over the injected [`Digest`] trait rather than a hard-wired
//! MD5/SHA1/SHA256/SHA384 choice, since hash functions are out of scope for
//! this crate. The internal seed-selection state is a [`Xorshift128`]
//! context: each 32-bit draw mixes two fresh 64-bit seed words and runs one
//! P_hash expansion.

use super::Xorshift128;
use crate::digest::Digest;
use std::marker::PhantomData;

const HMAC_BLOCK_SIZE: usize = 64;
const LABEL: &[u8] = b"tls(\xa3$@^&*)";

fn hmac<D: Digest>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut block_key = vec![0u8; HMAC_BLOCK_SIZE];
    if key.len() > HMAC_BLOCK_SIZE {
        let hashed = D::digest(key);
        block_key[..hashed.len()].copy_from_slice(&hashed);
    } else {
        block_key[..key.len()].copy_from_slice(key);
    }

    let mut ipad = vec![0x36u8; HMAC_BLOCK_SIZE];
    let mut opad = vec![0x5cu8; HMAC_BLOCK_SIZE];
    for i in 0..HMAC_BLOCK_SIZE {
        ipad[i] ^= block_key[i];
        opad[i] ^= block_key[i];
    }

    let mut inner = D::new();
    inner.update(&ipad);
    inner.update(message);
    let inner_digest = inner.finalize();

    let mut outer = D::new();
    outer.update(&opad);
    outer.update(&inner_digest);
    outer.finalize()
}

/// `P_hash(secret, seed)`, emitting exactly `out_len` bytes.
fn p_hash<D: Digest>(secret: &[u8], seed: &[u8], out_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(out_len);
    let mut a = hmac::<D>(secret, seed);
    while out.len() < out_len {
        let mut input = a.clone();
        input.extend_from_slice(seed);
        let chunk = hmac::<D>(secret, &input);
        out.extend_from_slice(&chunk);
        a = hmac::<D>(secret, &a);
    }
    out.truncate(out_len);
    out
}

/// A streaming generator backed by the TLS P_hash construction.
pub struct TlsPrf<D: Digest> {
    seed_source: Xorshift128,
    buffer: Vec<u8>,
    position: usize,
    _digest: PhantomData<D>,
}

impl<D: Digest> TlsPrf<D> {
    /// Seeds the internal Xorshift128 seed-selector from `seed`.
    pub fn new(seed: u32) -> Self {
        TlsPrf { seed_source: Xorshift128::new(seed), buffer: Vec::new(), position: 0, _digest: PhantomData }
    }

    fn refill(&mut self) {
        let seed1 = ((self.seed_source.next_u32() as u64) << 32) | self.seed_source.next_u32() as u64;
        let seed2 = ((self.seed_source.next_u32() as u64) << 32) | self.seed_source.next_u32() as u64;
        self.buffer = p_hash::<D>(&seed1.to_be_bytes(), &[LABEL, &seed2.to_be_bytes()].concat(), 64);
        self.position = 0;
    }

    /// Produces the next 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        if self.position + 4 > self.buffer.len() {
            self.refill();
        }
        let bytes = [
            self.buffer[self.position],
            self.buffer[self.position + 1],
            self.buffer[self.position + 2],
            self.buffer[self.position + 3],
        ];
        self.position += 4;
        u32::from_be_bytes(bytes)
    }
}
