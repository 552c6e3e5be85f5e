//! Test-only concrete implementations of the `Digest`/`BlockCipher` traits,
//! wrapping the `sha2` dev-dependency. Not part of the shipped API: this
//! crate never implements a hash function itself, but its own test
//! suite needs *some* concrete digest to drive RSA/ECDSA/EdDSA sign-verify
//! round trips and the PRNG's TLS-PRF variant.

use crate::cipher::BlockCipher;
use crate::digest::Digest;
use sha2::{Sha256, Sha512, Digest as _};

/// SHA-256 wrapper satisfying this crate's `Digest` trait, test-only.
#[derive(Clone)]
pub struct TestSha256(Sha256);

impl Digest for TestSha256 {
    const OUTPUT_SIZE: usize = 32;

    fn new() -> Self {
        TestSha256(Sha256::new())
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(&mut self.0, data);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

/// Trivial reversible XOR-CBC cipher, test-only: this crate never ships a
/// block cipher, so PBES1/PBES2/DEK-Info round-trip tests need some
/// concrete implementation to drive the CBC chaining and key-schedule
/// plumbing, even one with no real security property of its own.
#[derive(Clone)]
pub struct TestCipher(Vec<u8>);

impl BlockCipher for TestCipher {
    const KEY_SIZE: usize = 16;
    const BLOCK_SIZE: usize = 8;

    fn new(key: &[u8]) -> Self {
        TestCipher(key.to_vec())
    }

    fn decrypt_cbc(&self, iv: &[u8], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        let mut prev = iv.to_vec();
        for block in data.chunks(Self::BLOCK_SIZE) {
            let transformed = xor_with_key(block, &self.0);
            let plain: Vec<u8> = transformed.iter().zip(prev.iter()).map(|(a, b)| a ^ b).collect();
            out.extend_from_slice(&plain);
            prev = block.to_vec();
        }
        out
    }

    fn encrypt_cbc(&self, iv: &[u8], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        let mut prev = iv.to_vec();
        for block in data.chunks(Self::BLOCK_SIZE) {
            let mixed: Vec<u8> = block.iter().zip(prev.iter()).map(|(a, b)| a ^ b).collect();
            let cipher_block = xor_with_key(&mixed, &self.0);
            out.extend_from_slice(&cipher_block);
            prev = cipher_block;
        }
        out
    }
}

fn xor_with_key(block: &[u8], key: &[u8]) -> Vec<u8> {
    block.iter().enumerate().map(|(i, b)| b ^ key[i % key.len()]).collect()
}

/// 16-byte-output test digest, test-only: stands in for MD5's output width
/// where a test needs to drive the legacy `DEK-Info` derivation (which
/// requires `D::OUTPUT_SIZE == 16`) without this crate shipping MD5 itself.
#[derive(Clone)]
pub struct TestDigest128(Sha256);

impl Digest for TestDigest128 {
    const OUTPUT_SIZE: usize = 16;

    fn new() -> Self {
        TestDigest128(Sha256::new())
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(&mut self.0, data);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize()[..16].to_vec()
    }
}

/// SHA-512 wrapper satisfying this crate's `Digest` trait, test-only.
#[derive(Clone)]
pub struct TestSha512(Sha512);

impl Digest for TestSha512 {
    const OUTPUT_SIZE: usize = 64;

    fn new() -> Self {
        TestSha512(Sha512::new())
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(&mut self.0, data);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}
