use nebula_pkcore::cipher::BlockCipher;
use nebula_pkcore::digest::Digest;
use sha2::{Digest as _, Sha256, Sha512};

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

/// Trivial reversible XOR-CBC cipher, test-only (mirrors `src/testutil.rs`,
/// duplicated here since integration tests cannot see `#[cfg(test)]` items
/// of the library crate).
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

/// Decodes a hex literal from a test vector into raw bytes.
#[allow(dead_code)]
pub fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
