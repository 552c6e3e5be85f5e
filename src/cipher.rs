//! Abstract block-cipher boundary, used only by the legacy PEM DEK-Info
//! decrypt path and PKCS#5 PBES1/PBES2. Symmetric ciphers are out of scope
//! for this crate; callers inject a concrete implementation.

/// A block cipher operating in CBC mode, injected by the caller.
pub trait BlockCipher {
    /// Cipher key size in bytes.
    const KEY_SIZE: usize;
    /// Cipher block size in bytes.
    const BLOCK_SIZE: usize;

    /// Constructs a cipher instance from a fixed-size key.
    fn new(key: &[u8]) -> Self;

    /// Decrypts `data` (a whole number of blocks) in CBC mode using `iv`,
    /// returning the plaintext with PKCS#7 padding still attached.
    fn decrypt_cbc(&self, iv: &[u8], data: &[u8]) -> Vec<u8>;

    /// Encrypts `data` (a whole number of blocks, already padded) in CBC
    /// mode using `iv`.
    fn encrypt_cbc(&self, iv: &[u8], data: &[u8]) -> Vec<u8>;
}
