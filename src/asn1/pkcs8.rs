//! PKCS#5/PKCS#8 password-based decryption: PBES1, PBES2 (PBKDF2 + a
//! caller-supplied block cipher), and the legacy OpenSSL `DEK-Info`
//! single-salt key derivation used by old-style encrypted PEM bodies.
//!
//! Every hash and cipher here is the caller's concrete type, injected
//! through this crate's [`Digest`]/[`BlockCipher`] traits — PBES1/PBES2 are
//! key-derivation *shapes* this crate must parse and drive, not a reason to
//! ship MD5/DES/AES itself.

use crate::cipher::BlockCipher;
use crate::digest::Digest;
use crate::error::CoreError;

const HMAC_BLOCK_SIZE: usize = 64;

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

/// PKCS#5 PBKDF2, generic over the HMAC hash.
pub fn pbkdf2<D: Digest>(password: &[u8], salt: &[u8], iterations: u32, key_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(key_len);
    let mut block_index: u32 = 1;
    while out.len() < key_len {
        let mut block_salt = salt.to_vec();
        block_salt.extend_from_slice(&block_index.to_be_bytes());
        let mut u = hmac::<D>(password, &block_salt);
        let mut t = u.clone();
        for _ in 1..iterations {
            u = hmac::<D>(password, &u);
            for (t_byte, u_byte) in t.iter_mut().zip(u.iter()) {
                *t_byte ^= u_byte;
            }
        }
        out.extend_from_slice(&t);
        block_index += 1;
    }
    out.truncate(key_len);
    out
}

/// PBES1 key derivation: `T_1 = Hash(password || salt)`,
/// `T_i = Hash(T_{i-1})`, iterated `count` times; the derived block's first
/// `C::KEY_SIZE` bytes are the key, the next 8 are the IV (PBES1 always
/// targets a DES-family 8-byte-block cipher).
pub fn pbes1_derive<D: Digest, C: BlockCipher>(password: &[u8], salt: &[u8; 8], count: u32) -> (Vec<u8>, Vec<u8>) {
    let mut input = password.to_vec();
    input.extend_from_slice(salt);
    let mut t = D::digest(&input);
    for _ in 1..count {
        t = D::digest(&t);
    }
    let key = t[..C::KEY_SIZE].to_vec();
    let iv = t[C::KEY_SIZE..C::KEY_SIZE + 8].to_vec();
    (key, iv)
}

/// Decrypts PBES1-wrapped ciphertext.
pub fn pbes1_decrypt<D: Digest, C: BlockCipher>(
    password: &[u8],
    salt: &[u8; 8],
    count: u32,
    ciphertext: &[u8],
) -> Vec<u8> {
    let (key, iv) = pbes1_derive::<D, C>(password, salt, count);
    let cipher = C::new(&key);
    cipher.decrypt_cbc(&iv, ciphertext)
}

/// Decrypts PBES2-wrapped ciphertext: PBKDF2-derived key, explicit IV from
/// the AlgorithmIdentifier parameters.
pub fn pbes2_decrypt<D: Digest, C: BlockCipher>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    iv: &[u8],
    ciphertext: &[u8],
) -> Vec<u8> {
    let key = pbkdf2::<D>(password, salt, iterations, C::KEY_SIZE);
    let cipher = C::new(&key);
    cipher.decrypt_cbc(iv, ciphertext)
}

/// Legacy OpenSSL `DEK-Info` key derivation: `key[0..16] = MD5(password ||
/// salt8)`; for ciphers needing more key material, `key[16..] =
/// MD5(key[0..16] || password || salt8)`, repeated until enough bytes are
/// produced. `D` must be MD5 (`OUTPUT_SIZE == 16`); this is the historical
/// OpenSSL `EVP_BytesToKey` scheme with one hash iteration, not PBKDF2.
pub fn legacy_dek_derive<D: Digest>(password: &[u8], salt8: &[u8], key_len: usize) -> Result<Vec<u8>, CoreError> {
    if D::OUTPUT_SIZE != 16 {
        return Err(CoreError::BadArgument);
    }
    let mut key = Vec::with_capacity(key_len);
    let mut prev: Vec<u8> = Vec::new();
    while key.len() < key_len {
        let mut input = prev.clone();
        input.extend_from_slice(password);
        input.extend_from_slice(salt8);
        prev = D::digest(&input);
        key.extend_from_slice(&prev);
    }
    key.truncate(key_len);
    Ok(key)
}

/// Decrypts a legacy `DEK-Info`-encrypted PEM body. The salt doubles as the
/// IV (the header's hex-decoded value), per OpenSSL convention.
pub fn legacy_dek_decrypt<D: Digest, C: BlockCipher>(
    password: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, CoreError> {
    let salt8 = &iv[..8.min(iv.len())];
    let key = legacy_dek_derive::<D>(password, salt8, C::KEY_SIZE)?;
    let cipher = C::new(&key);
    Ok(cipher.decrypt_cbc(iv, ciphertext))
}
