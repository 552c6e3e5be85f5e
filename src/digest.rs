//! Abstract hash-function boundary.
//!
//! Hash functions are explicitly out of scope for this crate: RSA
//! signatures, EdDSA, ECDSA's deterministic-nonce derivation, and PEM
//! decryption all need to name a hash, but none of them is allowed to ship
//! one. Every one of those call sites is generic over this trait instead,
//! so the concrete hash choice is always the caller's, not this crate's.

/// A streaming cryptographic hash function, injected by the caller.
///
/// Implementations are expected to wrap an existing, audited hash crate
/// (e.g. `sha2`); this trait exists only to give this crate's RSA/ECC/PEM
/// code a name to call, not an implementation to maintain.
pub trait Digest: Clone {
    /// Output size in bytes (e.g. 32 for SHA-256).
    const OUTPUT_SIZE: usize;

    /// Creates a fresh hash state.
    fn new() -> Self;

    /// Feeds more input into the running hash state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hash state and returns the digest.
    fn finalize(self) -> Vec<u8>;

    /// One-shot convenience: hash `data` and return the digest.
    fn digest(data: &[u8]) -> Vec<u8>
    where
        Self: Sized,
    {
        let mut d = Self::new();
        d.update(data);
        d.finalize()
    }
}

/// The fixed hash-OID table consumed by RSA `DigestInfo` signatures and
/// signature AlgorithmIdentifiers. (ECDSA's own `ecdsa-with-<hash>` arc
/// lives in `ecc::registry` instead, which is the single source of truth
/// for ECDSA signature-algorithm identity.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    /// MD2 (legacy; read-only support for old PKCS#8 material).
    Md2,
    /// MD4 (legacy; read-only support for old PKCS#8 material).
    Md4,
    /// MD5 (legacy; read-only support for old PKCS#8 material).
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl DigestAlgorithm {
    /// The `digestAlgorithm` OID arc (used inside DigestInfo / PBES1 params).
    pub fn digest_oid(self) -> &'static [u32] {
        match self {
            DigestAlgorithm::Md2 => &[1, 2, 840, 113549, 2, 2],
            DigestAlgorithm::Md4 => &[1, 2, 840, 113549, 2, 4],
            DigestAlgorithm::Md5 => &[1, 2, 840, 113549, 2, 5],
            DigestAlgorithm::Sha1 => &[1, 3, 14, 3, 2, 26],
            DigestAlgorithm::Sha224 => &[2, 16, 840, 1, 101, 3, 4, 2, 4],
            DigestAlgorithm::Sha256 => &[2, 16, 840, 1, 101, 3, 4, 2, 1],
            DigestAlgorithm::Sha384 => &[2, 16, 840, 1, 101, 3, 4, 2, 2],
            DigestAlgorithm::Sha512 => &[2, 16, 840, 1, 101, 3, 4, 2, 3],
        }
    }

    /// The `...withRSAEncryption` OID arc used by RSA signature AlgorithmIdentifiers.
    pub fn rsa_signature_oid(self) -> &'static [u32] {
        match self {
            DigestAlgorithm::Md2 => &[1, 2, 840, 113549, 1, 1, 2],
            DigestAlgorithm::Md4 => &[1, 2, 840, 113549, 1, 1, 3],
            DigestAlgorithm::Md5 => &[1, 2, 840, 113549, 1, 1, 4],
            DigestAlgorithm::Sha1 => &[1, 2, 840, 113549, 1, 1, 5],
            DigestAlgorithm::Sha224 => &[1, 2, 840, 113549, 1, 1, 14],
            DigestAlgorithm::Sha256 => &[1, 2, 840, 113549, 1, 1, 11],
            DigestAlgorithm::Sha384 => &[1, 2, 840, 113549, 1, 1, 12],
            DigestAlgorithm::Sha512 => &[1, 2, 840, 113549, 1, 1, 13],
        }
    }

    /// The legacy OIW `...WithRSASignature` arc, predating the PKCS#1
    /// `...withRSAEncryption` arc above. Only ever assigned for MD2, MD5 and
    /// SHA1; `None` for every other hash (no OIW entry was ever registered
    /// for SHA224/256/384/512).
    pub fn rsa_signature_oiw_oid(self) -> Option<&'static [u32]> {
        match self {
            DigestAlgorithm::Md2 => Some(&[1, 3, 14, 3, 2, 24]),
            DigestAlgorithm::Md5 => Some(&[1, 3, 14, 3, 2, 25]),
            DigestAlgorithm::Sha1 => Some(&[1, 3, 14, 3, 2, 29]),
            _ => None,
        }
    }

    /// Output size in bytes.
    pub fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Md2 | DigestAlgorithm::Md4 | DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha224 => 28,
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}
