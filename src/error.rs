//! Common error kinds shared across the cryptographic core.
//!
//! Every fallible operation in this crate ultimately bottoms out in one of
//! the kinds below. Higher-level modules (`rsa`, `asn1`, `ecc`) wrap these in
//! their own narrower error enums rather than exposing `CoreError` directly,
//! so callers matching on e.g. `rsa::RsaError` are not forced to handle
//! ASN.1-only variants.

use thiserror::Error;

/// The error kinds an `mp_int` or arithmetic-adjacent operation can fail with.
///
/// Success is represented by `Result::Ok` and is intentionally not a variant
/// here; only failure kinds get a name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// Allocation of additional digits failed.
    #[error("out of memory")]
    OutOfMemory,
    /// Divide by zero, negative modulus, or a buffer too small for the value.
    #[error("range error")]
    Range,
    /// A required argument was null, empty, or otherwise malformed.
    #[error("bad argument")]
    BadArgument,
    /// The requested quantity does not exist (e.g. no modular inverse).
    #[error("undefined result")]
    Undefined,
    /// The operand or result exceeds a configured size limit.
    #[error("value too big")]
    TooBig,
}

/// The coarse, API-boundary failure states for key-load operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyLoadError {
    /// The input could not be opened or read.
    #[error("cannot open key material")]
    CannotOpen,
    /// The DER/PEM framing was malformed.
    #[error("parse error")]
    ParseError,
    /// The algorithm named by the key material is not supported.
    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,
    /// The key material is encrypted and no passphrase was supplied.
    #[error("encrypted key needs a password")]
    EncryptedNeedsPassword,
    /// The loaded key failed its internal consistency check.
    #[error("key verification failed")]
    VerifyFailed,
}
