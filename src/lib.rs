//! Multi-precision integer arithmetic and public-key cryptography primitives.
//!
//! This crate provides the numeric core underneath RSA, ECDSA/ECDH/EdDSA and
//! the ASN.1/PEM key formats that carry them: an arbitrary-precision signed
//! integer type, a pluggable pseudo-random generator framework, prime
//! generation and testing, a named-curve registry, and DER/PEM key codecs.
//!
//! The focus is on explicit, auditable semantics over raw throughput. Hash
//! functions and symmetric ciphers are deliberately out of scope: the
//! [`digest::Digest`] and [`cipher::BlockCipher`] traits are the seams where
//! callers plug in their own, and the crate's own tests use thin wrappers
//! around `sha2` (see [`testutil`]) rather than shipping real ones.
//!
//! # Module overview
//!
//! - [`mp_int`] — signed-magnitude multi-precision integers and their
//!   modular arithmetic (`mulmod`, `exptmod`, `invmod`, ...).
//! - [`prng`] — the [`prng::RandomGenerator`] sum type over four classical
//!   generator algorithms plus a TLS P_hash stream and OS entropy.
//! - [`primes`] — small-prime sieve, Miller-Rabin primality, and
//!   quality/DSA-style prime generation.
//! - [`curve`] — the short-Weierstrass and Montgomery curve registries.
//! - [`ecc`] — ECDSA, ECDH and Ed25519 built on [`curve`] and [`mp_int`].
//! - [`rsa`] — RSA key generation, PKCS#1 v1.5 padding, blinded private-key
//!   operations and DigestInfo-wrapped signatures.
//! - [`asn1`] — DER encoding/parsing, PEM armoring, and the PKCS#8/PKCS#1/
//!   SEC1 key shapes that tie RSA and ECC keys to a wire format.
//! - [`digest`] / [`cipher`] — the hash and block-cipher trait boundaries.
//! - [`error`] — shared error types (`CoreError`, `KeyLoadError`).
//!
//! # Design goals
//!
//! - Explicit, well-defined semantics over every arithmetic operation.
//! - No hidden global state beyond what a PRNG or blinding counter needs.
//! - Clear separation between the numeric core and the key/format layers
//!   built on top of it.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries; it is a small, controlled foundation for
//! building protocol code on top of explicit bignum, curve and padding
//! primitives.

pub mod asn1;
pub mod cipher;
pub mod curve;
pub mod digest;
pub mod ecc;
pub mod error;
pub mod mp_int;
pub(crate) mod os;
pub mod primes;
pub mod prng;
pub mod rsa;

#[cfg(test)]
pub(crate) mod testutil;
