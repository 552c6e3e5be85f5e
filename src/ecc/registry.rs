//! Signature-algorithm registry: maps an algorithm identity to its OID,
//! human name, and backing hash, with lookup by any of the three plus by
//! DER-encoded OID bytes. This table, not `digest::DigestAlgorithm`, is the
//! single source of truth for ECDSA/EdDSA signature-algorithm OIDs.

use crate::asn1::der::encode_oid;
use crate::digest::DigestAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithmId {
    EcdsaSha1,
    EcdsaSha224,
    EcdsaSha256,
    EcdsaSha384,
    EcdsaSha512,
    Ed25519,
    Ed448,
}

pub struct SignatureAlgorithmEntry {
    pub id: SignatureAlgorithmId,
    pub name: &'static str,
    pub oid: &'static [u32],
    pub hash: Option<DigestAlgorithm>,
}

const REGISTRY: &[SignatureAlgorithmEntry] = &[
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::EcdsaSha1,
        name: "ecdsa-with-SHA1",
        oid: &[1, 2, 840, 10045, 4, 1],
        hash: Some(DigestAlgorithm::Sha1),
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::EcdsaSha224,
        name: "ecdsa-with-SHA224",
        oid: &[1, 2, 840, 10045, 4, 3, 1],
        hash: Some(DigestAlgorithm::Sha224),
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::EcdsaSha256,
        name: "ecdsa-with-SHA256",
        oid: &[1, 2, 840, 10045, 4, 3, 2],
        hash: Some(DigestAlgorithm::Sha256),
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::EcdsaSha384,
        name: "ecdsa-with-SHA384",
        oid: &[1, 2, 840, 10045, 4, 3, 3],
        hash: Some(DigestAlgorithm::Sha384),
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::EcdsaSha512,
        name: "ecdsa-with-SHA512",
        oid: &[1, 2, 840, 10045, 4, 3, 4],
        hash: Some(DigestAlgorithm::Sha512),
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::Ed25519,
        name: "Ed25519",
        oid: &[1, 3, 101, 112],
        hash: None,
    },
    SignatureAlgorithmEntry {
        id: SignatureAlgorithmId::Ed448,
        name: "Ed448",
        oid: &[1, 3, 101, 113],
        hash: None,
    },
];

pub fn by_id(id: SignatureAlgorithmId) -> &'static SignatureAlgorithmEntry {
    REGISTRY.iter().find(|e| e.id == id).expect("every variant has a registry entry")
}

pub fn by_name(name: &str) -> Option<&'static SignatureAlgorithmEntry> {
    REGISTRY.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn by_oid(oid: &[u32]) -> Option<&'static SignatureAlgorithmEntry> {
    REGISTRY.iter().find(|e| e.oid == oid)
}

pub fn by_der_oid(der: &[u8]) -> Option<&'static SignatureAlgorithmEntry> {
    REGISTRY.iter().find(|e| encode_oid(e.oid) == der)
}
