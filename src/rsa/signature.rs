//! DigestInfo-wrapped RSA signatures: sign wraps the message hash in
//! `SEQUENCE { SEQUENCE { OID, NULL }, OCTET STRING hash }`, pads as PKCS#1
//! v1.5 type 1, and raises to `d`; verify reverses every step and compares.

use crate::asn1::der::{self, DerReader};
use crate::digest::DigestAlgorithm;
use crate::prng::RandomGenerator;
use crate::rsa::{pkcs1, BlockType, RsaError, RsaKey};
use crate::digest::Digest;

fn build_digest_info(alg: DigestAlgorithm, hash: &[u8]) -> Vec<u8> {
    let alg_id = der::encode_sequence(&[der::encode_oid(alg.digest_oid()), der::encode_null()]);
    der::encode_sequence(&[alg_id, der::encode_octet_string(hash)])
}

fn parse_digest_info(bytes: &[u8]) -> Result<(DigestAlgorithm, Vec<u8>), RsaError> {
    let mut reader = DerReader::new(bytes);
    let outer = reader.read_element().map_err(|_| RsaError::BadPadding)?;
    let children = outer.children().map_err(|_| RsaError::BadPadding)?;
    if children.len() != 2 {
        return Err(RsaError::BadPadding);
    }
    let alg_children = children[0].children().map_err(|_| RsaError::BadPadding)?;
    let oid = alg_children.first().ok_or(RsaError::BadPadding)?.as_oid().map_err(|_| RsaError::BadPadding)?;
    let alg = oid_to_algorithm(&oid).ok_or(RsaError::BadPadding)?;
    Ok((alg, children[1].value.to_vec()))
}

fn oid_to_algorithm(oid: &[u32]) -> Option<DigestAlgorithm> {
    const ALL: &[DigestAlgorithm] = &[
        DigestAlgorithm::Md2,
        DigestAlgorithm::Md4,
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];
    ALL.iter().copied().find(|a| a.digest_oid() == oid)
}

/// Builds the outer `SEQUENCE { <hash>WithRSAEncryption OID, NULL }`
/// AlgorithmIdentifier for a signature produced by [`sign`] — the piece a
/// caller needs when it embeds that signature in a larger DER structure
/// (a certificate, a CMS `SignerInfo`) that names its own algorithm rather
/// than relying on the inner DigestInfo.
pub fn encode_signature_algorithm_identifier(alg: DigestAlgorithm) -> Vec<u8> {
    der::encode_sequence(&[der::encode_oid(alg.rsa_signature_oid()), der::encode_null()])
}

/// Recovers a [`DigestAlgorithm`] from a signature AlgorithmIdentifier OID,
/// accepting either the modern `...withRSAEncryption` arc or the legacy OIW
/// `...WithRSASignature` arc some older CAs still emit.
pub fn rsa_signature_algorithm_from_oid(oid: &[u32]) -> Option<DigestAlgorithm> {
    const ALL: &[DigestAlgorithm] = &[
        DigestAlgorithm::Md2,
        DigestAlgorithm::Md4,
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];
    ALL.iter().copied().find(|a| a.rsa_signature_oid() == oid || a.rsa_signature_oiw_oid() == Some(oid))
}

/// Signs `message` under digest algorithm `alg`: hash it with `D`, wrap in
/// DigestInfo, PKCS#1 v1.5 type-1 pad, raise to `d`.
pub fn sign<D: Digest>(
    key: &RsaKey,
    alg: DigestAlgorithm,
    message: &[u8],
    rng: &mut RandomGenerator<D>,
) -> Result<Vec<u8>, RsaError> {
    let hash = D::digest(message);
    let digest_info = build_digest_info(alg, &hash);
    let padded = pkcs1::encode(&digest_info, key.byte_len(), BlockType::PrivateSign, rng)?;
    let signed = key.private_op(&padded, rng)?;
    signed.to_bytes_be_exact(key.byte_len()).map_err(RsaError::from)
}

/// Verifies a DigestInfo-wrapped signature: raise to `e`, strip type-1
/// padding, parse DigestInfo, recompute the message hash, and compare both
/// the declared algorithm and the hash bytes.
pub fn verify<D: Digest>(key: &RsaKey, alg: DigestAlgorithm, message: &[u8], signature: &[u8]) -> Result<(), RsaError> {
    let sig_value = crate::mp_int::MpInt::from_bytes_be(signature);
    let raised = key.public_op(&sig_value)?;
    let digest_info_bytes = pkcs1::decode(&raised, key.byte_len(), BlockType::PrivateSign)?;
    let (declared_alg, declared_hash) = parse_digest_info(&digest_info_bytes)?;
    if declared_alg != alg {
        return Err(RsaError::VerifyFailed);
    }
    let actual_hash = D::digest(message);
    if actual_hash != declared_hash {
        return Err(RsaError::VerifyFailed);
    }
    Ok(())
}
