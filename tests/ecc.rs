mod common;

use common::{hex, TestSha256, TestSha512};
use nebula_pkcore::asn1::shapes::{encode_sec1_ec_private_key, parse_sec1_ec_private_key};
use nebula_pkcore::curve::montgomery::{self, MontgomeryId};
use nebula_pkcore::curve::params::SECP256R1;
use nebula_pkcore::curve::CurveId;
use nebula_pkcore::digest::Digest;
use nebula_pkcore::ecc::{ecdh, ecdsa, eddsa, EccKey};
use nebula_pkcore::prng::{Mother, RandomGenerator};

fn rng() -> RandomGenerator<TestSha256> {
    RandomGenerator::Mother(Mother::new(0xE11C_0001))
}

#[test]
fn p256_ecdsa_sign_verify_round_trips_through_sec1_der() {
    let mut r = rng();
    let key = EccKey::generate(CurveId::Secp256r1, &mut r).unwrap();

    let der = encode_sec1_ec_private_key(&key).unwrap();
    let reloaded = parse_sec1_ec_private_key(&der, CurveId::Secp256r1).unwrap();
    assert_eq!(reloaded.private, key.private);
    assert_eq!(reloaded.public, key.public);

    let h = TestSha256::digest(b"a message worth signing");
    let sig = ecdsa::sign::<TestSha256>(reloaded.private.as_ref().unwrap(), &h, &SECP256R1, None).unwrap();
    assert!(ecdsa::verify(&h, &sig, &reloaded.public, &SECP256R1));
}

#[test]
fn ecdh_shared_secret_agrees_across_sec1_reload() {
    let mut r = rng();
    let alice = EccKey::generate(CurveId::Secp256r1, &mut r).unwrap();
    let bob = EccKey::generate(CurveId::Secp256r1, &mut r).unwrap();

    let bob_der = encode_sec1_ec_private_key(&bob).unwrap();
    let bob_reloaded = parse_sec1_ec_private_key(&bob_der, CurveId::Secp256r1).unwrap();

    let from_alice = ecdh::shared_secret(alice.private.as_ref().unwrap(), &bob_reloaded.public, &SECP256R1).unwrap();
    let from_bob = ecdh::shared_secret(bob_reloaded.private.as_ref().unwrap(), &alice.public, &SECP256R1).unwrap();
    assert_eq!(from_alice, from_bob);
}

#[test]
fn ed25519_sign_verify_round_trips_across_many_seeds() {
    for byte in [0x00u8, 0x01, 0x42, 0x7f, 0xaa, 0xff] {
        let key = eddsa::Ed25519Key::from_seed::<TestSha512>([byte; 32]).unwrap();
        let message = b"a message worth signing, repeated per seed";
        let sig = key.sign::<TestSha512>(message).unwrap();
        assert!(eddsa::verify::<TestSha512>(&key.public_key(), message, &sig));
    }
}

#[test]
fn ed25519_rejects_a_flipped_signature_byte() {
    let key = eddsa::Ed25519Key::from_seed::<TestSha512>([0x11; 32]).unwrap();
    let message = b"flip a bit, break a signature";
    let mut sig = key.sign::<TestSha512>(message).unwrap();
    sig[0] ^= 0x01;
    assert!(!eddsa::verify::<TestSha512>(&key.public_key(), message, &sig));
}

#[test]
fn ed25519_rejects_a_signature_from_a_different_key() {
    let key_a = eddsa::Ed25519Key::from_seed::<TestSha512>([0x01; 32]).unwrap();
    let key_b = eddsa::Ed25519Key::from_seed::<TestSha512>([0x02; 32]).unwrap();
    let message = b"whose key signed this?";
    let sig = key_a.sign::<TestSha512>(message).unwrap();
    assert!(!eddsa::verify::<TestSha512>(&key_b.public_key(), message, &sig));
}

#[test]
fn x25519_diffie_hellman_is_symmetric_and_deterministic() {
    let alice_scalar = montgomery::clamp_scalar(MontgomeryId::X25519, &[0x11; 32]);
    let bob_scalar = montgomery::clamp_scalar(MontgomeryId::X25519, &[0x22; 32]);

    let alice_public = montgomery::x_function_base(MontgomeryId::X25519, &alice_scalar);
    let bob_public = montgomery::x_function_base(MontgomeryId::X25519, &bob_scalar);

    let shared_from_alice = montgomery::x_function(MontgomeryId::X25519, &alice_scalar, &bob_public);
    let shared_from_bob = montgomery::x_function(MontgomeryId::X25519, &bob_scalar, &alice_public);
    assert_eq!(shared_from_alice, shared_from_bob);

    let encoded = montgomery::encode_u(MontgomeryId::X25519, &shared_from_alice);
    assert_eq!(encoded.len(), 32);
    assert_eq!(montgomery::decode_u(&encoded), shared_from_alice);
}

#[test]
fn x448_diffie_hellman_is_symmetric_and_deterministic() {
    let alice_scalar = montgomery::clamp_scalar(MontgomeryId::X448, &[0x33; 56]);
    let bob_scalar = montgomery::clamp_scalar(MontgomeryId::X448, &[0x44; 56]);

    let alice_public = montgomery::x_function_base(MontgomeryId::X448, &alice_scalar);
    let bob_public = montgomery::x_function_base(MontgomeryId::X448, &bob_scalar);

    let shared_from_alice = montgomery::x_function(MontgomeryId::X448, &alice_scalar, &bob_public);
    let shared_from_bob = montgomery::x_function(MontgomeryId::X448, &bob_scalar, &alice_public);
    assert_eq!(shared_from_alice, shared_from_bob);

    let encoded = montgomery::encode_u(MontgomeryId::X448, &shared_from_alice);
    assert_eq!(encoded.len(), 56);
}

/// RFC 7748 section 6.1's X25519 Diffie-Hellman example, known-answer
/// private keys, public keys, and shared secret.
#[test]
fn x25519_matches_the_rfc_7748_diffie_hellman_example() {
    let alice_private = hex("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob_private = hex("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
    let expected_alice_public = hex("a0e1a5c720fa1adad858c05b7e02cab912f59bf95abe4fe0db47c234dd2b2c21");
    let expected_bob_public = hex("87b3ccf50ce25da6ab7053e68c6eb5f7ea0969b51df6b84c60cdd7be15798404");
    let expected_shared = hex("168579f5ac2414fe251e1365ec6c64d02d951a503a27dabeea6908da4e24f109");

    let alice_scalar = montgomery::clamp_scalar(MontgomeryId::X25519, &alice_private);
    let bob_scalar = montgomery::clamp_scalar(MontgomeryId::X25519, &bob_private);

    let alice_public = montgomery::x_function_base(MontgomeryId::X25519, &alice_scalar);
    let bob_public = montgomery::x_function_base(MontgomeryId::X25519, &bob_scalar);
    assert_eq!(montgomery::encode_u(MontgomeryId::X25519, &alice_public), expected_alice_public);
    assert_eq!(montgomery::encode_u(MontgomeryId::X25519, &bob_public), expected_bob_public);

    let shared_from_alice = montgomery::x_function(MontgomeryId::X25519, &alice_scalar, &bob_public);
    let shared_from_bob = montgomery::x_function(MontgomeryId::X25519, &bob_scalar, &alice_public);
    assert_eq!(shared_from_alice, shared_from_bob);
    assert_eq!(montgomery::encode_u(MontgomeryId::X25519, &shared_from_alice), expected_shared);
}

/// RFC 7748 section 6.2's X448 Diffie-Hellman example, known-answer private
/// keys, public keys, and shared secret.
#[test]
fn x448_matches_the_rfc_7748_diffie_hellman_example() {
    let alice_private = hex(
        "9a8f4925d1519f5775cf46b04b5800d4ee9ee8bae8bc5565d498c28dd9c9baf574a9419744897391006382a6f127ab1d9ac2d8c0a598726b",
    );
    let bob_private = hex(
        "1c306a7ac2a0e2e0990b294470cba339e6453772b075811d8fad0d1d6927c120bb5ee8972b0d3e21374c9c921b09d1b0366f10b65173992d",
    );
    let expected_alice_public = hex(
        "f9e60c4f68e01bc3c913c53f6d52efa73d49ef91a519e83266aa9d6f9af2091663efbdf79a01597c446cc2fbeb32da9b663273651cb00170",
    );
    let expected_bob_public = hex(
        "38475a2a6de13fcca293e78150a3b0144b504543e5196c4710186fe05e0863854224184a5a02d20d6ed51da965389ba69300164d367102e8",
    );
    let expected_shared = hex(
        "8bac1028804712ead5b64ce695dc08fb1432cb5f71faf0eca71f0dd5bfdd1d0b4bb7bb0307669f89f18d7845c7e35dc9c79f23b837f63cd4",
    );

    let alice_scalar = montgomery::clamp_scalar(MontgomeryId::X448, &alice_private);
    let bob_scalar = montgomery::clamp_scalar(MontgomeryId::X448, &bob_private);

    let alice_public = montgomery::x_function_base(MontgomeryId::X448, &alice_scalar);
    let bob_public = montgomery::x_function_base(MontgomeryId::X448, &bob_scalar);
    assert_eq!(montgomery::encode_u(MontgomeryId::X448, &alice_public), expected_alice_public);
    assert_eq!(montgomery::encode_u(MontgomeryId::X448, &bob_public), expected_bob_public);

    let shared_from_alice = montgomery::x_function(MontgomeryId::X448, &alice_scalar, &bob_public);
    let shared_from_bob = montgomery::x_function(MontgomeryId::X448, &bob_scalar, &alice_public);
    assert_eq!(shared_from_alice, shared_from_bob);
    assert_eq!(montgomery::encode_u(MontgomeryId::X448, &shared_from_alice), expected_shared);
}
