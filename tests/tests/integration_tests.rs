//! Integration tests for the typed signature and key agreement APIs

use dcurve::prelude::*;
use dcurve_api::SignatureDerive;
use rand::rngs::OsRng;

#[test]
fn test_ed25519_signature() {
    let mut rng = OsRng;

    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let message = b"Test message for Ed25519 signature";
    let signature = Ed25519::sign(message, &secret_key).unwrap();
    assert!(Ed25519::verify(message, &signature, &public_key).is_ok());

    let modified_message = b"Modified message that should not verify";
    let result = Ed25519::verify(modified_message, &signature, &public_key);
    assert!(matches!(result, Err(Error::InvalidSignature { .. })));
}

#[test]
fn test_ed25519_secret_key_roundtrip() {
    let mut rng = OsRng;
    let (public_key, secret_key) = Ed25519::keypair(&mut rng).unwrap();

    let bytes = secret_key.to_bytes();
    let restored = Ed25519SecretKey::from_bytes(&bytes[..]).unwrap();
    assert_eq!(restored.public_key(), public_key);

    let mut mismatched = *bytes;
    mismatched[40] ^= 1;
    assert!(matches!(
        Ed25519SecretKey::from_bytes(&mismatched),
        Err(Error::InvalidKey { .. })
    ));
}

#[test]
fn test_ed25519_derive_from_seed() {
    let seed = [0x5au8; 32];
    let (public_key, secret_key) = Ed25519::derive_keypair(&seed).unwrap();
    assert_eq!(Ed25519::derive_public_key(&secret_key).unwrap(), public_key);

    let (raw_public, raw_private) = dcurve::generate_ed25519_keypair_from_seed(&seed);
    assert_eq!(public_key.to_bytes(), raw_public);
    assert_eq!(*secret_key.to_bytes(), raw_private);

    assert!(matches!(
        Ed25519::derive_keypair(&seed[..16]),
        Err(Error::InvalidLength { .. })
    ));
}

#[test]
fn test_x25519_key_agreement() {
    let mut rng = OsRng;

    let (alice_pk, alice_sk) = X25519::keypair(&mut rng).unwrap();
    let (bob_pk, bob_sk) = X25519::keypair(&mut rng).unwrap();

    let alice_shared = X25519::agree(&alice_sk, &bob_pk).unwrap();
    let bob_shared = X25519::agree(&bob_sk, &alice_pk).unwrap();
    assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());

    let (carol_pk, _) = X25519::keypair(&mut rng).unwrap();
    let other = X25519::agree(&alice_sk, &carol_pk).unwrap();
    assert_ne!(alice_shared.as_bytes(), other.as_bytes());
}

#[test]
fn test_x25519_low_order_peer_rejected() {
    let mut rng = OsRng;
    let (_, secret) = X25519::keypair(&mut rng).unwrap();

    let mut one = [0u8; 32];
    one[0] = 1;
    for peer in [[0u8; 32], one] {
        let peer = X25519PublicKey::from_bytes(&peer).unwrap();
        let err = X25519::agree(&secret, &peer).unwrap_err();
        assert_eq!(err.to_string(), "X25519: key agreement produced the all-zero value");
    }
}

#[test]
fn test_error_context_and_lengths() {
    let err = X25519PublicKey::from_bytes(&[0u8; 31]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "X25519PublicKey::from_bytes: invalid length (expected 32, got 31)"
    );
    let err = err.with_context("handshake");
    assert!(err.to_string().starts_with("handshake:"));
}
