//! RFC 8032 and RFC 7748 known-answer tests through the public facade

use dcurve::prelude::*;
use dcurve_tests::vectors::{self, x25519_dh, ED25519_RFC8032, X25519_RFC7748};
use dcurve_tests::{available_backends, hex32, hex64};

#[test]
fn test_ed25519_rfc8032_vectors() {
    for v in ED25519_RFC8032.iter() {
        let seed = hex32(v.seed);
        let message = hex::decode(v.message).unwrap();
        let expected_public = hex32(v.public);
        let expected_signature = hex64(v.signature);

        let (public, private) = dcurve::generate_ed25519_keypair_from_seed(&seed);
        assert_eq!(public, expected_public, "{}: public key", v.name);
        assert_eq!(&private[..32], &seed[..], "{}: private seed half", v.name);
        assert_eq!(&private[32..], &expected_public[..], "{}: private public half", v.name);

        let signature = dcurve::ed25519_sign(&message, &private);
        assert_eq!(signature, expected_signature, "{}: signature", v.name);
        assert!(dcurve::ed25519_verify(&message, &signature, &public), "{}", v.name);
    }
}

#[test]
fn test_ed25519_rfc8032_vectors_typed() {
    for v in ED25519_RFC8032.iter() {
        let message = hex::decode(v.message).unwrap();
        let secret = Ed25519SecretKey::from_seed(&hex32(v.seed));
        let public = secret.public_key();
        assert_eq!(public.to_bytes(), hex32(v.public), "{}", v.name);

        let signature = Ed25519::sign(&message, &secret).unwrap();
        assert_eq!(signature.0, hex64(v.signature), "{}", v.name);
        assert!(Ed25519::verify(&message, &signature, &public).is_ok(), "{}", v.name);
    }
}

#[test]
fn test_ed25519_vector_rejects_modified_message() {
    let v = &ED25519_RFC8032[2];
    let signature = hex64(v.signature);
    let public = hex32(v.public);
    assert!(!dcurve::ed25519_verify(&[0xaf, 0x83], &signature, &public));
    assert!(!dcurve::ed25519_verify(&[0xaf], &signature, &public));
}

#[test]
fn test_x25519_rfc7748_vectors() {
    for (scalar, u, expected) in X25519_RFC7748.iter() {
        let (shared, ok) = dcurve::x25519(&hex32(scalar), &hex32(u));
        assert!(ok);
        assert_eq!(shared, hex32(expected));
    }
}

#[test]
fn test_x25519_rfc7748_diffie_hellman() {
    let alice = hex32(x25519_dh::ALICE_PRIVATE);
    let bob = hex32(x25519_dh::BOB_PRIVATE);
    let alice_public = hex32(x25519_dh::ALICE_PUBLIC);
    let bob_public = hex32(x25519_dh::BOB_PUBLIC);
    let shared = hex32(x25519_dh::SHARED);

    assert_eq!(dcurve::x25519_public_from_private(&alice), alice_public);
    assert_eq!(dcurve::x25519_public_from_private(&bob), bob_public);
    assert_eq!(dcurve::x25519(&alice, &bob_public), (shared, true));
    assert_eq!(dcurve::x25519(&bob, &alice_public), (shared, true));

    let alice_sk = X25519SecretKey::from_bytes(&alice).unwrap();
    let bob_pk = X25519PublicKey::from_bytes(&bob_public).unwrap();
    let k = X25519::agree(&alice_sk, &bob_pk).unwrap();
    assert_eq!(*k.as_bytes(), shared);
}

#[test]
fn test_x25519_rfc7748_every_backend() {
    use dcurve::kem::ecdh::x25519::{x25519_public_from_private_with_backend, x25519_with_backend};

    let alice = hex32(x25519_dh::ALICE_PRIVATE);
    let bob_public = hex32(x25519_dh::BOB_PUBLIC);
    for backend in available_backends() {
        assert_eq!(
            x25519_public_from_private_with_backend(backend, &alice),
            hex32(x25519_dh::ALICE_PUBLIC),
            "backend {}",
            backend
        );
        assert_eq!(
            x25519_with_backend(backend, &alice, &bob_public),
            (hex32(x25519_dh::SHARED), true),
            "backend {}",
            backend
        );
        for (scalar, u, expected) in X25519_RFC7748.iter() {
            assert_eq!(
                x25519_with_backend(backend, &hex32(scalar), &hex32(u)),
                (hex32(expected), true),
                "backend {}",
                backend
            );
        }
    }
}

#[test]
fn test_x25519_iterated() {
    let mut k = [0u8; 32];
    k[0] = 9;
    let mut u = k;
    for round in 1..=1000 {
        let (out, _) = dcurve::x25519(&k, &u);
        u = k;
        k = out;
        if round == 1 {
            assert_eq!(k, hex32(vectors::X25519_ITERATED_1));
        }
    }
    assert_eq!(k, hex32(vectors::X25519_ITERATED_1000));
}
