//! Property-based tests for Ed25519 and X25519

use dcurve::prelude::{Error, KeyAgreement, X25519PublicKey, X25519SecretKey, X25519};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ed25519_sign_then_verify(seed in any::<[u8; 32]>(), message in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (public, private) = dcurve::generate_ed25519_keypair_from_seed(&seed);
        let signature = dcurve::ed25519_sign(&message, &private);
        prop_assert!(dcurve::ed25519_verify(&message, &signature, &public));
        prop_assert_eq!(signature, dcurve::ed25519_sign(&message, &private));
    }

    #[test]
    fn ed25519_any_signature_bit_flip_rejected(
        seed in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 0..64),
        bit in 0usize..512,
    ) {
        let (public, private) = dcurve::generate_ed25519_keypair_from_seed(&seed);
        let mut signature = dcurve::ed25519_sign(&message, &private);
        signature[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!dcurve::ed25519_verify(&message, &signature, &public));
    }

    #[test]
    fn ed25519_message_change_rejected(
        seed in any::<[u8; 32]>(),
        message in proptest::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let (public, private) = dcurve::generate_ed25519_keypair_from_seed(&seed);
        let signature = dcurve::ed25519_sign(&message, &private);
        let mut tampered = message.clone();
        let i = index.index(tampered.len());
        tampered[i] ^= flip;
        prop_assert!(!dcurve::ed25519_verify(&tampered, &signature, &public));
    }

    #[test]
    fn ed25519_verify_never_panics(
        message in proptest::collection::vec(any::<u8>(), 0..32),
        r in any::<[u8; 32]>(),
        s in any::<[u8; 32]>(),
        public in any::<[u8; 32]>(),
    ) {
        let mut sig = [0u8; 64];
        sig[..32].copy_from_slice(&r);
        sig[32..].copy_from_slice(&s);
        let _ = dcurve::ed25519_verify(&message, &sig, &public);
    }

    #[test]
    fn x25519_agreement_is_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let a_public = dcurve::x25519_public_from_private(&a);
        let b_public = dcurve::x25519_public_from_private(&b);
        let (ab, ok_ab) = dcurve::x25519(&a, &b_public);
        let (ba, ok_ba) = dcurve::x25519(&b, &a_public);
        prop_assert!(ok_ab && ok_ba);
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn x25519_typed_matches_raw(a in any::<[u8; 32]>(), peer in any::<[u8; 32]>()) {
        let secret = X25519SecretKey::from_bytes(&a).unwrap();
        let public = X25519PublicKey::from_bytes(&peer).unwrap();
        let (raw, ok) = dcurve::x25519(&a, &peer);
        match X25519::agree(&secret, &public) {
            Ok(shared) => {
                prop_assert!(ok);
                prop_assert_eq!(*shared.as_bytes(), raw);
            }
            Err(Error::KeyAgreementFailed { .. }) => {
                prop_assert!(!ok);
                prop_assert_eq!(raw, [0u8; 32]);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
