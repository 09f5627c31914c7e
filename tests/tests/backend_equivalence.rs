//! Every available X25519 backend produces identical output

use curve25519_dalek::montgomery::MontgomeryPoint;
use dcurve::algorithms::{capabilities, Arch, Backend, Capabilities, DisableMask};
use dcurve::kem::ecdh::x25519::{x25519_public_from_private_with_backend, x25519_with_backend};
use dcurve_tests::available_backends;
use proptest::prelude::*;

#[test]
fn test_preferred_backend_matches_detected_capabilities() {
    let expected = Backend::select(Arch::current(), capabilities()).unwrap_or(Backend::Portable);
    assert_eq!(Backend::preferred(), expected);
}

#[test]
fn test_disable_mask_only_removes_capabilities() {
    let all = Capabilities::new(true, true);
    let masked = all.without(DisableMask::parse("wide"));
    assert!(!masked.supports_wide_multiplier());
    assert!(masked.supports_standard());

    let none = Capabilities::none().without(DisableMask::parse("standard,wide"));
    assert_eq!(none, Capabilities::none());
}

#[test]
fn test_default_build_always_has_a_backend() {
    // dcurve-algorithms is pulled in with default features, so portable is compiled
    assert!(Backend::Portable.is_available());
    assert!(Backend::preferred().is_available());
    assert!(available_backends().contains(&Backend::preferred()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn backends_agree_on_arbitrary_input(scalar in any::<[u8; 32]>(), u in any::<[u8; 32]>()) {
        let expected = MontgomeryPoint(u).mul_clamped(scalar).to_bytes();
        let expected_ok = expected != [0u8; 32];
        for backend in available_backends() {
            prop_assert_eq!(x25519_with_backend(backend, &scalar, &u), (expected, expected_ok));
        }
    }

    #[test]
    fn backends_agree_on_base_point(scalar in any::<[u8; 32]>()) {
        let expected = MontgomeryPoint::mul_base_clamped(scalar).to_bytes();
        for backend in available_backends() {
            prop_assert_eq!(x25519_public_from_private_with_backend(backend, &scalar), expected);
        }
    }
}
