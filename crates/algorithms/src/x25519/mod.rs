//! X25519 scalar multiplication backends and runtime selection
//!
//! Three interchangeable constant-time implementations of `k · u` on
//! Curve25519's Montgomery form produce bit-identical output:
//!
//! | Backend | Arithmetic |
//! |---|---|
//! | [`Backend::Standard`] | in-crate ladder over 51-bit limbs, entered with BMI2 and ADX enabled on x86_64 |
//! | [`Backend::WideMultiplier`] | `curve25519-dalek`'s Montgomery ladder |
//! | [`Backend::Portable`] | in-crate ladder over 16-bit limbs (feature `portable`) |
//!
//! [`Backend::preferred`] applies a fixed per-architecture priority to the
//! cached [`capabilities`](crate::cpu::capabilities). The selection can also
//! be forced by naming a variant directly, which tests and benchmarks do.

use curve25519_dalek::montgomery::MontgomeryPoint;
use tracing::error;

use crate::cpu::{self, Arch, Capabilities};

mod ladder;
#[cfg(feature = "portable")]
mod radix16;
mod radix51;


use radix51::Fe51;

/// An X25519 scalar multiplication implementation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Radix-2^51 ladder; needs BMI2 and ADX on x86_64
    Standard,
    /// Backend tuned for cores with a wide multiplier
    WideMultiplier,
    /// Radix-2^16 ladder with no CPU requirements
    Portable,
}

impl Backend {
    /// Every variant, in declaration order
    pub const ALL: [Backend; 3] = [Backend::Standard, Backend::WideMultiplier, Backend::Portable];

    /// Short lowercase name, matching the capability override tokens
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Standard => "standard",
            Backend::WideMultiplier => "wide",
            Backend::Portable => "portable",
        }
    }

    /// Pick an accelerated backend for `arch` given `caps`
    ///
    /// x86_64 prefers the standard-instruction backend and AArch64 the
    /// wide-multiplier one; each falls back to the other. `None` means no
    /// accelerated backend is usable.
    pub const fn select(arch: Arch, caps: Capabilities) -> Option<Backend> {
        match arch {
            Arch::X86_64 => {
                if caps.supports_standard() {
                    Some(Backend::Standard)
                } else if caps.supports_wide_multiplier() {
                    Some(Backend::WideMultiplier)
                } else {
                    None
                }
            }
            Arch::Aarch64 => {
                if caps.supports_wide_multiplier() {
                    Some(Backend::WideMultiplier)
                } else if caps.supports_standard() {
                    Some(Backend::Standard)
                } else {
                    None
                }
            }
            Arch::Other => None,
        }
    }

    /// The backend for the running CPU
    ///
    /// Falls back to [`Backend::Portable`] when [`Backend::select`] finds
    /// nothing. If that variant was not compiled in, the engines abort on
    /// first use.
    pub fn preferred() -> Backend {
        Self::select(Arch::current(), cpu::capabilities()).unwrap_or(Backend::Portable)
    }

    /// Whether this variant can run here: the CPU supports it and it is
    /// compiled into this build
    pub fn is_available(self) -> bool {
        let caps = cpu::capabilities();
        match self {
            Backend::Standard => caps.supports_standard(),
            Backend::WideMultiplier => caps.supports_wide_multiplier(),
            Backend::Portable => cfg!(feature = "portable"),
        }
    }

    /// Compute `scalar · u`
    ///
    /// The scalar is clamped on a private copy and bit 255 of `u` is ignored.
    /// Returns `None` when this variant is not available; see
    /// [`Backend::is_available`].
    pub fn scalarmult(self, scalar: &[u8; 32], u: &[u8; 32]) -> Option<[u8; 32]> {
        if !self.is_available() {
            return None;
        }
        match self {
            Backend::Standard => Some(standard::scalarmult(scalar, u)),
            Backend::WideMultiplier => Some(MontgomeryPoint(*u).mul_clamped(*scalar).to_bytes()),
            Backend::Portable => portable::scalarmult(scalar, u),
        }
    }

    /// Compute `scalar · 9`, the public value for a private scalar
    pub fn scalarmult_base(self, scalar: &[u8; 32]) -> Option<[u8; 32]> {
        if !self.is_available() {
            return None;
        }
        match self {
            Backend::Standard => Some(standard::scalarmult_base(scalar)),
            Backend::WideMultiplier => Some(MontgomeryPoint::mul_base_clamped(*scalar).to_bytes()),
            Backend::Portable => portable::scalarmult_base(scalar),
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Log and abort after a dispatch found no usable backend
///
/// Callers wipe their scratch buffers first. A wrong X25519 result is worse
/// than a crash, so there is no error value for this.
pub fn abort_unavailable(backend: Backend) -> ! {
    error!(
        %backend,
        arch = ?Arch::current(),
        caps = ?cpu::capabilities(),
        "no usable X25519 backend for this CPU and build; aborting"
    );
    std::process::abort()
}

#[allow(unsafe_code)]
mod standard {
    #[cfg(not(target_arch = "x86_64"))]
    use super::{ladder, Fe51};

    #[cfg(target_arch = "x86_64")]
    pub(super) fn scalarmult(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
        // SAFETY: only reached through Backend::scalarmult after
        // is_available(), i.e. the capability probe found BMI2 and ADX
        unsafe { bmi2_adx::scalarmult(scalar, u) }
    }

    #[cfg(target_arch = "x86_64")]
    pub(super) fn scalarmult_base(scalar: &[u8; 32]) -> [u8; 32] {
        // SAFETY: as above
        unsafe { bmi2_adx::scalarmult_base(scalar) }
    }

    #[cfg(not(target_arch = "x86_64"))]
    pub(super) fn scalarmult(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
        ladder::mul::<Fe51>(scalar, u)
    }

    #[cfg(not(target_arch = "x86_64"))]
    pub(super) fn scalarmult_base(scalar: &[u8; 32]) -> [u8; 32] {
        ladder::mul_base::<Fe51>(scalar)
    }

    #[cfg(target_arch = "x86_64")]
    mod bmi2_adx {
        use super::super::{ladder, Fe51};

        #[target_feature(enable = "bmi2,adx")]
        pub(super) unsafe fn scalarmult(scalar: &[u8; 32], u: &[u8; 32]) -> [u8; 32] {
            ladder::mul::<Fe51>(scalar, u)
        }

        #[target_feature(enable = "bmi2,adx")]
        pub(super) unsafe fn scalarmult_base(scalar: &[u8; 32]) -> [u8; 32] {
            ladder::mul_base::<Fe51>(scalar)
        }
    }
}

mod portable {
    #[cfg(feature = "portable")]
    use super::{ladder, radix16::Fe16};

    #[cfg(feature = "portable")]
    pub(super) fn scalarmult(scalar: &[u8; 32], u: &[u8; 32]) -> Option<[u8; 32]> {
        Some(ladder::mul::<Fe16>(scalar, u))
    }

    #[cfg(feature = "portable")]
    pub(super) fn scalarmult_base(scalar: &[u8; 32]) -> Option<[u8; 32]> {
        Some(ladder::mul_base::<Fe16>(scalar))
    }

    #[cfg(not(feature = "portable"))]
    pub(super) fn scalarmult(_scalar: &[u8; 32], _u: &[u8; 32]) -> Option<[u8; 32]> {
        None
    }

    #[cfg(not(feature = "portable"))]
    pub(super) fn scalarmult_base(_scalar: &[u8; 32]) -> Option<[u8; 32]> {
        None
    }
}
