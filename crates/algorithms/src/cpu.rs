//! CPU capability detection for the X25519 backends
//!
//! Two independent questions are answered for the running CPU: can the
//! wide-multiplier backend run, and can the standard-instruction backend run.
//! The answers come from the compilation target plus a one-time runtime
//! probe, and are cached for the life of the process.
//!
//! # Initialisation contract
//!
//! [`capabilities`] computes the answer lazily on first use inside a
//! [`OnceLock`]. Concurrent first callers block until one of them finishes
//! the probe; every later call is a plain load. The value never changes
//! afterwards.
//!
//! # Override
//!
//! The `DCURVE_X25519_DISABLE` environment variable, read once during
//! initialisation, holds a comma-separated list of `standard` and `wide`.
//! Each listed capability is reported as unavailable. The override can only
//! disable what the probe found; it never enables anything.

use std::sync::OnceLock;
use tracing::{debug, warn};

/// Environment variable holding the capability override
pub const DISABLE_ENV: &str = "DCURVE_X25519_DISABLE";

/// Architecture families with a backend priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arch {
    /// x86_64
    X86_64,
    /// AArch64
    Aarch64,
    /// Anything else: no accelerated backend
    Other,
}

impl Arch {
    /// The architecture this crate was compiled for
    pub const fn current() -> Self {
        if cfg!(target_arch = "x86_64") {
            Arch::X86_64
        } else if cfg!(target_arch = "aarch64") {
            Arch::Aarch64
        } else {
            Arch::Other
        }
    }
}

/// Which X25519 backend variants the CPU can run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    wide_multiplier: bool,
    standard: bool,
}

impl Capabilities {
    /// Build a capability set by hand (used by selection tests)
    pub const fn new(wide_multiplier: bool, standard: bool) -> Self {
        Self { wide_multiplier, standard }
    }

    /// No backend usable
    pub const fn none() -> Self {
        Self::new(false, false)
    }

    /// The wide-multiplier backend variant can run
    pub const fn supports_wide_multiplier(&self) -> bool {
        self.wide_multiplier
    }

    /// The standard-instruction backend variant can run
    pub const fn supports_standard(&self) -> bool {
        self.standard
    }

    /// Probe the running CPU, ignoring any override
    pub fn detect() -> Self {
        probe()
    }

    /// Clear every capability named in `mask`
    pub const fn without(self, mask: DisableMask) -> Self {
        Self {
            wide_multiplier: self.wide_multiplier && !mask.wide_multiplier,
            standard: self.standard && !mask.standard,
        }
    }
}

/// Capabilities to report as unavailable regardless of detection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisableMask {
    /// Disable the wide-multiplier variant
    pub wide_multiplier: bool,
    /// Disable the standard-instruction variant
    pub standard: bool,
}

impl DisableMask {
    /// Parse a comma-separated override such as `"standard, wide"`
    ///
    /// Tokens are trimmed and case-insensitive. Empty tokens are skipped and
    /// unknown ones are ignored with a warning.
    pub fn parse(value: &str) -> Self {
        let mut mask = Self::default();
        for token in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("standard") {
                mask.standard = true;
            } else if token.eq_ignore_ascii_case("wide") {
                mask.wide_multiplier = true;
            } else {
                warn!(token, env = DISABLE_ENV, "ignoring unknown capability override");
            }
        }
        mask
    }

    fn from_env() -> Self {
        std::env::var(DISABLE_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Process-wide capabilities, probed once and then cached
pub fn capabilities() -> Capabilities {
    static CAPS: OnceLock<Capabilities> = OnceLock::new();
    *CAPS.get_or_init(|| {
        let detected = Capabilities::detect();
        let mask = DisableMask::from_env();
        let caps = detected.without(mask);
        debug!(
            arch = ?Arch::current(),
            ?detected,
            ?mask,
            wide_multiplier = caps.supports_wide_multiplier(),
            standard = caps.supports_standard(),
            "initialised X25519 capabilities"
        );
        caps
    })
}

#[cfg(target_arch = "x86_64")]
fn probe() -> Capabilities {
    // The wide variant needs nothing beyond the x86_64 baseline.
    Capabilities::new(
        true,
        std::is_x86_feature_detected!("bmi2") && std::is_x86_feature_detected!("adx"),
    )
}

#[cfg(target_arch = "aarch64")]
fn probe() -> Capabilities {
    Capabilities::new(has_wide_multiplier(), true)
}

/// Apple silicon, or an SVE-capable (Neoverse-class) core elsewhere
#[cfg(target_arch = "aarch64")]
fn has_wide_multiplier() -> bool {
    cfg!(target_os = "macos") || std::arch::is_aarch64_feature_detected!("sve")
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
fn probe() -> Capabilities {
    Capabilities::none()
}
