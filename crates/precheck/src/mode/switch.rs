use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::CheckConfig;

// ============================================================================
// TRAIT
// ============================================================================

/// Decides whether gated checks run.
///
/// Implement this to drive [`Switched`](super::Switched) from host state,
/// such as a feature flag or a per-tenant setting.
pub trait CheckSwitch {
    /// Returns true when checks should run.
    fn is_enabled(&self) -> bool;
}

impl<S: CheckSwitch + ?Sized> CheckSwitch for &S {
    #[inline]
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// A switch fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSwitch(pub bool);

impl FixedSwitch {
    /// Always on.
    pub const ON: Self = Self(true);
    /// Always off.
    pub const OFF: Self = Self(false);
}

impl CheckSwitch for FixedSwitch {
    #[inline]
    fn is_enabled(&self) -> bool {
        self.0
    }
}

/// Follows [`DEBUG_CHECKS`](super::DEBUG_CHECKS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebugSwitch;

impl CheckSwitch for DebugSwitch {
    #[inline]
    fn is_enabled(&self) -> bool {
        super::DEBUG_CHECKS
    }
}

static GLOBAL: OnceLock<AtomicBool> = OnceLock::new();

/// The process-wide switch behind [`configurable`](super::configurable).
///
/// On first use it is seeded from [`CheckConfig::from_env`], unless
/// [`GlobalSwitch::init`] ran earlier. Afterwards only
/// [`GlobalSwitch::set_enabled`] changes it. Reads and writes are relaxed:
/// the flag guards no other data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlobalSwitch;

impl GlobalSwitch {
    /// Seeds the switch from `config`.
    ///
    /// Returns false, leaving the switch untouched, when it was already
    /// seeded.
    pub fn init(config: &CheckConfig) -> bool {
        let seeded = GLOBAL.set(AtomicBool::new(config.configurable_checks)).is_ok();
        if seeded {
            tracing::debug!(
                target: "precheck",
                enabled = config.configurable_checks,
                "configurable checks seeded from config"
            );
        }
        seeded
    }

    /// Current state.
    #[inline]
    pub fn enabled() -> bool {
        flag().load(Ordering::Relaxed)
    }

    /// Turns configurable checks on or off for the whole process.
    pub fn set_enabled(enabled: bool) {
        flag().store(enabled, Ordering::Relaxed);
        tracing::debug!(target: "precheck", enabled, "configurable checks toggled");
    }
}

impl CheckSwitch for GlobalSwitch {
    #[inline]
    fn is_enabled(&self) -> bool {
        Self::enabled()
    }
}

fn flag() -> &'static AtomicBool {
    GLOBAL.get_or_init(|| {
        let config = CheckConfig::from_env();
        tracing::debug!(
            target: "precheck",
            enabled = config.configurable_checks,
            "configurable checks seeded from environment"
        );
        AtomicBool::new(config.configurable_checks)
    })
}
