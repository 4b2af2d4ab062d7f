//! Debug-only and configurable twins of the [`verify`](crate::verify) surface
//!
//! Every check in `verify` has a same-named, same-signature twin here:
//!
//! - [`debug`]: active only in debug builds or with the `debug-checks`
//!   feature. Inactive twins return `Ok(())` and are removed at compile time.
//! - [`configurable`]: active while the process-wide [`GlobalSwitch`] is on.
//!   [`Switched`] exposes the same checks against any [`CheckSwitch`].
//!
//! When a twin is active its result is exactly what the `verify` check
//! returns for the same arguments.

pub mod configurable;
pub mod debug;
mod switch;

pub use configurable::Switched;
pub use switch::{CheckSwitch, DebugSwitch, FixedSwitch, GlobalSwitch};

/// True when the [`debug`] twins and [`debug_verify!`](crate::debug_verify)
/// run their checks.
pub const DEBUG_CHECKS: bool = cfg!(any(debug_assertions, feature = "debug-checks"));
