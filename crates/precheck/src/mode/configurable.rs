//! Checks gated by a runtime switch
//!
//! The free functions consult [`GlobalSwitch`]; [`Switched`] carries its own
//! [`CheckSwitch`] so a component can be tested, or configured, without
//! touching process-wide state.
//!
//! ```rust,ignore
//! use precheck::mode::{FixedSwitch, Switched};
//!
//! let checks = Switched::new(FixedSwitch::ON);
//! checks.is_positive(-1, "retries").unwrap_err();
//!
//! let relaxed = Switched::new(FixedSwitch::OFF);
//! relaxed.is_positive(-1, "retries").unwrap();
//! ```

use super::switch::{CheckSwitch, GlobalSwitch};

for_each_check!(gated_fns! { guard = GlobalSwitch::enabled(); });

/// The check surface bound to a switch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Switched<S> {
    switch: S,
}

impl<S: CheckSwitch> Switched<S> {
    /// Binds the checks to `switch`.
    pub const fn new(switch: S) -> Self {
        Self { switch }
    }

    /// The bound switch.
    pub fn switch(&self) -> &S {
        &self.switch
    }

    /// Whether the checks currently run.
    pub fn is_enabled(&self) -> bool {
        self.switch.is_enabled()
    }
}

for_each_check!(gated_methods! {});

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::mode::FixedSwitch;
    use crate::verify;

    struct Counting<'a>(&'a Cell<u32>, bool);

    impl CheckSwitch for Counting<'_> {
        fn is_enabled(&self) -> bool {
            self.0.set(self.0.get() + 1);
            self.1
        }
    }

    #[test]
    fn enabled_switch_matches_verify() {
        let checks = Switched::new(FixedSwitch::ON);
        assert_eq!(
            checks.is_strictly_less_than(5_i64, 5, "n"),
            verify::is_strictly_less_than(5_i64, 5, "n")
        );
    }

    #[test]
    fn disabled_switch_never_fails() {
        let checks = Switched::new(FixedSwitch::OFF);
        assert!(checks.not_null::<str>(None, "name").is_ok());
        assert!(checks.array_segment_range::<u8>(None, -1, -1).is_ok());
    }

    #[test]
    fn switch_is_consulted_per_call() {
        let calls = Cell::new(0);
        let checks = Switched::new(Counting(&calls, true));
        assert!(checks.is_positive(1, "a").is_ok());
        assert!(checks.is_positive(-1, "b").is_err());
        assert_eq!(calls.get(), 2);
    }
}
