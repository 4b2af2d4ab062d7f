//! Checks that run only when [`DEBUG_CHECKS`](super::DEBUG_CHECKS) is true
//!
//! In release builds without the `debug-checks` feature every function here
//! is an inlined `Ok(())`. The arguments are still evaluated by the caller;
//! use [`debug_verify!`](crate::debug_verify) when building them costs
//! something.

for_each_check!(gated_fns! { guard = super::DEBUG_CHECKS; });
