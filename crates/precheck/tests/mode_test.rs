//! Parity of the debug and switch-gated surfaces with `verify`.

#[macro_use]
mod common;

use pretty_assertions::assert_eq;

use precheck::mode::{DEBUG_CHECKS, DebugSwitch};
use precheck::prelude::*;

fn expected() -> Vec<Result<(), ArgumentError>> {
    let results: Vec<Result<(), ArgumentError>> = violating_calls!(verify::);
    assert!(results.iter().all(Result::is_err));
    results
}

fn switched<S: CheckSwitch>(checks: &Switched<S>) -> Vec<Result<(), ArgumentError>> {
    violating_calls!(checks.)
}

// ============================================================================
// DEBUG TWINS
// ============================================================================

#[test]
fn test_debug_twins_match_verify() {
    let actual: Vec<Result<(), ArgumentError>> = violating_calls!(debug::);
    if DEBUG_CHECKS {
        assert_eq!(actual, expected());
    } else {
        assert!(actual.iter().all(Result::is_ok));
    }
}

#[test]
fn test_debug_twins_pass_valid_input() {
    assert_eq!(debug::not_empty(Some("x"), "s"), Ok(()));
    assert_eq!(debug::is_in_range(5, 0, 10, "v"), Ok(()));
    assert_eq!(debug::array_segment_range(Some(&[1_u8, 2][..]), 1, 1), Ok(()));
}

#[test]
fn test_debug_verify_macro() {
    let mut evaluated = false;
    let result = debug_verify!(is_positive(
        {
            evaluated = true;
            -1
        },
        "n"
    ));

    assert_eq!(evaluated, DEBUG_CHECKS);
    assert_eq!(result.is_err(), DEBUG_CHECKS);
}

// ============================================================================
// SWITCHED
// ============================================================================

#[test]
fn test_enabled_switch_matches_verify() {
    assert_eq!(switched(&Switched::new(FixedSwitch::ON)), expected());
}

#[test]
fn test_disabled_switch_never_fails() {
    let actual = switched(&Switched::new(FixedSwitch::OFF));
    assert!(actual.iter().all(Result::is_ok));
}

#[test]
fn test_debug_switch_follows_build() {
    let actual = switched(&Switched::new(DebugSwitch));
    assert!(actual.iter().all(|r| r.is_err() == DEBUG_CHECKS));
}

#[test]
fn test_verify_if_macro() {
    let mut evaluated = false;
    let result = verify_if!(FixedSwitch::OFF, not_empty(
        {
            evaluated = true;
            Some("")
        },
        "s"
    ));
    assert!(result.is_ok());
    assert!(!evaluated);

    let switch = FixedSwitch::ON;
    let result = verify_if!(&switch, not_empty(Some(""), "s"));
    assert_eq!(result, verify::not_empty(Some(""), "s"));
}
