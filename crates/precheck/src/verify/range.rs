//! Sign, limit and range checks over the closed [`Limit`] domains
//!
//! Inclusive checks accept the boundary itself; strict checks reject it. The
//! two-sided checks test the lower boundary first, so a value that somehow
//! violates both reports the lower one. No check verifies `lower <= upper`.

use std::borrow::Cow;

use super::fail;
use crate::error::{
    ArgumentError, ArgumentExceedsLowerLimit, ArgumentExceedsUpperLimit, ArgumentOutOfRange,
};
use crate::messages::Reason;
use crate::value::Limit;

// ============================================================================
// SIGN
// ============================================================================

/// Fails when `value < 0`. Zero passes.
#[inline]
pub fn is_positive<T: Limit>(
    value: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value < T::zero() {
        return Err(fail(ArgumentOutOfRange::because(
            Reason::ArgumentIsPositive,
            param,
            value,
        )));
    }
    Ok(())
}

/// Fails when `value <= 0`. Zero fails.
#[inline]
pub fn is_strictly_positive<T: Limit>(
    value: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value <= T::zero() {
        return Err(fail(ArgumentOutOfRange::because(
            Reason::ArgumentIsStrictlyPositive,
            param,
            value,
        )));
    }
    Ok(())
}

// ============================================================================
// ONE-SIDED LIMITS
// ============================================================================

/// Fails when `value < lower`. The boundary passes.
#[inline]
pub fn is_greater_than<T: Limit>(
    value: T,
    lower: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value < lower {
        return Err(below(Reason::ArgumentIsGreaterThan, param, value, lower));
    }
    Ok(())
}

/// Fails when `value > upper`. The boundary passes.
#[inline]
pub fn is_less_than<T: Limit>(
    value: T,
    upper: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value > upper {
        return Err(above(Reason::ArgumentIsLessThan, param, value, upper));
    }
    Ok(())
}

/// Fails when `value <= lower`. The boundary fails.
#[inline]
pub fn is_strictly_greater_than<T: Limit>(
    value: T,
    lower: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value <= lower {
        return Err(below(
            Reason::ArgumentIsStrictlyGreaterThan,
            param,
            value,
            lower,
        ));
    }
    Ok(())
}

/// Fails when `value >= upper`. The boundary fails.
#[inline]
pub fn is_strictly_less_than<T: Limit>(
    value: T,
    upper: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value >= upper {
        return Err(above(
            Reason::ArgumentIsStrictlyLessThan,
            param,
            value,
            upper,
        ));
    }
    Ok(())
}

// ============================================================================
// TWO-SIDED RANGES
// ============================================================================

/// Fails when `value` is outside `[lower, upper]`.
#[inline]
pub fn is_in_range<T: Limit>(
    value: T,
    lower: T,
    upper: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value < lower {
        return Err(below(Reason::ArgumentIsGreaterThan, param, value, lower));
    }
    if value > upper {
        return Err(above(Reason::ArgumentIsLessThan, param, value, upper));
    }
    Ok(())
}

/// Fails when `value` is outside `(lower, upper)`.
#[inline]
pub fn is_strictly_in_range<T: Limit>(
    value: T,
    lower: T,
    upper: T,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    if value <= lower {
        return Err(below(
            Reason::ArgumentIsStrictlyGreaterThan,
            param,
            value,
            lower,
        ));
    }
    if value >= upper {
        return Err(above(
            Reason::ArgumentIsStrictlyLessThan,
            param,
            value,
            upper,
        ));
    }
    Ok(())
}

fn below<T: Limit>(
    reason: Reason,
    param: impl Into<Cow<'static, str>>,
    value: T,
    lower: T,
) -> ArgumentError {
    fail(ArgumentExceedsLowerLimit::because(reason, param, value, lower))
}

fn above<T: Limit>(
    reason: Reason,
    param: impl Into<Cow<'static, str>>,
    value: T,
    upper: T,
) -> ArgumentError {
    fail(ArgumentExceedsUpperLimit::because(reason, param, value, upper))
}
