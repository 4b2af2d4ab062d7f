//! The closed set of value domains accepted by the range checks
//!
//! Range and limit checks are instantiated for exactly four domains: `i32`,
//! `i64`, `f64` and [`TimeDelta`]. The [`Limit`] trait is sealed, so the set
//! cannot grow outside this crate, and [`Value`] is the tagged form a failure
//! carries for its actual value and violated limit.

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALUE
// ============================================================================

/// A value captured by a range failure.
///
/// Serializes as `{ "type": <domain>, "value": <payload> }`; a duration's
/// payload is `{ "secs", "nanos" }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "ValueRepr", try_from = "ValueRepr")]
pub enum Value {
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// IEEE-754 double.
    Double(f64),
    /// Signed duration.
    Duration(TimeDelta),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int32(v) => fmt::Display::fmt(v, f),
            Value::Int64(v) => fmt::Display::fmt(v, f),
            Value::Double(v) => fmt::Display::fmt(v, f),
            Value::Duration(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Duration(value)
    }
}

// ============================================================================
// LIMIT
// ============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for chrono::TimeDelta {}
}

/// A domain the range checks accept.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait Limit: Copy + PartialOrd + Into<Value> + sealed::Sealed {
    /// The zero of the domain, used by the sign checks.
    fn zero() -> Self;
}

impl Limit for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Limit for i64 {
    #[inline]
    fn zero() -> Self {
        0
    }
}

impl Limit for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Limit for TimeDelta {
    #[inline]
    fn zero() -> Self {
        TimeDelta::zero()
    }
}

// ============================================================================
// WIRE FORM
// ============================================================================

/// Wire form of [`Value`]. chrono's serde support is not enabled, so the
/// duration travels as explicit parts.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
enum ValueRepr {
    Int32(i32),
    Int64(i64),
    Double(f64),
    Duration(DurationParts),
}

/// `nanos` carries the sign of the duration, matching `TimeDelta::subsec_nanos`.
#[derive(Serialize, Deserialize)]
struct DurationParts {
    secs: i64,
    nanos: i32,
}

/// A duration payload outside the range of [`TimeDelta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("duration out of range: {secs}s {nanos}ns")]
pub struct DurationOutOfRange {
    secs: i64,
    nanos: i32,
}

impl From<Value> for ValueRepr {
    fn from(value: Value) -> Self {
        match value {
            Value::Int32(v) => ValueRepr::Int32(v),
            Value::Int64(v) => ValueRepr::Int64(v),
            Value::Double(v) => ValueRepr::Double(v),
            Value::Duration(v) => ValueRepr::Duration(DurationParts {
                secs: v.num_seconds(),
                nanos: v.subsec_nanos(),
            }),
        }
    }
}

impl TryFrom<ValueRepr> for Value {
    type Error = DurationOutOfRange;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            ValueRepr::Int32(v) => Value::Int32(v),
            ValueRepr::Int64(v) => Value::Int64(v),
            ValueRepr::Double(v) => Value::Double(v),
            ValueRepr::Duration(DurationParts { secs, nanos }) => Value::Duration(
                TimeDelta::try_seconds(secs)
                    .and_then(|whole| whole.checked_add(&TimeDelta::nanoseconds(i64::from(nanos))))
                    .ok_or(DurationOutOfRange { secs, nanos })?,
            ),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_native_formatting() {
        assert_eq!(Value::from(100).to_string(), "100");
        assert_eq!(Value::from(-7_i64).to_string(), "-7");
        assert_eq!(Value::from(100.0).to_string(), "100");
        assert_eq!(Value::from(99.5).to_string(), "99.5");
        assert_eq!(
            Value::from(TimeDelta::seconds(90)).to_string(),
            TimeDelta::seconds(90).to_string()
        );
    }

    #[test]
    fn negative_duration_round_trips() {
        let value = Value::from(TimeDelta::milliseconds(-1500));
        let json = serde_json::to_value(value).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "duration", "value": { "secs": -1, "nanos": -500_000_000 } })
        );
        assert_eq!(serde_json::from_value::<Value>(json).unwrap(), value);
    }

    #[test]
    fn integers_keep_their_domain() {
        let json = serde_json::json!({ "type": "int64", "value": 7 });
        assert_eq!(serde_json::from_value::<Value>(json).unwrap(), Value::Int64(7));
    }

    #[test]
    fn oversized_duration_is_rejected() {
        let json = serde_json::json!({ "type": "duration", "value": { "secs": i64::MAX, "nanos": 0 } });
        assert!(serde_json::from_value::<Value>(json).is_err());
    }

    #[test]
    fn zero_of_each_domain() {
        assert_eq!(<i32 as Limit>::zero(), 0);
        assert_eq!(<i64 as Limit>::zero(), 0);
        assert_eq!(<f64 as Limit>::zero(), 0.0);
        assert_eq!(<TimeDelta as Limit>::zero(), TimeDelta::zero());
    }
}
