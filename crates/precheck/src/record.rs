//! Flat serialization form of [`ArgumentError`]
//!
//! Failures cross process boundaries as a single flat record. Reconstruction
//! checks that the payload fits the declared kind: a lower-limit failure may
//! not carry an upper limit, a null failure may not carry a value, and so on.

use serde::{Deserialize, Serialize};

use crate::error::{
    ArgumentError, ArgumentExceedsLowerLimit, ArgumentExceedsUpperLimit, ArgumentOutOfRange,
    Cause, FailureKind, InvalidArgument, NullArgument,
};
use crate::messages::Reason;
use crate::value::Value;

// ============================================================================
// RECORD
// ============================================================================

/// Every diagnostic field of a failure, side by side.
///
/// `message` holds only an explicitly supplied message; the composed text is
/// rebuilt from the other fields on the receiving side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Failure shape.
    pub kind: FailureKind,
    /// Why the check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
    /// Offending parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,
    /// Explicit message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Value that failed the check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_value: Option<Value>,
    /// Violated lower boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<Value>,
    /// Violated upper boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<Value>,
    /// Captured inner cause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner: Option<Cause>,
}

/// A record whose payload does not fit its kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A field was set that the kind cannot carry.
    #[error("{kind:?} failure record cannot carry `{field}`")]
    UnexpectedField {
        /// Declared kind.
        kind: FailureKind,
        /// Offending field.
        field: &'static str,
    },
}

impl FailureRecord {
    fn reject(&self, field: &'static str, present: bool) -> Result<(), RecordError> {
        if present {
            Err(RecordError::UnexpectedField {
                kind: self.kind,
                field,
            })
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&ArgumentError> for FailureRecord {
    fn from(error: &ArgumentError) -> Self {
        let custom_message = match error {
            ArgumentError::Null(e) => e.custom_message(),
            ArgumentError::Invalid(e) => e.custom_message(),
            ArgumentError::OutOfRange(e) => e.custom_message(),
            ArgumentError::ExceedsLowerLimit(e) => e.custom_message(),
            ArgumentError::ExceedsUpperLimit(e) => e.custom_message(),
        };
        let (lower_limit, upper_limit) = match error {
            ArgumentError::ExceedsLowerLimit(e) => (e.lower_limit(), None),
            ArgumentError::ExceedsUpperLimit(e) => (None, e.upper_limit()),
            _ => (None, None),
        };

        Self {
            kind: error.kind(),
            reason: error.reason(),
            param_name: error.param_name().map(str::to_owned),
            message: custom_message.map(str::to_owned),
            actual_value: error.actual_value(),
            lower_limit,
            upper_limit,
            inner: error.inner().cloned(),
        }
    }
}

impl From<ArgumentError> for FailureRecord {
    fn from(error: ArgumentError) -> Self {
        Self::from(&error)
    }
}

/// Applies the fields every failure shape shares.
macro_rules! restore_common {
    ($failure:expr, $record:expr) => {{
        let mut failure = $failure;
        if let Some(reason) = $record.reason {
            failure = failure.with_reason(reason);
        }
        if let Some(param) = $record.param_name {
            failure = failure.with_param(param);
        }
        if let Some(message) = $record.message {
            failure = failure.with_custom_message(message);
        }
        if let Some(inner) = $record.inner {
            failure = failure.with_inner(inner);
        }
        failure
    }};
}

impl TryFrom<FailureRecord> for ArgumentError {
    type Error = RecordError;

    fn try_from(record: FailureRecord) -> Result<Self, Self::Error> {
        let has_actual = record.actual_value.is_some();
        let has_lower = record.lower_limit.is_some();
        let has_upper = record.upper_limit.is_some();

        match record.kind {
            FailureKind::Null | FailureKind::Invalid | FailureKind::OutOfRange => {
                if record.kind != FailureKind::OutOfRange {
                    record.reject("actual_value", has_actual)?;
                }
                record.reject("lower_limit", has_lower)?;
                record.reject("upper_limit", has_upper)?;
            }
            FailureKind::LowerLimit => record.reject("upper_limit", has_upper)?,
            FailureKind::UpperLimit => record.reject("lower_limit", has_lower)?,
        }

        let actual = record.actual_value;
        let lower = record.lower_limit;
        let upper = record.upper_limit;

        Ok(match record.kind {
            FailureKind::Null => restore_common!(NullArgument::new(), record).into(),
            FailureKind::Invalid => restore_common!(InvalidArgument::new(), record).into(),
            FailureKind::OutOfRange => {
                let mut failure = restore_common!(ArgumentOutOfRange::new(), record);
                if let Some(actual) = actual {
                    failure = failure.with_actual(actual);
                }
                failure.into()
            }
            FailureKind::LowerLimit => {
                let mut failure = restore_common!(ArgumentExceedsLowerLimit::new(), record);
                if let Some(actual) = actual {
                    failure = failure.with_actual(actual);
                }
                if let Some(lower) = lower {
                    failure = failure.with_lower_limit(lower);
                }
                failure.into()
            }
            FailureKind::UpperLimit => {
                let mut failure = restore_common!(ArgumentExceedsUpperLimit::new(), record);
                if let Some(actual) = actual {
                    failure = failure.with_actual(actual);
                }
                if let Some(upper) = upper {
                    failure = failure.with_upper_limit(upper);
                }
                failure.into()
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
