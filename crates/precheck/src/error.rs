//! Structured failures raised by the checks
//!
//! The taxonomy is flat: [`NullArgument`], [`InvalidArgument`] and
//! [`ArgumentOutOfRange`], with [`ArgumentExceedsLowerLimit`] and
//! [`ArgumentExceedsUpperLimit`] specialising the out-of-range failure by
//! adding the violated boundary. [`ArgumentError`] is the enum every check
//! returns.
//!
//! Messages are composed on display, one line per piece of context:
//!
//! ```text
//! Values exceeding the inclusive lower limit are invalid.
//! Parameter name: amount
//! Actual value was 99.
//! Lower limit: 100
//! ```
//!
//! A line is only written when its data is present, so a failure built with
//! [`ArgumentExceedsLowerLimit::new`] prints just the base sentence.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::messages::{self, Reason};
use crate::record::FailureRecord;
use crate::value::Value;

// ============================================================================
// CAUSE
// ============================================================================

/// An owned snapshot of an error chain, attached to a failure as its inner
/// cause.
///
/// Arbitrary `dyn Error` values cannot cross a serialization boundary, so the
/// chain is captured as display text at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<Box<Cause>>,
}

impl Cause {
    /// Creates a cause with no further source.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Captures `error` and its whole `source()` chain.
    pub fn capture(error: &(dyn Error + 'static)) -> Self {
        Self {
            message: error.to_string(),
            source: error.source().map(|source| Box::new(Cause::capture(source))),
        }
    }

    /// Sets the next link of the chain.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: Cause) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The captured message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of links, this one included.
    pub fn depth(&self) -> usize {
        1 + self.source.as_ref().map_or(0, |source| source.depth())
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Cause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

// ============================================================================
// SHARED DETAILS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
struct Details {
    reason: Option<Reason>,
    param_name: Option<Cow<'static, str>>,
    message: Option<Cow<'static, str>>,
    inner: Option<Box<Cause>>,
}

impl Details {
    fn reason(reason: Option<Reason>) -> Self {
        Self {
            reason,
            ..Self::default()
        }
    }

    fn base_message(&self, fallback: &'static str) -> &str {
        match (&self.message, self.reason) {
            (Some(message), _) => message.as_ref(),
            (None, Some(reason)) => reason.message(),
            (None, None) => fallback,
        }
    }

    fn write_head(&self, f: &mut fmt::Formatter<'_>, fallback: &'static str) -> fmt::Result {
        f.write_str(self.base_message(fallback))?;
        if let Some(param) = &self.param_name {
            write!(f, "\n{}{param}", messages::PARAMETER_NAME)?;
        }
        Ok(())
    }

    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Accessors and builders every failure shares, generated against the path
/// of its `Details`.
macro_rules! failure_common {
    ($ty:ident, $($path:ident).+, $fallback:expr) => {
        impl $ty {
            /// Why the check failed, if the failure was raised by one.
            pub fn reason(&self) -> Option<Reason> {
                self.$($path).+.reason
            }

            /// Name of the offending parameter.
            pub fn param_name(&self) -> Option<&str> {
                self.$($path).+.param_name.as_deref()
            }

            /// The first line of the message: the explicit message, the
            /// reason's text, or the kind's default text.
            pub fn base_message(&self) -> &str {
                self.$($path).+.base_message($fallback)
            }

            /// The explicit message, when one was supplied.
            pub fn custom_message(&self) -> Option<&str> {
                self.$($path).+.message.as_deref()
            }

            /// The composed, multi-line message.
            pub fn message(&self) -> String {
                self.to_string()
            }

            /// The captured inner cause.
            pub fn inner(&self) -> Option<&Cause> {
                self.$($path).+.inner.as_deref()
            }

            /// Sets the reason.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_reason(mut self, reason: Reason) -> Self {
                self.$($path).+.reason = Some(reason);
                self
            }

            /// Sets the parameter name.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_param(mut self, param: impl Into<Cow<'static, str>>) -> Self {
                self.$($path).+.param_name = Some(param.into());
                self
            }

            /// Sets the explicit message.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_custom_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
                self.$($path).+.message = Some(message.into());
                self
            }

            /// Attaches an inner cause.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_inner(mut self, cause: Cause) -> Self {
                self.$($path).+.inner = Some(Box::new(cause));
                self
            }

            /// Creates a failure with only a parameter name.
            pub fn named(param: impl Into<Cow<'static, str>>) -> Self {
                Self::new().with_param(param)
            }

            /// Creates a failure with an explicit message and an inner cause.
            pub fn caused_by(
                message: impl Into<Cow<'static, str>>,
                cause: &(dyn Error + 'static),
            ) -> Self {
                Self::new()
                    .with_custom_message(message)
                    .with_inner(Cause::capture(cause))
            }

            /// Creates a failure with a parameter name and an explicit message.
            pub fn with_message(
                param: impl Into<Cow<'static, str>>,
                message: impl Into<Cow<'static, str>>,
            ) -> Self {
                Self::named(param).with_custom_message(message)
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

// ============================================================================
// NULL ARGUMENT
// ============================================================================

/// A required value was absent.
#[derive(Debug, Clone, PartialEq)]
pub struct NullArgument {
    details: Details,
}

impl NullArgument {
    /// Creates a failure carrying only the generic message.
    pub fn new() -> Self {
        Self {
            details: Details::reason(Some(Reason::ArgumentNull)),
        }
    }
}

failure_common!(NullArgument, details, messages::ARGUMENT_NULL);

impl fmt::Display for NullArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.details.write_head(f, messages::ARGUMENT_NULL)
    }
}

impl Error for NullArgument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.details.source()
    }
}

// ============================================================================
// INVALID ARGUMENT
// ============================================================================

/// A structural violation: an empty string or collection, or a failed type
/// relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidArgument {
    details: Details,
}

impl InvalidArgument {
    /// Creates a failure carrying only the generic message.
    pub fn new() -> Self {
        Self {
            details: Details::default(),
        }
    }

    /// Creates the failure a check raises for `reason`.
    pub fn because(reason: Reason, param: impl Into<Cow<'static, str>>) -> Self {
        Self::named(param).with_reason(reason)
    }
}

failure_common!(InvalidArgument, details, messages::ARGUMENT_INVALID);

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.details.write_head(f, messages::ARGUMENT_INVALID)
    }
}

impl Error for InvalidArgument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.details.source()
    }
}

// ============================================================================
// ARGUMENT OUT OF RANGE
// ============================================================================

/// A value outside its permitted range, with no boundary attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentOutOfRange {
    details: Details,
    actual_value: Option<Value>,
}

impl ArgumentOutOfRange {
    /// Creates a failure carrying only the generic message.
    pub fn new() -> Self {
        Self {
            details: Details::default(),
            actual_value: None,
        }
    }

    /// Creates a failure with every diagnostic field.
    pub fn detailed(
        param: impl Into<Cow<'static, str>>,
        actual: impl Into<Value>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::with_message(param, message).with_actual(actual)
    }

    /// Creates the failure a check raises for `reason`.
    pub fn because(
        reason: Reason,
        param: impl Into<Cow<'static, str>>,
        actual: impl Into<Value>,
    ) -> Self {
        Self::named(param).with_reason(reason).with_actual(actual)
    }

    /// Sets the value that failed the check.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_actual(mut self, actual: impl Into<Value>) -> Self {
        self.actual_value = Some(actual.into());
        self
    }

    /// The value that failed the check.
    pub fn actual_value(&self) -> Option<Value> {
        self.actual_value
    }
}

failure_common!(ArgumentOutOfRange, details, messages::ARGUMENT_OUT_OF_RANGE);

impl fmt::Display for ArgumentOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.details.write_head(f, messages::ARGUMENT_OUT_OF_RANGE)?;
        if let Some(actual) = &self.actual_value {
            write!(f, "\n{}{actual}.", messages::ACTUAL_VALUE)?;
        }
        Ok(())
    }
}

impl Error for ArgumentOutOfRange {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.details.source()
    }
}

// ============================================================================
// LIMIT SPECIALISATIONS
// ============================================================================

/// Generates a limit-carrying specialisation of [`ArgumentOutOfRange`].
macro_rules! limit_failure {
    (
        $(#[$meta:meta])*
        $name:ident, $field:ident, $with:ident, $label:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            range: ArgumentOutOfRange,
            $field: Option<Value>,
        }

        impl $name {
            /// Creates a failure carrying only the generic message.
            pub fn new() -> Self {
                Self {
                    range: ArgumentOutOfRange::new(),
                    $field: None,
                }
            }

            /// Creates a failure with every diagnostic field.
            pub fn detailed(
                param: impl Into<Cow<'static, str>>,
                actual: impl Into<Value>,
                limit: impl Into<Value>,
                message: impl Into<Cow<'static, str>>,
            ) -> Self {
                Self::with_message(param, message)
                    .with_actual(actual)
                    .$with(limit)
            }

            /// Creates the failure a check raises for `reason`.
            pub fn because(
                reason: Reason,
                param: impl Into<Cow<'static, str>>,
                actual: impl Into<Value>,
                limit: impl Into<Value>,
            ) -> Self {
                Self::named(param)
                    .with_reason(reason)
                    .with_actual(actual)
                    .$with(limit)
            }

            /// Sets the value that failed the check.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_actual(mut self, actual: impl Into<Value>) -> Self {
                self.range = self.range.with_actual(actual);
                self
            }

            /// Sets the violated boundary.
            #[must_use = "builder methods must be chained or built"]
            pub fn $with(mut self, limit: impl Into<Value>) -> Self {
                self.$field = Some(limit.into());
                self
            }

            /// The value that failed the check.
            pub fn actual_value(&self) -> Option<Value> {
                self.range.actual_value()
            }

            /// The violated boundary.
            pub fn $field(&self) -> Option<Value> {
                self.$field
            }

            /// The failure without its boundary.
            pub fn as_out_of_range(&self) -> &ArgumentOutOfRange {
                &self.range
            }
        }

        failure_common!($name, range.details, messages::ARGUMENT_OUT_OF_RANGE);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.range, f)?;
                if let Some(limit) = &self.$field {
                    write!(f, "\n{}{limit}", $label)?;
                }
                Ok(())
            }
        }

        impl Error for $name {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                self.range.source()
            }
        }
    };
}

limit_failure!(
    /// A value below a lower boundary.
    ArgumentExceedsLowerLimit,
    lower_limit,
    with_lower_limit,
    messages::LOWER_LIMIT
);

limit_failure!(
    /// A value above an upper boundary.
    ArgumentExceedsUpperLimit,
    upper_limit,
    with_upper_limit,
    messages::UPPER_LIMIT
);

// ============================================================================
// ARGUMENT ERROR
// ============================================================================

/// Which failure shape an [`ArgumentError`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// [`NullArgument`].
    Null,
    /// [`InvalidArgument`].
    Invalid,
    /// [`ArgumentOutOfRange`].
    OutOfRange,
    /// [`ArgumentExceedsLowerLimit`].
    LowerLimit,
    /// [`ArgumentExceedsUpperLimit`].
    UpperLimit,
}

/// Which boundary, if any, a failure carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LimitKind {
    /// No boundary.
    #[default]
    None,
    /// A lower boundary.
    Lower,
    /// An upper boundary.
    Upper,
}

/// The failure every check returns.
///
/// Serializes through the flat [`FailureRecord`].
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
#[serde(into = "FailureRecord", try_from = "FailureRecord")]
pub enum ArgumentError {
    /// A required value was absent.
    #[error(transparent)]
    Null(#[from] NullArgument),

    /// An empty string or collection, or a failed type relationship.
    #[error(transparent)]
    Invalid(#[from] InvalidArgument),

    /// A value out of range, without a boundary.
    #[error(transparent)]
    OutOfRange(#[from] ArgumentOutOfRange),

    /// A value below a lower boundary.
    #[error(transparent)]
    ExceedsLowerLimit(#[from] ArgumentExceedsLowerLimit),

    /// A value above an upper boundary.
    #[error(transparent)]
    ExceedsUpperLimit(#[from] ArgumentExceedsUpperLimit),
}

impl ArgumentError {
    /// The failure shape.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Null(_) => FailureKind::Null,
            Self::Invalid(_) => FailureKind::Invalid,
            Self::OutOfRange(_) => FailureKind::OutOfRange,
            Self::ExceedsLowerLimit(_) => FailureKind::LowerLimit,
            Self::ExceedsUpperLimit(_) => FailureKind::UpperLimit,
        }
    }

    /// Why the check failed.
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Null(e) => e.reason(),
            Self::Invalid(e) => e.reason(),
            Self::OutOfRange(e) => e.reason(),
            Self::ExceedsLowerLimit(e) => e.reason(),
            Self::ExceedsUpperLimit(e) => e.reason(),
        }
    }

    /// Name of the offending parameter.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Null(e) => e.param_name(),
            Self::Invalid(e) => e.param_name(),
            Self::OutOfRange(e) => e.param_name(),
            Self::ExceedsLowerLimit(e) => e.param_name(),
            Self::ExceedsUpperLimit(e) => e.param_name(),
        }
    }

    /// The composed, multi-line message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The value that failed the check, for the range kinds.
    pub fn actual_value(&self) -> Option<Value> {
        match self {
            Self::Null(_) | Self::Invalid(_) => None,
            Self::OutOfRange(e) => e.actual_value(),
            Self::ExceedsLowerLimit(e) => e.actual_value(),
            Self::ExceedsUpperLimit(e) => e.actual_value(),
        }
    }

    /// The violated boundary, if any.
    pub fn limit(&self) -> Option<Value> {
        match self {
            Self::ExceedsLowerLimit(e) => e.lower_limit(),
            Self::ExceedsUpperLimit(e) => e.upper_limit(),
            _ => None,
        }
    }

    /// Which boundary [`limit`](Self::limit) refers to.
    pub fn limit_kind(&self) -> LimitKind {
        match self {
            Self::ExceedsLowerLimit(_) => LimitKind::Lower,
            Self::ExceedsUpperLimit(_) => LimitKind::Upper,
            _ => LimitKind::None,
        }
    }

    /// The captured inner cause.
    pub fn inner(&self) -> Option<&Cause> {
        match self {
            Self::Null(e) => e.inner(),
            Self::Invalid(e) => e.inner(),
            Self::OutOfRange(e) => e.inner(),
            Self::ExceedsLowerLimit(e) => e.inner(),
            Self::ExceedsUpperLimit(e) => e.inner(),
        }
    }

    /// Returns true for [`ArgumentError::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    /// Returns true for the three range kinds.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange(_) | Self::ExceedsLowerLimit(_) | Self::ExceedsUpperLimit(_)
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn default_messages_have_no_dangling_lines() {
        assert_eq!(NullArgument::new().to_string(), "Null values are invalid.");
        assert_eq!(
            ArgumentExceedsLowerLimit::new().to_string(),
            messages::ARGUMENT_OUT_OF_RANGE
        );
        assert_eq!(
            ArgumentExceedsUpperLimit::default().to_string(),
            messages::ARGUMENT_OUT_OF_RANGE
        );
        assert_eq!(InvalidArgument::new().to_string(), messages::ARGUMENT_INVALID);
    }

    #[test]
    fn param_only() {
        let error = NullArgument::named("value");
        assert_eq!(error.param_name(), Some("value"));
        assert_eq!(error.to_string(), "Null values are invalid.\nParameter name: value");
    }

    #[test]
    fn limit_line_is_appended_only_when_present() {
        let without = ArgumentExceedsUpperLimit::with_message("count", "Too many.");
        assert!(!without.to_string().contains(messages::UPPER_LIMIT));

        let with = without.clone().with_actual(5).with_upper_limit(3);
        assert_eq!(
            with.to_string(),
            "Too many.\nParameter name: count\nActual value was 5.\nUpper limit: 3"
        );
    }

    #[test]
    fn caused_by_captures_the_chain() {
        let error = InvalidArgument::caused_by("wrapped", &Outer(Inner));
        let inner = error.inner().expect("inner cause");
        assert_eq!(inner.message(), "outer");
        assert_eq!(inner.depth(), 2);

        let source = Error::source(&error).expect("source");
        assert_eq!(source.to_string(), "outer");
        assert_eq!(source.source().map(ToString::to_string).as_deref(), Some("inner"));
    }

    #[test]
    fn argument_error_forwards_source_and_display() {
        let error: ArgumentError = NullArgument::caused_by("gone", &Inner).into();
        assert_eq!(error.to_string(), "gone");
        assert_eq!(Error::source(&error).map(ToString::to_string).as_deref(), Some("inner"));
    }

    #[test]
    fn limit_kind_matches_variant() {
        let lower: ArgumentError = ArgumentExceedsLowerLimit::because(
            Reason::ArgumentIsGreaterThan,
            "v",
            1,
            2,
        )
        .into();
        assert_eq!(lower.limit_kind(), LimitKind::Lower);
        assert_eq!(lower.limit(), Some(Value::Int32(2)));
        assert_eq!(lower.actual_value(), Some(Value::Int32(1)));

        let null: ArgumentError = NullArgument::named("v").into();
        assert_eq!(null.limit_kind(), LimitKind::None);
        assert_eq!(null.limit(), None);
        assert!(null.is_null());
        assert!(lower.is_out_of_range());
    }
}
