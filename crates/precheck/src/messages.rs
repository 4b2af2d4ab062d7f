//! Diagnostic message table
//!
//! Every failure raised by a check resolves its text from this table. The
//! sentences are fixed; callers are allowed to match on message prefixes, so
//! changing any of them is a breaking change.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// REASON TEXT
// ============================================================================

/// Text for [`Reason::ArgumentNull`].
pub const ARGUMENT_NULL: &str = "Null values are invalid.";
/// Text for [`Reason::ArgumentEmptyString`].
pub const ARGUMENT_EMPTY_STRING: &str = "Empty strings are invalid.";
/// Text for [`Reason::ArgumentEmptyCollection`].
pub const ARGUMENT_EMPTY_COLLECTION: &str = "Empty collections are invalid.";
/// Text for [`Reason::ArgumentIsPositive`].
pub const ARGUMENT_IS_POSITIVE: &str = "Negative values are invalid.";
/// Text for [`Reason::ArgumentIsStrictlyPositive`].
pub const ARGUMENT_IS_STRICTLY_POSITIVE: &str = "Zero or negative values are invalid.";
/// Text for [`Reason::ArgumentIsGreaterThan`].
pub const ARGUMENT_IS_GREATER_THAN: &str =
    "Values exceeding the inclusive lower limit are invalid.";
/// Text for [`Reason::ArgumentIsLessThan`].
pub const ARGUMENT_IS_LESS_THAN: &str = "Values exceeding the inclusive upper limit are invalid.";
/// Text for [`Reason::ArgumentIsStrictlyGreaterThan`].
pub const ARGUMENT_IS_STRICTLY_GREATER_THAN: &str =
    "Values exceeding the exclusive lower limit are invalid.";
/// Text for [`Reason::ArgumentIsStrictlyLessThan`].
pub const ARGUMENT_IS_STRICTLY_LESS_THAN: &str =
    "Values exceeding the exclusive upper limit are invalid.";
/// Text for [`Reason::ArgumentIsInterface`].
pub const ARGUMENT_IS_INTERFACE: &str =
    "Types representing concrete classes or value types are invalid.";
/// Text for [`Reason::ArgumentIsInstantiable`].
pub const ARGUMENT_IS_INSTANTIABLE: &str =
    "Types representing interface or abstract base classes are invalid.";
/// Text for [`Reason::ArgumentIsAssignableTo`].
pub const ARGUMENT_IS_ASSIGNABLE_TO: &str = "Types not assignable to a specific type are invalid.";
/// Text for [`Reason::ArgumentIsSubclassOf`].
pub const ARGUMENT_IS_SUBCLASS_OF: &str =
    "Types not derived from a specific base class are invalid.";

// ============================================================================
// DEFAULTS AND LABELS
// ============================================================================

/// Base text of an invalid-argument failure built without a reason.
pub const ARGUMENT_INVALID: &str = "Values violating a precondition are invalid.";
/// Base text of an out-of-range failure built without a reason.
pub const ARGUMENT_OUT_OF_RANGE: &str = "Values outside the permitted range are invalid.";

/// Prefix of the lower-limit line.
pub const LOWER_LIMIT: &str = "Lower limit: ";
/// Prefix of the upper-limit line.
pub const UPPER_LIMIT: &str = "Upper limit: ";
/// Prefix of the parameter-name line.
pub const PARAMETER_NAME: &str = "Parameter name: ";
/// Prefix of the actual-value line. The line ends with a period.
pub const ACTUAL_VALUE: &str = "Actual value was ";

// ============================================================================
// REASON
// ============================================================================

/// Why a check failed.
///
/// Serializes under its variant name (`"ArgumentNull"`, ...), which is also
/// the key used in the message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    /// A required value was absent.
    ArgumentNull,
    /// A string had zero length (or was blank, for the whitespace check).
    ArgumentEmptyString,
    /// A sequence produced no elements.
    ArgumentEmptyCollection,
    /// A value was negative.
    ArgumentIsPositive,
    /// A value was zero or negative.
    ArgumentIsStrictlyPositive,
    /// A value fell below an inclusive lower limit.
    ArgumentIsGreaterThan,
    /// A value rose above an inclusive upper limit.
    ArgumentIsLessThan,
    /// A value did not exceed an exclusive lower limit.
    ArgumentIsStrictlyGreaterThan,
    /// A value did not stay under an exclusive upper limit.
    ArgumentIsStrictlyLessThan,
    /// A type descriptor did not describe an interface.
    ArgumentIsInterface,
    /// A type descriptor described something that cannot be instantiated.
    ArgumentIsInstantiable,
    /// A type was not assignable to the target type.
    ArgumentIsAssignableTo,
    /// A type did not strictly derive from the base type.
    ArgumentIsSubclassOf,
}

impl Reason {
    /// Every reason, in table order.
    pub const ALL: [Reason; 13] = [
        Reason::ArgumentNull,
        Reason::ArgumentEmptyString,
        Reason::ArgumentEmptyCollection,
        Reason::ArgumentIsPositive,
        Reason::ArgumentIsStrictlyPositive,
        Reason::ArgumentIsGreaterThan,
        Reason::ArgumentIsLessThan,
        Reason::ArgumentIsStrictlyGreaterThan,
        Reason::ArgumentIsStrictlyLessThan,
        Reason::ArgumentIsInterface,
        Reason::ArgumentIsInstantiable,
        Reason::ArgumentIsAssignableTo,
        Reason::ArgumentIsSubclassOf,
    ];

    /// The fixed sentence for this reason.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Reason::ArgumentNull => ARGUMENT_NULL,
            Reason::ArgumentEmptyString => ARGUMENT_EMPTY_STRING,
            Reason::ArgumentEmptyCollection => ARGUMENT_EMPTY_COLLECTION,
            Reason::ArgumentIsPositive => ARGUMENT_IS_POSITIVE,
            Reason::ArgumentIsStrictlyPositive => ARGUMENT_IS_STRICTLY_POSITIVE,
            Reason::ArgumentIsGreaterThan => ARGUMENT_IS_GREATER_THAN,
            Reason::ArgumentIsLessThan => ARGUMENT_IS_LESS_THAN,
            Reason::ArgumentIsStrictlyGreaterThan => ARGUMENT_IS_STRICTLY_GREATER_THAN,
            Reason::ArgumentIsStrictlyLessThan => ARGUMENT_IS_STRICTLY_LESS_THAN,
            Reason::ArgumentIsInterface => ARGUMENT_IS_INTERFACE,
            Reason::ArgumentIsInstantiable => ARGUMENT_IS_INSTANTIABLE,
            Reason::ArgumentIsAssignableTo => ARGUMENT_IS_ASSIGNABLE_TO,
            Reason::ArgumentIsSubclassOf => ARGUMENT_IS_SUBCLASS_OF,
        }
    }

    /// Stable snake_case code for programmatic handling and log fields.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Reason::ArgumentNull => "argument_null",
            Reason::ArgumentEmptyString => "argument_empty_string",
            Reason::ArgumentEmptyCollection => "argument_empty_collection",
            Reason::ArgumentIsPositive => "argument_is_positive",
            Reason::ArgumentIsStrictlyPositive => "argument_is_strictly_positive",
            Reason::ArgumentIsGreaterThan => "argument_is_greater_than",
            Reason::ArgumentIsLessThan => "argument_is_less_than",
            Reason::ArgumentIsStrictlyGreaterThan => "argument_is_strictly_greater_than",
            Reason::ArgumentIsStrictlyLessThan => "argument_is_strictly_less_than",
            Reason::ArgumentIsInterface => "argument_is_interface",
            Reason::ArgumentIsInstantiable => "argument_is_instantiable",
            Reason::ArgumentIsAssignableTo => "argument_is_assignable_to",
            Reason::ArgumentIsSubclassOf => "argument_is_subclass_of",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ============================================================================
// TESTS
// ============================================================================
