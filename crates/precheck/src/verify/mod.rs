//! Always-on precondition checks
//!
//! Every function takes the value(s) to check plus the caller's parameter
//! name, and returns `Ok(())` when the precondition holds or the first
//! violation as an [`ArgumentError`]. Checks are pure: nothing is read or
//! written besides the arguments, and nothing is allocated until a failure is
//! built.
//!
//! # Families
//!
//! - **Presence**: [`not_null`], [`not_empty`], [`not_empty_collection`],
//!   [`not_empty_or_whitespace`]
//! - **Range** (for `i32`, `i64`, `f64`, `TimeDelta`): [`is_positive`],
//!   [`is_strictly_positive`], [`is_greater_than`], [`is_less_than`],
//!   [`is_strictly_greater_than`], [`is_strictly_less_than`], [`is_in_range`],
//!   [`is_strictly_in_range`]
//! - **Types**: [`is_interface`], [`is_instantiable`], [`is_assignable_to`],
//!   [`is_subclass_of`]
//! - **Array segments**: [`array_segment`], [`array_segment_range`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use precheck::verify;
//!
//! fn resize(width: i32, height: i32) -> Result<(), precheck::ArgumentError> {
//!     verify::is_in_range(width, 1, 4096, "width")?;
//!     verify::is_in_range(height, 1, 4096, "height")?;
//!     Ok(())
//! }
//! ```

mod presence;
mod range;
mod segment;
mod types;

pub use presence::{not_empty, not_empty_collection, not_empty_or_whitespace, not_null};
pub use range::{
    is_greater_than, is_in_range, is_less_than, is_positive, is_strictly_greater_than,
    is_strictly_in_range, is_strictly_less_than, is_strictly_positive,
};
pub use segment::{array_segment, array_segment_range};
pub use types::{is_assignable_to, is_instantiable, is_interface, is_subclass_of};

use crate::error::ArgumentError;
use crate::messages::Reason;

/// Finishes a failure on the cold path.
#[cold]
#[inline(never)]
fn fail(error: impl Into<ArgumentError>) -> ArgumentError {
    let error = error.into();
    tracing::trace!(
        target: "precheck",
        kind = ?error.kind(),
        reason = error.reason().map(Reason::code),
        param = error.param_name(),
        "precondition violated"
    );
    error
}
