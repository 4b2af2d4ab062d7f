//! Prelude for precondition checks
//!
//! ```rust,ignore
//! use precheck::prelude::*;
//!
//! fn open(path: Option<&str>, retries: i32) -> Result<(), ArgumentError> {
//!     verify::not_empty(path, "path")?;
//!     debug::is_positive(retries, "retries")?;
//!     Ok(())
//! }
//! ```

pub use crate::descriptor::{TypeDescriptor, TypeKind};
pub use crate::error::{
    ArgumentError, ArgumentExceedsLowerLimit, ArgumentExceedsUpperLimit, ArgumentOutOfRange,
    Cause, FailureKind, InvalidArgument, LimitKind, NullArgument,
};
pub use crate::messages::Reason;
pub use crate::mode::{CheckSwitch, FixedSwitch, GlobalSwitch, Switched};
pub use crate::value::{Limit, Value};
pub use crate::{configurable, debug, verify};
pub use crate::{debug_verify, verify_if};
