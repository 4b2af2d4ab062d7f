//! # Precheck
//!
//! Argument precondition checks that report structured failures.
//!
//! Each check takes a value and the caller's parameter name and returns
//! `Ok(())` or an [`ArgumentError`] carrying the failure kind, the reason,
//! the parameter name, and for range failures the actual value and the
//! violated limit.
//!
//! ## Surfaces
//!
//! - [`verify`]: always-on checks
//! - [`debug`]: the same checks, compiled out of release builds
//! - [`configurable`]: the same checks, gated by a runtime switch
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use precheck::prelude::*;
//!
//! fn read(buf: &[u8], offset: i32, count: i32) -> Result<(), ArgumentError> {
//!     verify::array_segment_range(Some(buf), offset, count)?;
//!     Ok(())
//! }
//!
//! let err = read(&[0; 4], 2, 3).unwrap_err();
//! assert_eq!(err.param_name(), Some("count"));
//! assert_eq!(err.limit(), Some(Value::Int32(4)));
//! ```
//!
//! ## Messages
//!
//! A failure's message is its base text followed by one line per present
//! field:
//!
//! ```text
//! Values exceeding the inclusive upper limit are invalid.
//! Parameter name: count
//! Actual value was 5.
//! Upper limit: 4
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod descriptor;
pub mod error;
pub mod messages;
pub mod mode;
pub mod prelude;
pub mod record;
pub mod value;
pub mod verify;

pub use config::CheckConfig;
pub use descriptor::{TypeDescriptor, TypeKind};
pub use error::{
    ArgumentError, ArgumentExceedsLowerLimit, ArgumentExceedsUpperLimit, ArgumentOutOfRange,
    Cause, FailureKind, InvalidArgument, LimitKind, NullArgument,
};
pub use messages::Reason;
pub use mode::{configurable, debug};
pub use record::{FailureRecord, RecordError};
pub use value::{DurationOutOfRange, Limit, Value};
