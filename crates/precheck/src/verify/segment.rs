//! Array-segment bounds checks
//!
//! These report under the fixed parameter names `"array"`, `"offset"` and
//! `"count"`. Offsets and counts are `i32` so that negative input from the
//! caller can be reported rather than rejected by the type system.

use super::fail;
use crate::error::{ArgumentError, ArgumentExceedsUpperLimit, ArgumentOutOfRange, NullArgument};
use crate::messages::Reason;

/// Checks that `array[..count]` is a valid segment.
pub fn array_segment<T>(array: Option<&[T]>, count: i32) -> Result<(), ArgumentError> {
    let Some(array) = array else {
        return Err(fail(NullArgument::named("array")));
    };
    let len = length(array);

    if count < 0 {
        return Err(fail(ArgumentOutOfRange::because(
            Reason::ArgumentIsPositive,
            "count",
            count,
        )));
    }
    if count > len {
        return Err(fail(ArgumentExceedsUpperLimit::because(
            Reason::ArgumentIsLessThan,
            "count",
            count,
            len,
        )));
    }
    Ok(())
}

/// Checks that `array[offset..offset + count]` is a valid segment.
///
/// The offset must lie in `[0, len)`, except that offset 0 is accepted on an
/// empty array. When `offset + count` overflows `i32` the reported actual
/// value saturates at `i32::MAX`.
pub fn array_segment_range<T>(
    array: Option<&[T]>,
    offset: i32,
    count: i32,
) -> Result<(), ArgumentError> {
    let Some(array) = array else {
        return Err(fail(NullArgument::named("array")));
    };
    let len = length(array);

    if offset < 0 {
        return Err(fail(ArgumentOutOfRange::because(
            Reason::ArgumentIsPositive,
            "offset",
            offset,
        )));
    }
    if count < 0 {
        return Err(fail(ArgumentOutOfRange::because(
            Reason::ArgumentIsPositive,
            "count",
            count,
        )));
    }
    if offset != 0 && offset >= len {
        return Err(fail(ArgumentExceedsUpperLimit::because(
            Reason::ArgumentIsStrictlyLessThan,
            "offset",
            offset,
            len,
        )));
    }
    if i64::from(offset) + i64::from(count) > i64::from(len) {
        return Err(fail(ArgumentExceedsUpperLimit::because(
            Reason::ArgumentIsLessThan,
            "count",
            offset.saturating_add(count),
            len,
        )));
    }
    Ok(())
}

fn length<T>(array: &[T]) -> i32 {
    i32::try_from(array.len()).unwrap_or(i32::MAX)
}
