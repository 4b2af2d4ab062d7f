//! Null and emptiness checks

use std::borrow::Cow;

use super::fail;
use crate::error::{ArgumentError, InvalidArgument, NullArgument};
use crate::messages::Reason;

/// Fails with [`NullArgument`] when `value` is absent.
///
/// Owned optionals pass through `Option::as_ref` / `Option::as_deref`.
#[inline]
pub fn not_null<T: ?Sized>(
    value: Option<&T>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    match value {
        Some(_) => Ok(()),
        None => Err(fail(NullArgument::named(param))),
    }
}

/// Fails when the string is absent or has zero length.
///
/// Whitespace-only strings pass; see [`not_empty_or_whitespace`].
#[inline]
pub fn not_empty(
    value: Option<&str>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    match value {
        None => Err(fail(NullArgument::named(param))),
        Some("") => Err(fail(InvalidArgument::because(
            Reason::ArgumentEmptyString,
            param,
        ))),
        Some(_) => Ok(()),
    }
}

/// Fails when the sequence is absent or yields no elements.
///
/// An exact `size_hint` answers without iterating. Otherwise at most one
/// element is pulled, so pass `&mut iter` or `&collection` when the sequence
/// is needed afterwards.
pub fn not_empty_collection<I: IntoIterator>(
    value: Option<I>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    let Some(items) = value else {
        return Err(fail(NullArgument::named(param)));
    };

    let mut iter = items.into_iter();
    let empty = match iter.size_hint() {
        (_, Some(0)) => true,
        (lower, _) if lower > 0 => false,
        _ => iter.next().is_none(),
    };

    if empty {
        Err(fail(InvalidArgument::because(
            Reason::ArgumentEmptyCollection,
            param,
        )))
    } else {
        Ok(())
    }
}

/// Fails when the string is absent, empty, or only whitespace.
#[inline]
pub fn not_empty_or_whitespace(
    value: Option<&str>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    match value {
        None => Err(fail(NullArgument::named(param))),
        Some(s) if s.chars().all(char::is_whitespace) => Err(fail(InvalidArgument::because(
            Reason::ArgumentEmptyString,
            param,
        ))),
        Some(_) => Ok(()),
    }
}
