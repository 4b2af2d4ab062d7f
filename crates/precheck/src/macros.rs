//! Macros for the execution-mode surfaces.
//!
//! # Available Macros
//!
//! - [`debug_verify!`] - run a check only in builds with debug checks active;
//!   otherwise the arguments are never evaluated
//! - [`verify_if!`] - run a check only when a [`CheckSwitch`] is on
//!
//! Internally, `for_each_check!` holds the one list of check signatures that
//! the `debug` and `configurable` twins are generated from, so every surface
//! exposes the same functions with the same arguments.
//!
//! # Examples
//!
//! ```rust,ignore
//! use precheck::{debug_verify, verify_if};
//! use precheck::mode::GlobalSwitch;
//!
//! fn blit(buf: &[u8], offset: i32, count: i32) -> Result<(), precheck::ArgumentError> {
//!     // compiled out of release builds, arguments included
//!     debug_verify!(array_segment_range(Some(buf), offset, count))?;
//!     verify_if!(GlobalSwitch, is_positive(offset, "offset"))?;
//!     Ok(())
//! }
//! ```
//!
//! [`CheckSwitch`]: crate::mode::CheckSwitch

// ============================================================================
// CALL-SITE MACROS
// ============================================================================

/// Runs `precheck::verify::<check>(args..)` when debug checks are active and
/// evaluates to `Ok(())` otherwise.
///
/// The guard is the constant [`DEBUG_CHECKS`](crate::mode::DEBUG_CHECKS), so
/// the inactive branch is removed at compile time and its arguments are never
/// evaluated. They are still type-checked.
///
/// ```rust,ignore
/// precheck::debug_verify!(is_in_range(level, 0, 9, "level"))?;
/// ```
#[macro_export]
macro_rules! debug_verify {
    ($check:ident ( $($arg:expr),* $(,)? )) => {
        if $crate::mode::DEBUG_CHECKS {
            $crate::verify::$check($($arg),*)
        } else {
            ::core::result::Result::<(), $crate::ArgumentError>::Ok(())
        }
    };
}

/// Runs `precheck::verify::<check>(args..)` when `switch` reports enabled and
/// evaluates to `Ok(())` otherwise. Arguments are only evaluated when the
/// check runs.
///
/// ```rust,ignore
/// precheck::verify_if!(GlobalSwitch, not_empty(Some(name), "name"))?;
/// ```
#[macro_export]
macro_rules! verify_if {
    ($switch:expr, $check:ident ( $($arg:expr),* $(,)? )) => {
        if $crate::mode::CheckSwitch::is_enabled(&$switch) {
            $crate::verify::$check($($arg),*)
        } else {
            ::core::result::Result::<(), $crate::ArgumentError>::Ok(())
        }
    };
}

// ============================================================================
// SURFACE GENERATION
// ============================================================================

/// Expands `$callback! { $prefix <every check signature> }`.
///
/// Generic parameters are written in brackets (`fn f[T: Limit](..)`) so the
/// callbacks can match them as plain token trees.
macro_rules! for_each_check {
    ($callback:ident ! { $($prefix:tt)* }) => {
        $callback! {
            $($prefix)*

            /// See [`verify::not_null`](crate::verify::not_null).
            fn not_null[T: ?Sized](
                value: Option<&T>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::not_empty`](crate::verify::not_empty).
            fn not_empty(
                value: Option<&str>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::not_empty_collection`](crate::verify::not_empty_collection).
            fn not_empty_collection[I: IntoIterator](
                value: Option<I>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::not_empty_or_whitespace`](crate::verify::not_empty_or_whitespace).
            fn not_empty_or_whitespace(
                value: Option<&str>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_positive`](crate::verify::is_positive).
            fn is_positive[T: crate::value::Limit](
                value: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_strictly_positive`](crate::verify::is_strictly_positive).
            fn is_strictly_positive[T: crate::value::Limit](
                value: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_greater_than`](crate::verify::is_greater_than).
            fn is_greater_than[T: crate::value::Limit](
                value: T,
                lower: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_less_than`](crate::verify::is_less_than).
            fn is_less_than[T: crate::value::Limit](
                value: T,
                upper: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_strictly_greater_than`](crate::verify::is_strictly_greater_than).
            fn is_strictly_greater_than[T: crate::value::Limit](
                value: T,
                lower: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_strictly_less_than`](crate::verify::is_strictly_less_than).
            fn is_strictly_less_than[T: crate::value::Limit](
                value: T,
                upper: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_in_range`](crate::verify::is_in_range).
            fn is_in_range[T: crate::value::Limit](
                value: T,
                lower: T,
                upper: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_strictly_in_range`](crate::verify::is_strictly_in_range).
            fn is_strictly_in_range[T: crate::value::Limit](
                value: T,
                lower: T,
                upper: T,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_interface`](crate::verify::is_interface).
            fn is_interface(
                ty: Option<&crate::descriptor::TypeDescriptor>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_instantiable`](crate::verify::is_instantiable).
            fn is_instantiable(
                ty: Option<&crate::descriptor::TypeDescriptor>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_assignable_to`](crate::verify::is_assignable_to).
            fn is_assignable_to(
                ty: Option<&crate::descriptor::TypeDescriptor>,
                target: Option<&crate::descriptor::TypeDescriptor>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::is_subclass_of`](crate::verify::is_subclass_of).
            fn is_subclass_of(
                ty: Option<&crate::descriptor::TypeDescriptor>,
                base: Option<&crate::descriptor::TypeDescriptor>,
                param: impl Into<::std::borrow::Cow<'static, str>>,
            );

            /// See [`verify::array_segment`](crate::verify::array_segment).
            fn array_segment[T](array: Option<&[T]>, count: i32);

            /// See [`verify::array_segment_range`](crate::verify::array_segment_range).
            fn array_segment_range[T](array: Option<&[T]>, offset: i32, count: i32);
        }
    };
}

/// Free functions that forward to `crate::verify` when `$guard` holds.
macro_rules! gated_fns {
    (
        guard = $guard:expr;
        $(
            $(#[$meta:meta])*
            fn $name:ident $([$($g:tt)*])? ($($arg:ident: $ty:ty),* $(,)?);
        )*
    ) => {
        $(
            $(#[$meta])*
            #[inline(always)]
            pub fn $name $(<$($g)*>)? ($($arg: $ty),*) -> Result<(), crate::error::ArgumentError> {
                if $guard {
                    crate::verify::$name($($arg),*)
                } else {
                    Ok(())
                }
            }
        )*
    };
}

/// Methods on `Switched<S>` that forward to `crate::verify` when the injected
/// switch is on.
macro_rules! gated_methods {
    (
        $(
            $(#[$meta:meta])*
            fn $name:ident $([$($g:tt)*])? ($($arg:ident: $ty:ty),* $(,)?);
        )*
    ) => {
        impl<S: crate::mode::CheckSwitch> Switched<S> {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $name $(<$($g)*>)? (&self, $($arg: $ty),*) -> Result<(), crate::error::ArgumentError> {
                    if self.switch.is_enabled() {
                        crate::verify::$name($($arg),*)
                    } else {
                        Ok(())
                    }
                }
            )*
        }
    };
}
