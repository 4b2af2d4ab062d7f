//! Type-relationship checks over [`TypeDescriptor`]s

use std::borrow::Cow;

use super::fail;
use crate::descriptor::TypeDescriptor;
use crate::error::{ArgumentError, InvalidArgument, NullArgument};
use crate::messages::Reason;

/// Fails unless the descriptor is present and describes an interface.
pub fn is_interface(
    ty: Option<&TypeDescriptor>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    let Some(ty) = ty else {
        return Err(fail(NullArgument::named(param)));
    };
    if !ty.is_interface() {
        return Err(fail(InvalidArgument::because(
            Reason::ArgumentIsInterface,
            param,
        )));
    }
    Ok(())
}

/// Fails unless the descriptor is present and describes a type that can be
/// instantiated: not an interface, not abstract, not an open generic.
pub fn is_instantiable(
    ty: Option<&TypeDescriptor>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    let Some(ty) = ty else {
        return Err(fail(NullArgument::named(param)));
    };
    if !ty.is_instantiable() {
        return Err(fail(InvalidArgument::because(
            Reason::ArgumentIsInstantiable,
            param,
        )));
    }
    Ok(())
}

/// Fails unless both descriptors are present and `ty` is assignable to
/// `target`. A type is assignable to itself.
pub fn is_assignable_to(
    ty: Option<&TypeDescriptor>,
    target: Option<&TypeDescriptor>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    let (Some(ty), Some(target)) = (ty, target) else {
        return Err(fail(NullArgument::named(param)));
    };
    if !ty.is_assignable_to(target) {
        return Err(fail(InvalidArgument::because(
            Reason::ArgumentIsAssignableTo,
            param,
        )));
    }
    Ok(())
}

/// Fails unless `ty` strictly derives from `base`. A type is not its own
/// subclass.
///
/// A missing `base` is reported under the literal parameter name `"type"`,
/// not `param`; existing callers match on it.
pub fn is_subclass_of(
    ty: Option<&TypeDescriptor>,
    base: Option<&TypeDescriptor>,
    param: impl Into<Cow<'static, str>>,
) -> Result<(), ArgumentError> {
    let Some(ty) = ty else {
        return Err(fail(NullArgument::named(param)));
    };
    let Some(base) = base else {
        return Err(fail(NullArgument::named("type")));
    };
    if !ty.is_subclass_of(base) {
        return Err(fail(InvalidArgument::because(
            Reason::ArgumentIsSubclassOf,
            param,
        )));
    }
    Ok(())
}
