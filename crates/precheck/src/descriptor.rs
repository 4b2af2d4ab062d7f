//! Type descriptors for the type-relationship checks
//!
//! Rust has no runtime type hierarchy to inspect, so the type checks work on
//! descriptors the host builds for the types it cares about: a kind, an
//! optional base type, and the interfaces implemented directly.
//!
//! ```rust,ignore
//! use precheck::descriptor::TypeDescriptor;
//!
//! let plugin = TypeDescriptor::interface("IPlugin").build();
//! let base = TypeDescriptor::abstract_class("PluginBase").implements(&plugin).build();
//! let http = TypeDescriptor::class("HttpPlugin").extends(&base).build();
//!
//! assert!(http.is_assignable_to(&plugin));
//! assert!(http.is_subclass_of(&base));
//! assert!(!http.is_subclass_of(&plugin));
//! ```
//!
//! Identity is the full name: two descriptors with the same name describe the
//! same type.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// KIND
// ============================================================================

/// What a descriptor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// An interface: no instances of its own.
    Interface,
    /// An abstract class.
    Abstract,
    /// A concrete class.
    Class,
    /// A value type.
    Value,
}

// ============================================================================
// DESCRIPTOR
// ============================================================================

/// A host-provided description of a type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    name: Cow<'static, str>,
    kind: TypeKind,
    generic_definition: bool,
    base: Option<Arc<TypeDescriptor>>,
    interfaces: Vec<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// Starts a descriptor of the given kind.
    pub fn builder(name: impl Into<Cow<'static, str>>, kind: TypeKind) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            descriptor: TypeDescriptor {
                name: name.into(),
                kind,
                generic_definition: false,
                base: None,
                interfaces: Vec::new(),
            },
        }
    }

    /// Starts an interface descriptor.
    pub fn interface(name: impl Into<Cow<'static, str>>) -> TypeDescriptorBuilder {
        Self::builder(name, TypeKind::Interface)
    }

    /// Starts an abstract class descriptor.
    pub fn abstract_class(name: impl Into<Cow<'static, str>>) -> TypeDescriptorBuilder {
        Self::builder(name, TypeKind::Abstract)
    }

    /// Starts a concrete class descriptor.
    pub fn class(name: impl Into<Cow<'static, str>>) -> TypeDescriptorBuilder {
        Self::builder(name, TypeKind::Class)
    }

    /// Starts a value type descriptor.
    pub fn value_type(name: impl Into<Cow<'static, str>>) -> TypeDescriptorBuilder {
        Self::builder(name, TypeKind::Value)
    }

    /// Full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Base type, if any.
    pub fn base(&self) -> Option<&Arc<TypeDescriptor>> {
        self.base.as_ref()
    }

    /// Interfaces implemented directly.
    pub fn interfaces(&self) -> &[Arc<TypeDescriptor>] {
        &self.interfaces
    }

    /// Returns true for interfaces.
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Returns true for abstract classes.
    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }

    /// Returns true for generic definitions with unbound parameters.
    pub fn is_generic_definition(&self) -> bool {
        self.generic_definition
    }

    /// Returns true when instances of the type can be created.
    pub fn is_instantiable(&self) -> bool {
        !(self.is_interface() || self.is_abstract() || self.generic_definition)
    }

    /// Returns true when both descriptors describe the same type.
    pub fn same_type(&self, other: &TypeDescriptor) -> bool {
        self.name == other.name
    }

    /// Walks the base chain, nearest first, excluding `self`.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.base.as_deref(),
        }
    }

    /// Returns true when `self` strictly derives from `base` through the base
    /// chain. A type is not its own subclass, and interfaces never count.
    pub fn is_subclass_of(&self, base: &TypeDescriptor) -> bool {
        self.ancestors().any(|ancestor| ancestor.same_type(base))
    }

    /// Returns true when a value of `self` can be stored where `target` is
    /// expected: `self` is `target`, derives from it, or implements it.
    pub fn is_assignable_to(&self, target: &TypeDescriptor) -> bool {
        if self.same_type(target) {
            return true;
        }
        if target.is_interface() {
            return self.implements(target);
        }
        self.is_subclass_of(target)
    }

    fn implements(&self, interface: &TypeDescriptor) -> bool {
        std::iter::once(self)
            .chain(self.ancestors())
            .flat_map(|ty| ty.interfaces.iter())
            .any(|direct| direct.same_type(interface) || direct.implements(interface))
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other)
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Iterator over a descriptor's base chain.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a TypeDescriptor>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TypeDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base.as_deref();
        Some(current)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`TypeDescriptor`].
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until built"]
pub struct TypeDescriptorBuilder {
    descriptor: TypeDescriptor,
}

impl TypeDescriptorBuilder {
    /// Sets the base type.
    pub fn extends(mut self, base: &Arc<TypeDescriptor>) -> Self {
        self.descriptor.base = Some(Arc::clone(base));
        self
    }

    /// Adds a directly implemented interface (or, for an interface, a
    /// super-interface).
    pub fn implements(mut self, interface: &Arc<TypeDescriptor>) -> Self {
        self.descriptor.interfaces.push(Arc::clone(interface));
        self
    }

    /// Marks the type as a generic definition with unbound parameters.
    pub fn generic_definition(mut self) -> Self {
        self.descriptor.generic_definition = true;
        self
    }

    /// Finishes the descriptor.
    pub fn build(self) -> Arc<TypeDescriptor> {
        Arc::new(self.descriptor)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Hierarchy {
        disposable: Arc<TypeDescriptor>,
        stream: Arc<TypeDescriptor>,
        base: Arc<TypeDescriptor>,
        file: Arc<TypeDescriptor>,
        list: Arc<TypeDescriptor>,
    }

    fn hierarchy() -> Hierarchy {
        let disposable = TypeDescriptor::interface("IDisposable").build();
        let stream = TypeDescriptor::interface("IStream")
            .implements(&disposable)
            .build();
        let base = TypeDescriptor::abstract_class("StreamBase")
            .implements(&stream)
            .build();
        let file = TypeDescriptor::class("FileStream").extends(&base).build();
        let list = TypeDescriptor::class("List`1").generic_definition().build();
        Hierarchy {
            disposable,
            stream,
            base,
            file,
            list,
        }
    }

    #[test]
    fn assignability_follows_bases_and_interfaces() {
        let h = hierarchy();
        assert!(h.file.is_assignable_to(&h.file));
        assert!(h.file.is_assignable_to(&h.base));
        assert!(h.file.is_assignable_to(&h.stream));
        assert!(h.file.is_assignable_to(&h.disposable));
        assert!(h.stream.is_assignable_to(&h.disposable));
        assert!(!h.base.is_assignable_to(&h.file));
        assert!(!h.disposable.is_assignable_to(&h.stream));
    }

    #[test]
    fn subclass_is_strict_and_ignores_interfaces() {
        let h = hierarchy();
        assert!(h.file.is_subclass_of(&h.base));
        assert!(!h.file.is_subclass_of(&h.file));
        assert!(!h.file.is_subclass_of(&h.stream));
    }

    #[test]
    fn instantiable_excludes_interfaces_abstracts_and_open_generics() {
        let h = hierarchy();
        assert!(h.file.is_instantiable());
        assert!(!h.stream.is_instantiable());
        assert!(!h.base.is_instantiable());
        assert!(!h.list.is_instantiable());
        assert!(TypeDescriptor::value_type("Point").build().is_instantiable());
    }

    #[test]
    fn ancestors_walk_nearest_first() {
        let h = hierarchy();
        let names: Vec<_> = h.file.ancestors().map(TypeDescriptor::name).collect();
        assert_eq!(names, ["StreamBase"]);
    }
}
