//! Host objects and the capability queries the accessor runs against them.
//!
//! Member resolution is split in two traits:
//!
//! - [`Inspect`] answers questions: does a method or field exist, how visible
//!   is it, which fallback capabilities does the class have.
//! - [`Object`] performs the operations that [`Inspect`] advertised.
//!
//! The accessor only calls an [`Object`] operation after the matching
//! [`Inspect`] query succeeded, so implementations may treat unexpected
//! calls as no-ops.

mod dynamic;
mod handle;
mod record;

pub use dynamic::{DynamicObject, MethodFn};
pub use handle::ObjectRef;
pub use record::Record;

use alloc::vec::Vec;
use core::any::Any;

use bitflags::bitflags;

use crate::{Key, Value};

// -----------------------------------------------------------------------------
// Visibility

/// The visibility of a method or field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// What [`Inspect::method`] reports about a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    pub visibility: Visibility,
    /// The number of parameters without a default value.
    pub required_params: usize,
}

impl MethodInfo {
    #[inline]
    pub const fn new(visibility: Visibility, required_params: usize) -> Self {
        Self {
            visibility,
            required_params,
        }
    }

    /// A public method with `required_params` required parameters.
    #[inline]
    pub const fn public(required_params: usize) -> Self {
        Self::new(Visibility::Public, required_params)
    }

    #[inline]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}

// -----------------------------------------------------------------------------
// Capabilities

bitflags! {
    /// Fallback behaviors a class supports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Unknown properties are read through [`Object::magic_get`].
        const MAGIC_GET      = 1 << 0;
        /// Unknown properties are written through [`Object::magic_set`].
        const MAGIC_SET      = 1 << 1;
        /// Undeclared fields can be read and written directly.
        const DYNAMIC_FIELDS = 1 << 2;
        /// Index elements (`[key]`) go through [`Object::offset_get`] and
        /// [`Object::offset_set`].
        const INDEX_ACCESS   = 1 << 3;
    }
}

// -----------------------------------------------------------------------------
// Inspect

/// Queries about the members of an object.
pub trait Inspect {
    /// The class name used in error messages.
    fn class_name(&self) -> &str;

    /// Looks up a method by exact name.
    fn method(&self, name: &str) -> Option<MethodInfo> {
        let _ = name;
        None
    }

    /// Looks up a declared field by exact name.
    fn field(&self, name: &str) -> Option<Visibility> {
        let _ = name;
        None
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

// -----------------------------------------------------------------------------
// Object

/// A host object the accessor can read from and write to.
///
/// Objects are shared through [`ObjectRef`] handles.
pub trait Object: Inspect + Any {
    /// Invokes a method found through [`Inspect::method`].
    fn call(&mut self, name: &str, args: Vec<Value>) -> Value;

    /// Reads a declared field, or an undeclared one if the class has
    /// [`Capabilities::DYNAMIC_FIELDS`]. Unset fields read as `None`.
    fn get_field(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }

    fn set_field(&mut self, name: &str, value: Value) {
        let _ = (name, value);
    }

    fn magic_get(&mut self, name: &str) -> Value {
        let _ = name;
        Value::Null
    }

    fn magic_set(&mut self, name: &str, value: Value) {
        let _ = (name, value);
    }

    /// Reads the entry at `key`, `None` if there is none.
    fn offset_get(&mut self, key: &Key) -> Option<Value> {
        let _ = key;
        None
    }

    fn offset_set(&mut self, key: Key, value: Value) {
        let _ = (key, value);
    }

    /// The items of an iterable object, `None` if the object is not iterable.
    fn items(&self) -> Option<Vec<Value>> {
        None
    }

    /// Lenient equality against another object, see [`Value::loose_eq`].
    ///
    /// `other` is never the same handle as `self`.
    fn loose_eq(&self, other: &ObjectRef) -> bool {
        let _ = other;
        false
    }
}
