//! Read and write nested values through property paths.
//!
//! This crate walks a [`ParsedPath`] through a tree of dynamic [`Value`]s:
//! ordered associative [`Array`]s are descended in place, and host objects
//! are reached through the [`Object`] capability traits, which resolve
//! properties to getters (`getName`, `isName`, `hasName`), catch-all
//! accessors, public fields or schemaless fields.
//!
//! Writing a collection-valued property prefers an adder/remover pair
//! (`addTag`/`removeTag`) over a bulk setter: the new collection is diffed
//! against the current one and only the differences are applied.
//!
//! There are two entry points:
//!
//! - [`PropertyAccessor`]: configurable (inflector, equality policy) and
//!   works on pre-parsed, reusable paths.
//! - [`ValuePathAccess`]: a convenience trait on [`Value`] that parses the
//!   path on every call and uses the default accessor.
//!
//! # Examples
//!
//! ```
//! use vc_access::{Array, PropertyAccessor, Value, ValuePathAccess};
//! use vc_path::ParsedPath;
//!
//! let mut root = Value::from(Array::new());
//!
//! // Missing intermediate arrays are created on demand.
//! root.set_value_at("[user][name]", "Ada").unwrap();
//! assert_eq!(root.value_at("[user][name]").unwrap(), Value::from("Ada"));
//!
//! let accessor = PropertyAccessor::new();
//! let path = ParsedPath::parse("[user][age]").unwrap();
//! assert_eq!(accessor.get_value(&mut root, &path).unwrap(), Value::Null);
//! ```
//!
//! [`ParsedPath`]: vc_path::ParsedPath
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod accessor;
mod error;
mod hash;
mod naming;
mod object;
mod path_access;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use accessor::{Equality, PropertyAccessor};
pub use error::{Access, AccessError, InvalidPropertyError, Member};
pub use naming::{camelize, capitalize};
pub use object::{Capabilities, DynamicObject, MethodFn, MethodInfo, Record, Visibility};
pub use object::{Inspect, Object, ObjectRef};
pub use path_access::ValuePathAccess;
pub use value::{Array, Key, Value};

pub use vc_inflect::{EnglishInflector, Inflector};
pub use vc_path::{ParseError, ParsedPath, PathElement};
