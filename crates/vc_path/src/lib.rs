//! Parse property paths such as `child.name` or `items[3].tags|tag`.
//!
//! A property path is a sequence of [`PathElement`]s. Each element is either a
//! *property* (written bare for the first element, or after a `.`) or an
//! *index* (written in brackets). Any token may carry an explicit singular
//! form after a `|`, which is used when writing collection-valued properties
//! through adder/remover pairs.
//!
//! # Syntax
//!
//! ```text
//! path         := first continuation*
//! first        := property | '[' index ']'
//! continuation := '.' word | '[' index ']'
//! ```
//!
//! - The first property token may contain anything except `.` and `[`.
//! - A property reached through `.` may only contain word characters
//!   (`A-Z`, `a-z`, `0-9`, `_`), optionally followed by `|singular`.
//! - An index token may contain anything except `]`.
//!
//! # Examples
//!
//! ```
//! use vc_path::ParsedPath;
//!
//! let path = ParsedPath::parse("items[3].tags|tag").unwrap();
//! assert_eq!(path.len(), 3);
//! assert!(path.is_index(1));
//! assert_eq!(path.singular(2), Some("tag"));
//!
//! let parent = path.parent().unwrap();
//! assert_eq!(parent.as_str(), "items[3]");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod element;
mod error;
mod parsed;
mod tokens;

// -----------------------------------------------------------------------------
// Exports

pub use element::PathElement;
pub use error::ParseError;
pub use parsed::ParsedPath;
pub use tokens::{PathTokens, SINGULAR_SEPARATOR};
