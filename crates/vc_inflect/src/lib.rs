//! Singular forms of plural identifiers.
//!
//! Writing a collection-valued property such as `tags` goes through an
//! adder/remover pair (`addTag`/`removeTag`). When the path does not spell
//! out the singular explicitly, an [`Inflector`] proposes candidates.
//!
//! # Examples
//!
//! ```
//! use vc_inflect::{EnglishInflector, Inflector};
//!
//! let inflector = EnglishInflector::new();
//! assert_eq!(inflector.singular_forms("Tags"), ["Tag"]);
//! assert_eq!(inflector.singular_forms("Children"), ["Child"]);
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

mod english;

// -----------------------------------------------------------------------------
// Exports

pub use english::EnglishInflector;

use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Inflector

/// Proposes singular forms for a plural identifier.
///
/// Candidates are returned most-likely-first. An implementation must return
/// at least one candidate; when nothing better is known, the word itself.
///
/// Implemented for closures, so tests and callers can plug in a fixed table:
///
/// ```
/// use vc_inflect::Inflector;
///
/// let fixed = |_: &str| vec![String::from("Foo")];
/// assert_eq!(fixed.singular_forms("Whatever"), ["Foo"]);
/// ```
pub trait Inflector {
    /// Returns candidate singular forms of `plural`.
    fn singular_forms(&self, plural: &str) -> Vec<String>;
}

impl<F> Inflector for F
where
    F: Fn(&str) -> Vec<String>,
{
    #[inline]
    fn singular_forms(&self, plural: &str) -> Vec<String> {
        self(plural)
    }
}
