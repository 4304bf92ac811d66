use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;
use vc_path::ParseError;

// -----------------------------------------------------------------------------
// Helper types

/// Whether a failing operation was reading or writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read from",
            Self::Write => "written to",
        })
    }
}

/// The member an [`AccessError::AccessDenied`] refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// An accessor method, e.g. `getName`.
    Method(String),
    /// A field, together with the accessor method that would expose it.
    Field { name: String, accessor: String },
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(name) => write!(f, "Method \"{name}()\""),
            Self::Field { name, .. } => write!(f, "Property \"{name}\""),
        }
    }
}

fn access_hint(member: &Member) -> Cow<'static, str> {
    match member {
        Member::Method(_) => Cow::Borrowed(""),
        Member::Field { accessor, .. } => {
            Cow::Owned(format!(". Maybe you should create the method \"{accessor}()\"?"))
        }
    }
}

fn tried_methods(tried: &[String]) -> String {
    let mut out = String::new();
    for method in tried {
        out.push_str(" nor method \"");
        out.push_str(method);
        out.push_str("()\"");
    }
    out
}

// -----------------------------------------------------------------------------
// InvalidPropertyError

/// A path element that cannot apply to the value it reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPropertyError {
    #[error("Index \"[{index}]\" cannot be {access} object of class \"{class}\" because it does not support index access")]
    NotIndexable {
        index: String,
        class: String,
        access: Access,
    },

    #[error("Property \"{property}\" cannot be {access} an array. Maybe you should write the property path as \"[{property}]\" instead?")]
    PropertyOnArray { property: String, access: Access },

    #[error("The public method \"{method}()\" with exactly one required parameter was not found on class \"{class}\"")]
    MissingCollectionMethod { method: String, class: String },

    #[error("Found the public method \"{found}()\", but did not find a public \"{missing}()\" on class \"{class}\"")]
    IncompleteCollectionPair {
        found: String,
        missing: String,
        class: String,
    },
}

// -----------------------------------------------------------------------------
// AccessError

/// An error returned from a failed read or write.
///
/// Errors are never recovered from internally: traversal stops at the first
/// failing element.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The path string could not be parsed.
    #[error(transparent)]
    Malformed(#[from] ParseError),

    /// Traversal reached a value that is neither an object nor an array.
    #[error("Expected argument of type \"{expected}\", \"{actual}\" given at property path \"{path}\"")]
    UnexpectedType {
        /// The part of the path that led to the offending value.
        path: String,
        expected: &'static str,
        actual: String,
    },

    /// No accessor, field or fallback resolves the property.
    #[error("Neither property \"{property}\"{} exists in class \"{class}\"", tried_methods(.tried))]
    UnknownProperty {
        class: String,
        property: String,
        /// The accessor methods that were looked up.
        tried: Vec<String>,
    },

    /// A matching accessor or field exists but is not public.
    #[error("{member} is not public in class \"{class}\"{}", access_hint(.member))]
    AccessDenied { class: String, member: Member },

    /// See [`InvalidPropertyError`].
    #[error(transparent)]
    InvalidProperty(#[from] InvalidPropertyError),
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Access, AccessError, InvalidPropertyError, Member};
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn unknown_property_lists_tried_methods() {
        let err = AccessError::UnknownProperty {
            class: String::from("Author"),
            property: String::from("name"),
            tried: vec![String::from("getName"), String::from("isName")],
        };
        assert_eq!(
            format!("{err}"),
            "Neither property \"name\" nor method \"getName()\" nor method \"isName()\" exists in class \"Author\""
        );
    }

    #[test]
    fn access_denied_on_field_suggests_accessor() {
        let err = AccessError::AccessDenied {
            class: String::from("Author"),
            member: Member::Field {
                name: String::from("secret"),
                accessor: String::from("getSecret"),
            },
        };
        assert_eq!(
            format!("{err}"),
            "Property \"secret\" is not public in class \"Author\". Maybe you should create the method \"getSecret()\"?"
        );

        let err = AccessError::AccessDenied {
            class: String::from("Author"),
            member: Member::Method(String::from("getSecret")),
        };
        assert_eq!(
            format!("{err}"),
            "Method \"getSecret()\" is not public in class \"Author\""
        );
    }

    #[test]
    fn property_on_array_suggests_index() {
        let err: AccessError = InvalidPropertyError::PropertyOnArray {
            property: String::from("foo"),
            access: Access::Read,
        }
        .into();
        assert_eq!(
            format!("{err}"),
            "Property \"foo\" cannot be read from an array. Maybe you should write the property path as \"[foo]\" instead?"
        );
    }
}
