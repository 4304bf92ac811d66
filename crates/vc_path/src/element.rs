use alloc::string::String;
use core::fmt;

use crate::SINGULAR_SEPARATOR;

// -----------------------------------------------------------------------------
// PathElement

/// A **singular** segment of a [`ParsedPath`](crate::ParsedPath).
///
/// An element is either a property (`.name`) or an index (`[name]`), and may
/// carry an explicit singular form (`.tags|tag`) used to pick the
/// adder/remover pair of a collection-valued property.
///
/// # Examples
///
/// ```
/// use vc_path::PathElement;
///
/// let element = PathElement::property("people").with_singular("person");
/// assert_eq!(element.name(), "people");
/// assert_eq!(element.singular(), Some("person"));
/// assert_eq!(element.to_string(), ".people|person");
///
/// let element = PathElement::index("3");
/// assert!(element.is_index());
/// assert_eq!(element.to_string(), "[3]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathElement {
    name: String,
    singular: Option<String>,
    is_index: bool,
}

impl PathElement {
    /// Creates a property element.
    #[inline]
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singular: None,
            is_index: false,
        }
    }

    /// Creates an index element.
    #[inline]
    pub fn index(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singular: None,
            is_index: true,
        }
    }

    /// Sets the explicit singular form of this element.
    #[inline]
    pub fn with_singular(mut self, singular: impl Into<String>) -> Self {
        self.singular = Some(singular.into());
        self
    }

    /// Splits a raw token at the first [`SINGULAR_SEPARATOR`].
    ///
    /// An empty singular (`tags|`) is treated as absent.
    pub(crate) fn from_token(token: &str, is_index: bool) -> Self {
        let (name, singular) = match token.split_once(SINGULAR_SEPARATOR) {
            Some((name, singular)) => (name, Some(singular).filter(|s| !s.is_empty())),
            None => (token, None),
        };

        Self {
            name: name.into(),
            singular: singular.map(Into::into),
            is_index,
        }
    }

    /// Returns the property name or index token.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the explicit singular form, if one was given.
    #[inline]
    pub fn singular(&self) -> Option<&str> {
        self.singular.as_deref()
    }

    /// Returns `true` if the element was written in bracket form.
    #[inline]
    pub fn is_index(&self) -> bool {
        self.is_index
    }

    /// Returns `true` if the element was written in dot or bare form.
    #[inline]
    pub fn is_property(&self) -> bool {
        !self.is_index
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_index {
            f.write_str("[")?;
        } else {
            f.write_str(".")?;
        }
        f.write_str(&self.name)?;
        if let Some(singular) = &self.singular {
            write!(f, "{SINGULAR_SEPARATOR}{singular}")?;
        }
        if self.is_index {
            f.write_str("]")?;
        }
        Ok(())
    }
}
