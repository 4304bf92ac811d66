use alloc::string::String;
use core::fmt;

// -----------------------------------------------------------------------------
// Key

/// A key of an [`Array`](crate::Array).
///
/// Path index tokens are strings; [`Key::from_token`] turns canonical decimal
/// integers into [`Key::Int`] so that `[3]` and a pushed third element
/// address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Creates a key from an index token.
    ///
    /// `"0"`, `"42"` and `"-7"` become integers; `"007"`, `"-0"`, `"+1"` and
    /// values outside of `i64` stay strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::Key;
    ///
    /// assert_eq!(Key::from_token("3"), Key::Int(3));
    /// assert_eq!(Key::from_token("-3"), Key::Int(-3));
    /// assert_eq!(Key::from_token("03"), Key::Str("03".into()));
    /// assert_eq!(Key::from_token("name"), Key::Str("name".into()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match canonical_int(token) {
            Some(int) => Self::Int(int),
            None => Self::Str(token.into()),
        }
    }

    /// Returns the integer key, if this is one.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            Self::Str(_) => None,
        }
    }

    /// Returns the string key, if this is one.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(s) => Some(s),
        }
    }
}

fn canonical_int(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == token.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical { token.parse().ok() } else { None }
}

impl From<i64> for Key {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_token(value)
    }
}

impl From<String> for Key {
    #[inline]
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(int) => Self::Int(int),
            None => Self::Str(value),
        }
    }
}

impl fmt::Display for Key {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(int) => fmt::Display::fmt(int, f),
            Self::Str(s) => f.write_str(s),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
