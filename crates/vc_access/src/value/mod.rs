//! The dynamic value model traversed by the accessor.

mod array;
mod key;

#[cfg(feature = "serde")]
mod serde;

pub use array::Array;
pub use key::Key;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ObjectRef;

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value.
///
/// Scalars and [`Array`]s have value semantics: cloning copies them. Objects
/// are shared [`ObjectRef`] handles, so cloning a `Value::Object` aliases the
/// same object.
///
/// `PartialEq` is strict: `Int(1)` and `Float(1.0)` differ, and objects are
/// equal only if they are the same handle. See [`Value::loose_eq`] for the
/// lenient comparison.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Array),
    Object(ObjectRef),
}

impl Value {
    /// Returns the name of this value's type, or the class name for objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{Array, Value};
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::from(Array::new()).type_name(), "array");
    /// ```
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Bool(_) => Cow::Borrowed("bool"),
            Self::Int(_) => Cow::Borrowed("int"),
            Self::Float(_) => Cow::Borrowed("float"),
            Self::String(_) => Cow::Borrowed("string"),
            Self::Array(_) => Cow::Borrowed("array"),
            Self::Object(object) => Cow::Owned(object.class_name()),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(int) => Some(*int),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the items of an iterable value.
    ///
    /// Arrays yield their values in order, objects yield [`Object::items`].
    /// Everything else is not iterable and returns `None`.
    ///
    /// [`Object::items`]: crate::Object::items
    pub fn items(&self) -> Option<Vec<Value>> {
        match self {
            Self::Array(array) => Some(array.values().cloned().collect()),
            Self::Object(object) => object.borrow().items(),
            _ => None,
        }
    }

    /// Lenient equality.
    ///
    /// Integers and floats compare numerically, arrays compare entry-wise
    /// with `loose_eq`, and distinct objects defer to [`Object::loose_eq`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::Value;
    ///
    /// assert!(Value::Int(2).loose_eq(&Value::Float(2.0)));
    /// assert_ne!(Value::Int(2), Value::Float(2.0));
    /// ```
    ///
    /// [`Object::loose_eq`]: crate::Object::loose_eq
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
            (Self::Array(a), Self::Array(b)) => a.loose_eq(b),
            (Self::Object(a), Self::Object(b)) => {
                if a.ptr_eq(b) {
                    return true;
                }
                // Both borrows are shared, so comparing an object to itself is fine.
                a.borrow().loose_eq(b)
            }
            _ => self == other,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {$(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value $(as $cast)?)
            }
        }
    )*};
}

impl_from! {
    bool => Bool,
    i64 => Int,
    i32 => Int as i64,
    u32 => Int as i64,
    f64 => Float,
    f32 => Float as f64,
    String => String,
    Array => Array,
    ObjectRef => Object,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<Key> for Value {
    #[inline]
    fn from(key: Key) -> Self {
        match key {
            Key::Int(int) => Self::Int(int),
            Key::Str(s) => Self::String(s),
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    #[inline]
    fn from(values: Vec<V>) -> Self {
        Self::Array(values.into())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    #[inline]
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    #[inline]
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Array, Value};
    use crate::Record;
    use alloc::vec;

    #[test]
    fn strict_equality() {
        assert_eq!(Value::from(1), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Null, Value::Bool(false));
        assert_eq!(Value::from(vec!["a", "b"]), Value::from(vec!["a", "b"]));
    }

    #[test]
    fn objects_compare_by_handle() {
        let a = Record::new("Tag").with_field("name", "x").into_ref();
        let b = Record::new("Tag").with_field("name", "x").into_ref();
        assert_eq!(Value::from(a.clone()), Value::from(a.clone()));
        assert_ne!(Value::from(a.clone()), Value::from(b.clone()));
        assert!(Value::from(a).loose_eq(&Value::from(b)));
    }

    #[test]
    fn loose_arrays_compare_by_key() {
        let a = Array::from([("x", Value::Int(1)), ("y", Value::Float(2.0))]);
        let b = Array::from([("y", Value::Int(2)), ("x", Value::Float(1.0))]);
        assert!(Value::from(a).loose_eq(&Value::from(b)));
    }

    #[test]
    fn items() {
        assert_eq!(
            Value::from(vec![1, 2]).items(),
            Some(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(Value::from("s").items(), None);
        assert_eq!(Value::Null.items(), None);
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
