use vc_path::ParsedPath;

use crate::{AccessError, PropertyAccessor, Value};

/// Path access on a [`Value`] with a default [`PropertyAccessor`].
///
/// The path is parsed on every call. To reuse a path, or to configure the
/// inflector or equality policy, use [`PropertyAccessor`] with a
/// [`ParsedPath`] instead.
///
/// # Examples
///
/// ```
/// use vc_access::{Array, AccessError, Value, ValuePathAccess};
///
/// let mut root = Value::from(Array::new());
/// root.set_value_at("[a][b]", 1).unwrap();
/// assert_eq!(root.value_at("[a][b]").unwrap(), Value::Int(1));
///
/// assert!(matches!(root.value_at("a..b"), Err(AccessError::Malformed(_))));
/// ```
pub trait ValuePathAccess {
    /// See [`PropertyAccessor::get_value`].
    fn value_at(&mut self, path: &str) -> Result<Value, AccessError>;

    /// See [`PropertyAccessor::set_value`].
    fn set_value_at(&mut self, path: &str, value: impl Into<Value>) -> Result<(), AccessError>;
}

impl ValuePathAccess for Value {
    #[inline(never)]
    fn value_at(&mut self, path: &str) -> Result<Value, AccessError> {
        let path = ParsedPath::parse(path)?;
        PropertyAccessor::new().get_value(self, &path)
    }

    #[inline(never)]
    fn set_value_at(&mut self, path: &str, value: impl Into<Value>) -> Result<(), AccessError> {
        let path = ParsedPath::parse(path)?;
        PropertyAccessor::new().set_value(self, &path, value)
    }
}
