use alloc::vec::Vec;
use core::fmt;

use crate::hash::{FixedHashState, HashMap};
use crate::{Key, Value};

// -----------------------------------------------------------------------------
// Array

/// An insertion-ordered associative container.
///
/// `Array` maps [`Key`]s to [`Value`]s and remembers insertion order, which
/// is also the iteration order. It serves both as a list (keys `0..n`, see
/// [`push`]) and as a map.
///
/// # Examples
///
/// ```
/// use vc_access::{Array, Key, Value};
///
/// let mut array = Array::new();
/// array.push("a");
/// array.insert(Key::from("name"), "Ada");
/// array.push("b");
///
/// let keys: Vec<_> = array.keys().cloned().collect();
/// assert_eq!(keys, [Key::Int(0), Key::from("name"), Key::Int(1)]);
/// assert_eq!(array.get_str("name"), Some(&Value::from("Ada")));
/// ```
///
/// [`push`]: Array::push
#[derive(Clone)]
pub struct Array {
    entries: Vec<(Key, Value)>,
    indices: HashMap<Key, usize>,
    /// `None` once `i64::MAX` was used as a key.
    next_index: Option<i64>,
}

impl Array {
    /// Creates an empty `Array`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `Array` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, FixedHashState),
            next_index: Some(0),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the array holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.indices.contains_key(key)
    }

    /// Returns the value stored at `key`.
    #[inline]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.indices.get(key).map(|&index| &self.entries[index].1)
    }

    /// Returns the value stored at the key written as `token`.
    ///
    /// See [`Key::from_token`] for how the token is interpreted.
    #[inline]
    pub fn get_str(&self, token: &str) -> Option<&Value> {
        self.get(&Key::from_token(token))
    }

    /// Returns a mutable reference to the value stored at `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self.indices.get(key) {
            Some(&index) => Some(&mut self.entries[index].1),
            None => None,
        }
    }

    /// Inserts a value, returning the previous one.
    ///
    /// Replacing an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.indices.get(&key) {
            Some(&index) => Some(core::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.insert_new(key, value);
                None
            }
        }
    }

    /// Appends a value under the next integer key and returns that key.
    ///
    /// The next integer key is one past the largest integer key ever
    /// inserted, or `0`. Returns `None` without inserting if that key would
    /// exceed `i64::MAX`.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let Some(index) = self.next_index else {
            log::warn!("cannot push: the next integer key would overflow `i64`");
            return None;
        };
        let key = Key::Int(index);
        self.insert_new(key.clone(), value.into());
        Some(key)
    }

    /// Returns the value at `key`, inserting the result of `default` first
    /// if the key is absent.
    pub fn get_or_insert_with(&mut self, key: Key, default: impl FnOnce() -> Value) -> &mut Value {
        let index = match self.indices.get(&key) {
            Some(&index) => index,
            None => self.insert_new(key, default()),
        };
        &mut self.entries[index].1
    }

    /// Removes `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let index = self.indices.remove(key)?;
        let (_, value) = self.entries.remove(index);
        for (_, position) in self.indices.iter_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        Some(value)
    }

    /// Removes all entries. Integer keys restart at `0`.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.indices.clear();
        self.next_index = Some(0);
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Compares entry-wise with [`Value::loose_eq`], ignoring order.
    pub fn loose_eq(&self, other: &Array) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|other| value.loose_eq(other)))
    }

    /// Returns `true` if the keys are exactly `0..len` in order.
    pub fn is_list(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| key.as_int() == i64::try_from(index).ok())
    }

    /// Consumes the array, returning its values in order.
    #[inline]
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }

    fn insert_new(&mut self, key: Key, value: Value) -> usize {
        if let Key::Int(int) = key
            && self.next_index.is_some_and(|next| int >= next)
        {
            self.next_index = int.checked_add(1);
        }
        let index = self.entries.len();
        self.indices.insert(key.clone(), index);
        self.entries.push((key, value));
        index
    }
}

impl Default for Array {
    #[inline]
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            indices: HashMap::default(),
            next_index: Some(0),
        }
    }
}

impl PartialEq for Array {
    /// Arrays are equal if they hold equal entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut array = Array::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V: Into<Value>> From<Vec<V>> for Array {
    #[inline]
    fn from(values: Vec<V>) -> Self {
        values.into_iter().collect()
    }
}

impl<K: Into<Key>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Array {
    fn from(entries: [(K, V); N]) -> Self {
        let mut array = Array::with_capacity(N);
        for (key, value) in entries {
            array.insert(key, value);
        }
        array
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = core::iter::Map<
        core::slice::Iter<'a, (Key, Value)>,
        fn(&'a (Key, Value)) -> (&'a Key, &'a Value),
    >;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Array;
    use crate::{Key, Value};
    use alloc::vec::Vec;

    #[test]
    fn push_continues_after_largest_int_key() {
        let mut array = Array::new();
        array.insert(5, "five");
        assert_eq!(array.push("six"), Some(Key::Int(6)));
        array.insert(-3, "neg");
        assert_eq!(array.push("seven"), Some(Key::Int(7)));
    }

    #[test]
    fn push_after_max_key_is_refused() {
        let mut array = Array::new();
        array.insert(i64::MAX, "last");
        assert_eq!(array.push("overflow"), None);
        assert_eq!(array.len(), 1);
        assert_eq!(array.get(&Key::Int(i64::MAX)), Some(&Value::from("last")));

        array.insert(0, "first");
        assert_eq!(array.push("still none"), None);
        assert_eq!(array.len(), 2);

        array.clear();
        assert_eq!(array.push("again"), Some(Key::Int(0)));
    }

    #[test]
    fn replace_keeps_position() {
        let mut array = Array::from([("a", 1), ("b", 2)]);
        assert_eq!(array.insert("a", 3), Some(Value::Int(1)));
        let values: Vec<_> = array.values().cloned().collect();
        assert_eq!(values, [Value::Int(3), Value::Int(2)]);
    }

    #[test]
    fn remove_preserves_order_and_lookups() {
        let mut array: Array = ["x", "y", "z"].into_iter().collect();
        assert_eq!(array.remove(&Key::Int(0)), Some(Value::from("x")));
        assert_eq!(array.get(&Key::Int(2)), Some(&Value::from("z")));
        assert_eq!(array.get(&Key::Int(1)), Some(&Value::from("y")));
        assert_eq!(array.len(), 2);
        assert!(!array.is_list());
        assert_eq!(array.remove(&Key::Int(0)), None);
    }

    #[test]
    fn get_or_insert_with_inserts_once() {
        let mut array = Array::new();
        *array.get_or_insert_with(Key::from("k"), || Value::Int(1)) = Value::Int(2);
        let value = array.get_or_insert_with(Key::from("k"), || Value::Int(9));
        assert_eq!(*value, Value::Int(2));
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Array::from([("a", 1), ("b", 2)]);
        let b = Array::from([("b", 2), ("a", 1)]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert!(Array::from(alloc::vec![1, 2]).is_list());
    }
}
