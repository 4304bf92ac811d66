//! Path traversal over values and objects.

mod collection;
mod read;
mod write;


use vc_inflect::{EnglishInflector, Inflector};
use vc_path::ParsedPath;

use crate::error::{Access, AccessError, InvalidPropertyError};
use crate::{Array, Key, Value};

// -----------------------------------------------------------------------------
// Equality

/// How collection writes match old items against new ones.
///
/// An old item that matches a new item is kept untouched; see
/// [`PropertyAccessor::set_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Equality {
    /// Strict equality: same type and value, objects by handle identity.
    #[default]
    Identity,
    /// [`Value::loose_eq`]: numbers compare across `Int` and `Float`, and
    /// distinct objects may be equal through [`Object::loose_eq`].
    ///
    /// [`Object::loose_eq`]: crate::Object::loose_eq
    Loose,
}

impl Equality {
    /// Returns `true` if `a` and `b` are equal under this policy.
    #[inline]
    pub fn matches(self, a: &Value, b: &Value) -> bool {
        match self {
            Self::Identity => a == b,
            Self::Loose => a.loose_eq(b),
        }
    }
}

// -----------------------------------------------------------------------------
// PropertyAccessor

/// Reads and writes values at [`ParsedPath`]s.
///
/// The accessor holds no state besides its configuration, so one instance
/// can serve any number of paths and roots.
///
/// # Traversal
///
/// - An index element (`[key]`) descends into an [`Array`] in place, or goes
///   through [`Object::offset_get`] for objects with
///   [`Capabilities::INDEX_ACCESS`]. Missing keys before the last element
///   are filled with empty arrays.
/// - A property element (`.name`) resolves against an object in this order:
///   `getName()`, `isName()`, `hasName()`, the magic getter, a declared
///   field, an undeclared field of a class with
///   [`Capabilities::DYNAMIC_FIELDS`].
///
/// Writes resolve `setName(value)`, the magic setter, a declared field and
/// finally a dynamic field. When the written value is iterable, an
/// `addItem`/`removeItem` pair is preferred over the setter.
///
/// # Examples
///
/// ```
/// use vc_access::{ParsedPath, PropertyAccessor, Record, Value};
///
/// let child = Record::new("Child").with_field("name", "old").into_ref();
/// let mut root = Value::from(Record::new("Parent").with_field("child", child.clone()).into_ref());
///
/// let accessor = PropertyAccessor::new();
/// let path = ParsedPath::parse("child.name").unwrap();
/// accessor.set_value(&mut root, &path, "new").unwrap();
///
/// assert_eq!(accessor.get_value(&mut root, &path).unwrap(), Value::from("new"));
/// assert_eq!(child.with::<Record, _>(|c| c.get("name").cloned()).flatten(), Some(Value::from("new")));
/// ```
///
/// [`Object::offset_get`]: crate::Object::offset_get
/// [`Capabilities::INDEX_ACCESS`]: crate::Capabilities::INDEX_ACCESS
/// [`Capabilities::DYNAMIC_FIELDS`]: crate::Capabilities::DYNAMIC_FIELDS
#[derive(Debug, Clone)]
pub struct PropertyAccessor<I = EnglishInflector> {
    inflector: I,
    equality: Equality,
}

impl PropertyAccessor {
    /// Creates an accessor with the [`EnglishInflector`] and
    /// [`Equality::Identity`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            inflector: EnglishInflector::new(),
            equality: Equality::Identity,
        }
    }
}

impl Default for PropertyAccessor {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Inflector> PropertyAccessor<I> {
    /// Replaces the inflector used to guess adder and remover names.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::PropertyAccessor;
    ///
    /// let accessor = PropertyAccessor::new()
    ///     .with_inflector(|plural: &str| vec![plural.trim_end_matches('s').to_string()]);
    /// ```
    #[inline]
    pub fn with_inflector<J: Inflector>(self, inflector: J) -> PropertyAccessor<J> {
        PropertyAccessor {
            inflector,
            equality: self.equality,
        }
    }

    /// Sets how collection writes compare items.
    #[inline]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }

    #[inline]
    pub fn inflector(&self) -> &I {
        &self.inflector
    }

    #[inline]
    pub fn equality(&self) -> Equality {
        self.equality
    }

    /// Returns the value at `path`.
    ///
    /// A missing key at the last element reads as [`Value::Null`]. Missing
    /// keys before it are created as empty arrays in `root`.
    pub fn get_value(&self, root: &mut Value, path: &ParsedPath) -> Result<Value, AccessError> {
        self.traverse(root, path, 0, path.len(), false, |value| Ok(value.clone()))
    }

    /// Writes `value` at `path`.
    ///
    /// Containers along the way are modified in place, and missing keys are
    /// created as empty arrays. An array that was read from an object
    /// property or offset, and that the nested write changed, is written back
    /// through the same property once the nested write succeeded.
    ///
    /// For an iterable `value` written to a property with an adder/remover
    /// pair, old items without an equal new item are removed first (in old
    /// order), then new items without an equal old item are added (in new
    /// order).
    pub fn set_value(
        &self,
        root: &mut Value,
        path: &ParsedPath,
        value: impl Into<Value>,
    ) -> Result<(), AccessError> {
        let last = path.len() - 1;
        let value = value.into();
        self.traverse(root, path, 0, last, true, |target| {
            self.write_element(target, path, last, value)
        })
    }

    /// Walks `path[index..end]` from `current`, then runs `terminal` on the
    /// reached slot.
    ///
    /// With `commit`, arrays read out of objects are written back after
    /// `terminal` returned, if it changed them.
    fn traverse<R>(
        &self,
        current: &mut Value,
        path: &ParsedPath,
        index: usize,
        end: usize,
        commit: bool,
        terminal: impl FnOnce(&mut Value) -> Result<R, AccessError>,
    ) -> Result<R, AccessError> {
        if index == end {
            return terminal(current);
        }

        let element = &path.elements()[index];
        let vivify = index + 1 < path.len();

        match current {
            Value::Array(array) => {
                if element.is_property() {
                    let access = if commit { Access::Write } else { Access::Read };
                    return Err(InvalidPropertyError::PropertyOnArray {
                        property: element.name().into(),
                        access,
                    }
                    .into());
                }

                let key = Key::from_token(element.name());
                if vivify || array.contains_key(&key) {
                    let slot = array.get_or_insert_with(key, || {
                        log::trace!("created missing array at \"{}\"", path.prefix(index + 1));
                        Value::Array(Array::new())
                    });
                    self.traverse(slot, path, index + 1, end, commit, terminal)
                } else {
                    self.traverse(&mut Value::Null, path, index + 1, end, commit, terminal)
                }
            }
            Value::Object(object) => {
                let object = object.clone();
                let mut slot = if element.is_index() {
                    self.read_index(&object, element.name(), vivify)?
                } else {
                    self.read_property(&object, element.name())?
                };

                let snapshot = (commit && slot.is_array()).then(|| slot.clone());
                let result = self.traverse(&mut slot, path, index + 1, end, commit, terminal)?;

                // Unchanged arrays (including arrays of objects written through
                // their handles) are not written back.
                if commit && slot.is_array() && snapshot.as_ref() != Some(&slot) {
                    log::trace!("writing back \"{}\"", path.prefix(index + 1));
                    if element.is_index() {
                        self.write_index(&object, element.name(), slot)?;
                    } else {
                        self.write_property(&object, element, slot)?;
                    }
                }
                Ok(result)
            }
            other => Err(AccessError::UnexpectedType {
                path: path.prefix(index).into(),
                expected: "object or array",
                actual: other.type_name().into_owned(),
            }),
        }
    }
}
