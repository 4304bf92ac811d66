use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::{Capabilities, Inspect, MethodInfo, Object, ObjectRef, Visibility};
use crate::hash::HashMap;
use crate::{Array, Key, Value, camelize};

/// The body of a [`DynamicObject`] method.
///
/// Methods operate on the object's field table and receive the call
/// arguments in order.
pub type MethodFn = Box<dyn FnMut(&mut Array, Vec<Value>) -> Value>;

struct Method {
    info: MethodInfo,
    body: MethodFn,
}

// -----------------------------------------------------------------------------
// DynamicObject

/// An object whose class is described at runtime.
///
/// Fields live in an [`Array`] keyed by field name, each declared with a
/// [`Visibility`]. Methods are closures over that field table.
///
/// Some method names switch on fallback capabilities:
///
/// - `__get(name)` / `__set(name, value)`: [`Capabilities::MAGIC_GET`] /
///   [`Capabilities::MAGIC_SET`].
/// - `offsetGet(key)` and `offsetSet(key, value)`, both required:
///   [`Capabilities::INDEX_ACCESS`].
///
/// # Examples
///
/// ```
/// use vc_access::{DynamicObject, PropertyAccessor, ParsedPath, Value, Visibility};
///
/// let author = DynamicObject::new("Author")
///     .with_field("name", Visibility::Private, "Ada")
///     .with_getter("name")
///     .into_ref();
///
/// let mut root = Value::from(author);
/// let path = ParsedPath::parse("name").unwrap();
/// let name = PropertyAccessor::new().get_value(&mut root, &path).unwrap();
/// assert_eq!(name, Value::from("Ada"));
/// ```
pub struct DynamicObject {
    class: String,
    fields: Array,
    visibility: HashMap<String, Visibility>,
    methods: HashMap<String, Method>,
    capabilities: Capabilities,
    iterable: Option<String>,
}

impl DynamicObject {
    /// Creates an object of class `class` without members.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Array::new(),
            visibility: HashMap::default(),
            methods: HashMap::default(),
            capabilities: Capabilities::empty(),
            iterable: None,
        }
    }

    /// Declares a field with an initial value.
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        visibility: Visibility,
        value: impl Into<Value>,
    ) -> Self {
        let name = name.into();
        self.fields.insert(Key::from(name.as_str()), value);
        self.visibility.insert(name, visibility);
        self
    }

    /// Declares a method.
    pub fn with_method(
        mut self,
        name: impl Into<String>,
        info: MethodInfo,
        body: impl FnMut(&mut Array, Vec<Value>) -> Value + 'static,
    ) -> Self {
        let method = Method {
            info,
            body: Box::new(body),
        };
        self.methods.insert(name.into(), method);
        self
    }

    /// Declares a public `get<Field>()` method returning the field.
    pub fn with_getter(self, field: &str) -> Self {
        let key = Key::from(field);
        let name = format!("get{}", camelize(field));
        self.with_method(name, MethodInfo::public(0), move |fields, _| {
            fields.get(&key).cloned().unwrap_or_default()
        })
    }

    /// Declares a public `set<Field>(value)` method assigning the field.
    pub fn with_setter(self, field: &str) -> Self {
        let key = Key::from(field);
        let name = format!("set{}", camelize(field));
        self.with_method(name, MethodInfo::public(1), move |fields, args| {
            let value = args.into_iter().next().unwrap_or_default();
            fields.insert(key.clone(), value);
            Value::Null
        })
    }

    /// Adds capabilities on top of the ones implied by the declared methods.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities |= capabilities;
        self
    }

    /// Makes the object iterable over the items of `field`.
    pub fn iterable_over(mut self, field: impl Into<String>) -> Self {
        self.iterable = Some(field.into());
        self
    }

    #[inline]
    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }

    /// The field table, including undeclared fields.
    #[inline]
    pub fn fields(&self) -> &Array {
        &self.fields
    }

    #[inline]
    pub fn fields_mut(&mut self) -> &mut Array {
        &mut self.fields
    }

    #[inline]
    pub fn field_value(&self, name: &str) -> Option<&Value> {
        self.fields.get_str(name)
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    fn invoke(&mut self, name: &str, args: Vec<Value>) -> Value {
        match self.methods.get_mut(name) {
            Some(method) => (method.body)(&mut self.fields, args),
            None => {
                log::warn!("call to undeclared method `{}::{name}()`", self.class);
                Value::Null
            }
        }
    }
}

impl Inspect for DynamicObject {
    #[inline]
    fn class_name(&self) -> &str {
        &self.class
    }

    fn method(&self, name: &str) -> Option<MethodInfo> {
        self.methods.get(name).map(|method| method.info)
    }

    fn field(&self, name: &str) -> Option<Visibility> {
        self.visibility.get(name).copied()
    }

    fn capabilities(&self) -> Capabilities {
        let mut capabilities = self.capabilities;
        if self.has_method("__get") {
            capabilities |= Capabilities::MAGIC_GET;
        }
        if self.has_method("__set") {
            capabilities |= Capabilities::MAGIC_SET;
        }
        if self.has_method("offsetGet") && self.has_method("offsetSet") {
            capabilities |= Capabilities::INDEX_ACCESS;
        }
        capabilities
    }
}

impl Object for DynamicObject {
    #[inline]
    fn call(&mut self, name: &str, args: Vec<Value>) -> Value {
        self.invoke(name, args)
    }

    fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.get_str(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(Key::from(name), value);
    }

    fn magic_get(&mut self, name: &str) -> Value {
        self.invoke("__get", vec![Value::from(name)])
    }

    fn magic_set(&mut self, name: &str, value: Value) {
        self.invoke("__set", vec![Value::from(name), value]);
    }

    /// Calls `offsetGet(key)`; a `null` result counts as a missing entry.
    fn offset_get(&mut self, key: &Key) -> Option<Value> {
        match self.invoke("offsetGet", vec![Value::from(key.clone())]) {
            Value::Null => None,
            value => Some(value),
        }
    }

    fn offset_set(&mut self, key: Key, value: Value) {
        self.invoke("offsetSet", vec![Value::from(key), value]);
    }

    fn items(&self) -> Option<Vec<Value>> {
        let field = self.iterable.as_deref()?;
        Some(self.fields.get_str(field).and_then(Value::items).unwrap_or_default())
    }

    /// Objects of the same class are loosely equal if their fields are.
    fn loose_eq(&self, other: &ObjectRef) -> bool {
        other
            .with::<DynamicObject, _>(|other| {
                other.class == self.class && other.fields.loose_eq(&self.fields)
            })
            .unwrap_or(false)
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicObject")
            .field("class", &self.class)
            .field("fields", &self.fields)
            .field("capabilities", &self.capabilities())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests
