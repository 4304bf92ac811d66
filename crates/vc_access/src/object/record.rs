use alloc::string::String;
use alloc::vec::Vec;

use super::{Capabilities, Inspect, Object, ObjectRef, Visibility};
use crate::{Array, Key, Value};

/// A schemaless object.
///
/// Every field is public and new fields can be added by writing them, so
/// properties resolve to fields directly. Records declare no methods.
#[derive(Debug, Clone, Default)]
pub struct Record {
    class: String,
    fields: Array,
}

impl Record {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: Array::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    #[inline]
    pub fn into_ref(self) -> ObjectRef {
        ObjectRef::new(self)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get_str(name)
    }

    #[inline]
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(Key::from(name), value)
    }

    #[inline]
    pub fn fields(&self) -> &Array {
        &self.fields
    }
}

impl Inspect for Record {
    #[inline]
    fn class_name(&self) -> &str {
        &self.class
    }

    fn field(&self, name: &str) -> Option<Visibility> {
        self.fields
            .contains_key(&Key::from(name))
            .then_some(Visibility::Public)
    }

    #[inline]
    fn capabilities(&self) -> Capabilities {
        Capabilities::DYNAMIC_FIELDS
    }
}

impl Object for Record {
    fn call(&mut self, name: &str, _args: Vec<Value>) -> Value {
        log::warn!("call to undeclared method `{}::{name}()`", self.class);
        Value::Null
    }

    #[inline]
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    #[inline]
    fn set_field(&mut self, name: &str, value: Value) {
        self.insert(name, value);
    }

    fn loose_eq(&self, other: &ObjectRef) -> bool {
        other
            .with::<Record, _>(|other| {
                other.class == self.class && other.fields.loose_eq(&self.fields)
            })
            .unwrap_or(false)
    }
}
