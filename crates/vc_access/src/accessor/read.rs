use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use vc_inflect::Inflector;

use super::PropertyAccessor;
use crate::error::{Access, AccessError, InvalidPropertyError, Member};
use crate::{Array, Capabilities, Key, ObjectRef, Value, camelize};

impl<I: Inflector> PropertyAccessor<I> {
    /// Reads property `name` of `object`.
    pub(super) fn read_property(&self, object: &ObjectRef, name: &str) -> Result<Value, AccessError> {
        let mut object = object.borrow_mut();
        let camel = camelize(name);
        let getters = [
            format!("get{camel}"),
            format!("is{camel}"),
            format!("has{camel}"),
        ];

        for getter in &getters {
            if let Some(method) = object.method(getter) {
                if !method.is_public() {
                    return Err(AccessError::AccessDenied {
                        class: object.class_name().into(),
                        member: Member::Method(getter.clone()),
                    });
                }
                return Ok(object.call(getter, Vec::new()));
            }
        }

        let capabilities = object.capabilities();
        if capabilities.contains(Capabilities::MAGIC_GET) {
            return Ok(object.magic_get(name));
        }

        if let Some(visibility) = object.field(name) {
            if !visibility.is_public() {
                let [getter, ..] = getters;
                return Err(AccessError::AccessDenied {
                    class: object.class_name().into(),
                    member: Member::Field {
                        name: name.into(),
                        accessor: getter,
                    },
                });
            }
            return Ok(object.get_field(name).unwrap_or_default());
        }

        if capabilities.contains(Capabilities::DYNAMIC_FIELDS)
            && let Some(value) = object.get_field(name)
        {
            return Ok(value);
        }

        Err(AccessError::UnknownProperty {
            class: object.class_name().into(),
            property: name.into(),
            tried: Vec::from(getters),
        })
    }

    /// Reads offset `token` of `object`.
    ///
    /// With `vivify`, a missing entry is set to an empty array first.
    pub(super) fn read_index(
        &self,
        object: &ObjectRef,
        token: &str,
        vivify: bool,
    ) -> Result<Value, AccessError> {
        let mut object = object.borrow_mut();
        if !object.capabilities().contains(Capabilities::INDEX_ACCESS) {
            return Err(not_indexable(token, object.class_name(), Access::Read));
        }

        let key = Key::from_token(token);
        match object.offset_get(&key) {
            Some(value) => Ok(value),
            None if vivify => {
                log::trace!("created missing array at offset [{token}] of `{}`", object.class_name());
                object.offset_set(key, Value::Array(Array::new()));
                Ok(Value::Array(Array::new()))
            }
            None => Ok(Value::Null),
        }
    }
}

pub(super) fn not_indexable(token: &str, class: &str, access: Access) -> AccessError {
    InvalidPropertyError::NotIndexable {
        index: String::from(token),
        class: class.into(),
        access,
    }
    .into()
}
