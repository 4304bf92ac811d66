use alloc::format;
use alloc::vec;

use vc_inflect::Inflector;
use vc_path::{ParsedPath, PathElement};

use super::PropertyAccessor;
use super::read::not_indexable;
use crate::error::{Access, AccessError, InvalidPropertyError, Member};
use crate::{Capabilities, Key, ObjectRef, Value, camelize};

impl<I: Inflector> PropertyAccessor<I> {
    /// Writes `value` to element `index` of `path` on `target`.
    pub(super) fn write_element(
        &self,
        target: &mut Value,
        path: &ParsedPath,
        index: usize,
        value: Value,
    ) -> Result<(), AccessError> {
        let element = &path.elements()[index];
        match target {
            Value::Array(array) => {
                if element.is_property() {
                    return Err(InvalidPropertyError::PropertyOnArray {
                        property: element.name().into(),
                        access: Access::Write,
                    }
                    .into());
                }
                array.insert(Key::from_token(element.name()), value);
                Ok(())
            }
            Value::Object(object) => {
                let object = object.clone();
                if element.is_index() {
                    self.write_index(&object, element.name(), value)
                } else {
                    self.write_property(&object, element, value)
                }
            }
            other => Err(AccessError::UnexpectedType {
                path: path.prefix(index).into(),
                expected: "object or array",
                actual: other.type_name().into_owned(),
            }),
        }
    }

    pub(super) fn write_index(
        &self,
        object: &ObjectRef,
        token: &str,
        value: Value,
    ) -> Result<(), AccessError> {
        let mut object = object.borrow_mut();
        if !object.capabilities().contains(Capabilities::INDEX_ACCESS) {
            return Err(not_indexable(token, object.class_name(), Access::Write));
        }
        object.offset_set(Key::from_token(token), value);
        Ok(())
    }

    /// Writes property `element` of `object`, through an adder/remover pair
    /// if `value` is iterable and the class has one.
    pub(super) fn write_property(
        &self,
        object: &ObjectRef,
        element: &PathElement,
        value: Value,
    ) -> Result<(), AccessError> {
        if let Some(items) = value.items()
            && let Some(pair) = self.find_adder_and_remover(object, element)?
        {
            return self.reconcile(object, element.name(), items, &pair);
        }
        self.write_direct(object, element.name(), value)
    }

    /// Writes property `name` through the setter, the magic setter or a
    /// field.
    pub(super) fn write_direct(
        &self,
        object: &ObjectRef,
        name: &str,
        value: Value,
    ) -> Result<(), AccessError> {
        let mut object = object.borrow_mut();
        let setter = format!("set{}", camelize(name));

        if let Some(method) = object.method(&setter) {
            if !method.is_public() {
                return Err(AccessError::AccessDenied {
                    class: object.class_name().into(),
                    member: Member::Method(setter),
                });
            }
            object.call(&setter, vec![value]);
            return Ok(());
        }

        let capabilities = object.capabilities();
        if capabilities.contains(Capabilities::MAGIC_SET) {
            object.magic_set(name, value);
            return Ok(());
        }

        if let Some(visibility) = object.field(name) {
            if !visibility.is_public() {
                return Err(AccessError::AccessDenied {
                    class: object.class_name().into(),
                    member: Member::Field {
                        name: name.into(),
                        accessor: setter,
                    },
                });
            }
            object.set_field(name, value);
            return Ok(());
        }

        if capabilities.contains(Capabilities::DYNAMIC_FIELDS) {
            object.set_field(name, value);
            return Ok(());
        }

        Err(AccessError::UnknownProperty {
            class: object.class_name().into(),
            property: name.into(),
            tried: vec![setter],
        })
    }
}
