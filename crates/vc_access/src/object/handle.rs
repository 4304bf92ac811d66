use alloc::rc::Rc;
use alloc::string::String;
use core::any::Any;
use core::cell::{Ref, RefCell, RefMut};
use core::fmt;

use super::Object;

/// A shared, mutable handle to a host [`Object`].
///
/// Cloning the handle aliases the object; [`ptr_eq`](ObjectRef::ptr_eq) is
/// object identity.
///
/// # Examples
///
/// ```
/// use vc_access::{ObjectRef, Record, Value};
///
/// let author = ObjectRef::new(Record::new("Author").with_field("name", "Ada"));
/// let alias = author.clone();
///
/// alias.with_mut::<Record, _>(|record| record.insert("name", "Grace"));
/// let name = author.with::<Record, _>(|record| record.get("name").cloned());
/// assert_eq!(name.flatten(), Some(Value::from("Grace")));
/// assert!(author.ptr_eq(&alias));
/// ```
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<dyn Object>>);

impl ObjectRef {
    #[inline]
    pub fn new<T: Object>(object: T) -> Self {
        Self(Rc::new(RefCell::new(object)))
    }

    /// Immutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently mutably borrowed.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, dyn Object> {
        self.0.borrow()
    }

    /// Mutably borrows the object.
    ///
    /// # Panics
    ///
    /// Panics if the object is currently borrowed.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Object> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles point to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the class name, or `"object"` while the object is mutably
    /// borrowed.
    pub fn class_name(&self) -> String {
        match self.0.try_borrow() {
            Ok(object) => object.class_name().into(),
            Err(_) => String::from("object"),
        }
    }

    /// Runs `f` on the object if it is a `T`.
    pub fn with<T: Object, R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        let object = self.0.borrow();
        let any: &dyn Any = &*object;
        any.downcast_ref::<T>().map(f)
    }

    /// Runs `f` on the object if it is a `T`.
    pub fn with_mut<T: Object, R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut object = self.0.borrow_mut();
        let any: &mut dyn Any = &mut *object;
        any.downcast_mut::<T>().map(f)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(object) => f.debug_tuple("ObjectRef").field(&object.class_name()).finish(),
            Err(_) => f.write_str("ObjectRef(<borrowed>)"),
        }
    }
}
