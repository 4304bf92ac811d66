use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use vc_inflect::Inflector;
use vc_path::PathElement;

use super::PropertyAccessor;
use crate::error::{AccessError, InvalidPropertyError};
use crate::{Inspect, ObjectRef, Value, camelize, capitalize};

/// The `add*`/`remove*` method names of a collection property.
pub(super) struct AdderRemover {
    adder: String,
    remover: String,
}

impl AdderRemover {
    fn new(singular: &str) -> Self {
        Self {
            adder: format!("add{singular}"),
            remover: format!("remove{singular}"),
        }
    }
}

/// A public method taking exactly one required argument.
fn is_collection_method(object: &dyn Inspect, name: &str) -> bool {
    object
        .method(name)
        .is_some_and(|method| method.is_public() && method.required_params == 1)
}

impl<I: Inflector> PropertyAccessor<I> {
    /// Looks up the adder/remover pair of property `element`.
    ///
    /// An explicit singular (`tags|tag`) must name an existing pair. Without
    /// one, the inflector's candidates are tried in order; `Ok(None)` means no
    /// candidate matched any method and the property is written directly.
    pub(super) fn find_adder_and_remover(
        &self,
        object: &ObjectRef,
        element: &PathElement,
    ) -> Result<Option<AdderRemover>, AccessError> {
        let object = object.borrow();

        if let Some(singular) = element.singular() {
            let pair = AdderRemover::new(&capitalize(singular));
            for method in [&pair.adder, &pair.remover] {
                if !is_collection_method(&*object, method) {
                    return Err(InvalidPropertyError::MissingCollectionMethod {
                        method: method.clone(),
                        class: object.class_name().into(),
                    }
                    .into());
                }
            }
            return Ok(Some(pair));
        }

        let plural = camelize(element.name());
        for singular in self.inflector.singular_forms(&plural) {
            let pair = AdderRemover::new(&singular);
            let adder = is_collection_method(&*object, &pair.adder);
            let remover = is_collection_method(&*object, &pair.remover);

            let (found, missing) = match (adder, remover) {
                (true, true) => return Ok(Some(pair)),
                (false, false) => continue,
                (true, false) => (pair.adder, pair.remover),
                (false, true) => (pair.remover, pair.adder),
            };
            return Err(InvalidPropertyError::IncompleteCollectionPair {
                found,
                missing,
                class: object.class_name().into(),
            }
            .into());
        }

        log::debug!(
            "no adder/remover pair for `{}.{}`, using the setter",
            object.class_name(),
            element.name()
        );
        Ok(None)
    }

    /// Replaces the items of collection property `name` with `items` by
    /// calling the remover and adder for the differences only.
    pub(super) fn reconcile(
        &self,
        object: &ObjectRef,
        name: &str,
        items: Vec<Value>,
        pair: &AdderRemover,
    ) -> Result<(), AccessError> {
        let previous = self.read_property(object, name)?.items().unwrap_or_default();

        let mut matched = vec![false; items.len()];
        let mut removals = Vec::new();
        for old in previous {
            let counterpart = items
                .iter()
                .zip(&matched)
                .position(|(new, &taken)| !taken && self.equality.matches(&old, new));
            match counterpart {
                Some(position) => matched[position] = true,
                None => removals.push(old),
            }
        }
        let additions: Vec<Value> = items
            .into_iter()
            .zip(matched)
            .filter_map(|(new, taken)| (!taken).then_some(new))
            .collect();

        let mut object = object.borrow_mut();
        log::debug!(
            "reconciling `{}.{name}`: {} removal(s), {} addition(s)",
            object.class_name(),
            removals.len(),
            additions.len()
        );
        for item in removals {
            object.call(&pair.remover, vec![item]);
        }
        for item in additions {
            object.call(&pair.adder, vec![item]);
        }
        Ok(())
    }
}
