//! Named property definitions and the ordered store behind a [`Config`].
//!
//! [`Config`]: crate::Config

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{PortrayError, PortrayResult};
use crate::inherit::{Inheritable, InheritableMap};
use crate::normalize_name;
use crate::value::Value;

/// Option key marking a declaration as an amendment of an existing property.
///
/// A truthy value under this key switches [`Definitions::set`] from
/// replace-by-name to merge-into-existing. The marker is consumed by the
/// store and never reaches the stored option bag.
pub const INHERIT_OPTION: &str = "inherit";

/// One declared property: a stable name plus its option bag.
///
/// The option bag may carry a nested [`Config`](crate::Config) for
/// structured sub-values; because a `Definition` is itself inheritable,
/// such nested configurations inherit recursively when mappings derive
/// from one another.
#[derive(Clone, Debug)]
pub struct Definition {
    name: String,
    options: InheritableMap,
}

impl Definition {
    /// Creates a definition for `name`, normalizing it to canonical form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portray_config::{Definition, InheritableMap};
    ///
    /// let definition = Definition::new(":title", InheritableMap::new());
    /// assert_eq!(definition.name(), "title");
    /// ```
    #[must_use]
    pub fn new(name: &str, options: InheritableMap) -> Self {
        Self {
            name: normalize_name(name),
            options,
        }
    }

    /// The property's canonical name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a single option.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// The full option bag.
    #[must_use]
    pub fn options(&self) -> &InheritableMap {
        &self.options
    }

    /// Mutable access to the option bag.
    pub fn options_mut(&mut self) -> &mut InheritableMap {
        &mut self.options
    }
}

impl Inheritable for Definition {
    fn inherit_from(&mut self, parent: &Self) {
        self.options.inherit_from(&parent.options);
    }
}

/// Ordered, name-keyed store of [`Definition`]s.
///
/// Iteration order equals declaration order. Re-declaring an existing name
/// replaces the definition in place without moving it; definitions first
/// seen during inheritance append after the existing entries. Redeclaration
/// is deliberately not an error — last write wins, as in a plain map.
///
/// `Clone` is structural, so copies never share option bags with the
/// original.
#[derive(Clone, Debug, Default)]
pub struct Definitions {
    entries: IndexMap<String, Definition>,
}

impl Definitions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Declares a property, or amends an existing one.
    ///
    /// Without the [`INHERIT_OPTION`] marker this stores a brand-new
    /// [`Definition`] under the normalized name — an identity replace, not a
    /// merge. With a truthy marker, the marker is removed and the remaining
    /// bag is merged into the already-declared definition, whose position is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`PortrayError::UnknownDefinition`] when an amendment names a
    /// property that was never declared.
    pub fn set(&mut self, name: &str, mut options: InheritableMap) -> PortrayResult<&mut Definition> {
        let key = normalize_name(name);
        let amend = options
            .remove(INHERIT_OPTION)
            .is_some_and(|marker| marker.is_truthy());
        if amend {
            let existing = self
                .entries
                .get_mut(&key)
                .ok_or(PortrayError::UnknownDefinition { name: key })?;
            existing.options.inherit_from(&options);
            return Ok(existing);
        }

        let definition = Definition {
            name: key.clone(),
            options,
        };
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => {
                slot.insert(definition);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(definition)),
        }
    }

    /// Looks up the definition declared under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.entries.get(normalize_name(name).as_str())
    }

    /// Stores `definition` under its own name, replacing any previous
    /// declaration.
    #[deprecated(since = "0.1.0", note = "use `set` with the property name instead")]
    pub fn append(&mut self, definition: Definition) {
        tracing::warn!(
            name = definition.name(),
            "`append` is deprecated; use `set` with the property name instead"
        );
        self.entries.insert(definition.name.clone(), definition);
    }

    /// Iterates over the definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.entries.values()
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Definitions {
    type Item = &'a Definition;
    type IntoIter = indexmap::map::Values<'a, String, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl Inheritable for Definitions {
    fn inherit_from(&mut self, parent: &Self) {
        for (name, parent_definition) in &parent.entries {
            match self.entries.entry(name.clone()) {
                Entry::Occupied(mut slot) => slot.get_mut().inherit_from(parent_definition),
                Entry::Vacant(slot) => {
                    slot.insert(parent_definition.deep_clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
