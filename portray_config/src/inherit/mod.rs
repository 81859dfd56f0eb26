//! The inheritable-container capability and its two concrete shapes.
//!
//! A container is *inheritable* when it can absorb a same-shaped peer in
//! place without corrupting that peer, and can produce an independent copy
//! of itself. Two shapes implement the capability: [`InheritableList`]
//! (merge = append copies of the parent's elements) and [`InheritableMap`]
//! (merge = recursive per-key reconciliation). [`Config`](crate::Config) and
//! [`Definition`](crate::Definition) build on the same contract so that
//! nested sub-mapping configurations inherit recursively.

use indexmap::IndexMap;

use crate::value::Value;

/// Capability shared by every container that participates in inheritance.
///
/// `inherit_from` merges the parent's state into `self` without ever
/// mutating the parent. Calling it twice with the same parent re-applies the
/// same key-union walk and is safe: scalars settle on the same final value
/// and re-merging an already-merged map is a no-op union. The ordered-list
/// shape is the exception — each call appends the parent's elements again,
/// so callers merge a given (child, parent) pair at most once.
pub trait Inheritable: Clone {
    /// Merges `parent` into `self` in place.
    fn inherit_from(&mut self, parent: &Self);

    /// Produces a copy sharing no mutable state with `self`.
    ///
    /// Rust's ownership model makes a structural [`Clone`] deep, so the
    /// default implementation simply clones. Opaque payloads held behind an
    /// [`Arc`](std::sync::Arc) stay shared; they are scalars under the merge
    /// rules and immutable.
    #[must_use]
    fn deep_clone(&self) -> Self {
        self.clone()
    }
}

/// Ordered sequence of inheritable elements.
///
/// Merging appends a deep copy of each of the parent's elements after the
/// list's own, preserving the relative order on both sides.
///
/// # Examples
///
/// ```rust
/// use portray_config::{Inheritable, InheritableList, Value};
///
/// let mut child: InheritableList<Value> = [Value::from("a")].into_iter().collect();
/// let parent: InheritableList<Value> = [Value::from("b")].into_iter().collect();
/// child.inherit_from(&parent);
/// assert_eq!(child.len(), 2);
/// assert_eq!(parent.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InheritableList<T> {
    items: Vec<T>,
}

impl<T> InheritableList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` after the existing elements.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of elements held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for InheritableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a InheritableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Inheritable> Inheritable for InheritableList<T> {
    fn inherit_from(&mut self, parent: &Self) {
        self.items
            .extend(parent.items.iter().map(Inheritable::deep_clone));
    }
}

/// Insertion-ordered map from name to [`Value`].
///
/// Merging walks the parent's keys in the parent's own order:
///
/// - a key the map already holds with a container value is merged
///   recursively in place;
/// - every other parent entry is stored as an independent copy, *including*
///   over a scalar the map set itself. A child's own plain scalar is
///   clobbered by the parent's value during inheritance; only
///   container-valued entries receive additive treatment. This asymmetry is
///   load-bearing — downstream declarations rely on it — so it must not be
///   "corrected" here.
///
/// Keys present only in the map are untouched. Keys new to the map append
/// after the existing entries, in the parent's order.
#[derive(Clone, Debug, Default)]
pub struct InheritableMap {
    entries: IndexMap<String, Value>,
}

impl InheritableMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Stores `value` under `name`, returning the value it displaced.
    ///
    /// An existing name keeps its position; a fresh name appends.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    /// Looks up the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Mutable lookup of the value stored under `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.get_mut(name)
    }

    /// Removes and returns the value stored under `name`, preserving the
    /// order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.shift_remove(name)
    }

    /// Whether a value is stored under `name`.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over the stored names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for InheritableMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl Inheritable for InheritableMap {
    fn inherit_from(&mut self, parent: &Self) {
        for (name, parent_value) in &parent.entries {
            if let Some(own) = self.entries.get_mut(name) {
                if own.is_container() {
                    own.inherit_from(parent_value);
                    continue;
                }
            }
            self.entries.insert(name.clone(), parent_value.deep_clone());
        }
    }
}
