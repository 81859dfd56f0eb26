//! Heterogeneous values stored in directive groups and option bags.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::inherit::{Inheritable, InheritableList, InheritableMap};

/// One directive value.
///
/// The scalar variants overwrite on inheritance; the container variants
/// ([`Value::Map`], [`Value::List`], [`Value::Config`]) merge recursively.
/// Opaque payloads carry whatever the declaration layer needs to smuggle
/// through to the traversal engine — getter overrides, render callbacks —
/// and are cloned by handle.
#[derive(Clone)]
pub enum Value {
    /// Boolean scalar; also the representation of feature markers.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// String scalar.
    Str(String),
    /// Opaque payload shared by handle and compared by identity.
    Opaque(Arc<dyn Any + Send + Sync>),
    /// Nested named map; merges per key on inheritance.
    Map(InheritableMap),
    /// Nested ordered list; appends the parent's elements on inheritance.
    List(InheritableList<Value>),
    /// Nested sub-mapping configuration; inherits recursively.
    Config(Box<Config>),
}

impl Value {
    /// Wraps an arbitrary payload for storage in an option bag.
    #[must_use]
    pub fn opaque<T: Any + Send + Sync>(payload: T) -> Self {
        Self::Opaque(Arc::new(payload))
    }

    /// Whether this value receives recursive-merge treatment on inheritance.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::List(_) | Self::Config(_))
    }

    /// Truthiness as seen by declaration markers: everything except
    /// `Bool(false)` counts as set.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// The string slice held by a [`Value::Str`], if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// The boolean held by a [`Value::Bool`], if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// The integer held by a [`Value::Int`], if any.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// The nested map held by a [`Value::Map`], if any.
    #[must_use]
    pub const fn as_map(&self) -> Option<&InheritableMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The nested configuration held by a [`Value::Config`], if any.
    #[must_use]
    pub fn as_config(&self) -> Option<&Config> {
        match self {
            Self::Config(config) => Some(config),
            _ => None,
        }
    }

    /// Mutable access to the nested configuration, if any.
    pub fn as_config_mut(&mut self) -> Option<&mut Config> {
        match self {
            Self::Config(config) => Some(config),
            _ => None,
        }
    }

    /// Downcasts an opaque payload to a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(payload) => payload.downcast_ref(),
            _ => None,
        }
    }
}

impl Inheritable for Value {
    /// Same-shaped containers merge recursively; every other pairing
    /// (scalar over scalar, scalar over container, mismatched container
    /// shapes) overwrites with an independent copy of the parent's value.
    fn inherit_from(&mut self, parent: &Self) {
        match (self, parent) {
            (Self::Map(own), Self::Map(from)) => own.inherit_from(from),
            (Self::List(own), Self::List(from)) => own.inherit_from(from),
            (Self::Config(own), Self::Config(from)) => own.inherit_from(from),
            (own, from) => *own = from.deep_clone(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Self::Int(number) => f.debug_tuple("Int").field(number).finish(),
            Self::Str(text) => f.debug_tuple("Str").field(text).finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::List(list) => f.debug_tuple("List").field(list).finish(),
            Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<InheritableMap> for Value {
    fn from(map: InheritableMap) -> Self {
        Self::Map(map)
    }
}

impl From<InheritableList<Value>> for Value {
    fn from(list: InheritableList<Value>) -> Self {
        Self::List(list)
    }
}

impl From<Config> for Value {
    fn from(config: Config) -> Self {
        Self::Config(Box::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn only_false_is_falsy() {
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(0).is_truthy());
    }

    #[test]
    fn opaque_payloads_downcast_by_type() {
        let value = Value::opaque(42_u8);
        assert_eq!(value.downcast_ref::<u8>(), Some(&42));
        assert_eq!(value.downcast_ref::<u16>(), None);
        assert_eq!(Value::from("text").downcast_ref::<u8>(), None);
    }

    #[test]
    fn containers_are_classified() {
        assert!(Value::Map(crate::InheritableMap::new()).is_container());
        assert!(!Value::from("scalar").is_container());
        assert!(!Value::opaque(()).is_container());
    }
}
