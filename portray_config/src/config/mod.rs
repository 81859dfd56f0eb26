//! The configuration object owned by each mapping type.
//!
//! A [`Config`] composes exactly three independently inheritable directive
//! groups — feature markers, free-form options and the ordered property
//! definitions — plus the wrap directive resolved at read time.
//!
//! Configurations are built single-threaded at declaration time: the
//! declaration layer populates the groups top to bottom, calls
//! [`inherit_from`](Inheritable::inherit_from) at most once when the
//! mapping derives from a
//! base, and hands the result to the traversal engine. From that point the
//! configuration is frozen — the engine only reads, so a finished `Config`
//! can be shared across traversal workers without locks. Nothing enforces
//! the freeze; it is the contract under which this layer skips all
//! synchronization. Declaration throughput is irrelevant (mappings are
//! declared once, at startup); traversal is the hot path and must not pay
//! for it.

mod wrap;

pub use wrap::{WrapEval, WrapHint, WrapRule};

use std::any::Any;

use crate::definitions::{Definition, Definitions};
use crate::error::PortrayResult;
use crate::infer_name_for;
use crate::inherit::{Inheritable, InheritableMap};
use crate::value::Value;

/// Configuration of one mapping type.
///
/// # Examples
///
/// ```rust
/// use portray_config::{Config, Inheritable, InheritableMap};
///
/// # fn main() -> portray_config::PortrayResult<()> {
/// let mut base = Config::new();
/// base.set("title", InheritableMap::new())?;
///
/// let mut derived = Config::new();
/// derived.inherit_from(&base);
/// assert!(derived.get("title").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    features: InheritableMap,
    options: InheritableMap,
    definitions: Definitions,
    wrap: Option<WrapRule>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the feature `name`.
    pub fn add_feature(&mut self, name: impl Into<String>) {
        self.features.insert(name, Value::Bool(true));
    }

    /// Whether the feature `name` is enabled.
    #[must_use]
    pub fn has_feature(&self, name: &str) -> bool {
        self.features.get(name).is_some_and(Value::is_truthy)
    }

    /// Iterates over the enabled feature names in declaration order.
    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.features.keys()
    }

    /// Stores the free-form option `name`.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(name, value.into());
    }

    /// Looks up the free-form option `name`.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// The full option group.
    #[must_use]
    pub fn options(&self) -> &InheritableMap {
        &self.options
    }

    /// Declares or amends a property. See [`Definitions::set`].
    ///
    /// # Errors
    ///
    /// Returns [`PortrayError::UnknownDefinition`] when an amendment names a
    /// property that was never declared.
    ///
    /// [`PortrayError::UnknownDefinition`]: crate::PortrayError::UnknownDefinition
    pub fn set(&mut self, name: &str, options: InheritableMap) -> PortrayResult<&mut Definition> {
        self.definitions.set(name, options)
    }

    /// Looks up the property declared under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Definition> {
        self.definitions.get(name)
    }

    /// Stores `definition` under its own name. See [`Definitions::append`].
    #[deprecated(since = "0.1.0", note = "use `set` with the property name instead")]
    pub fn append(&mut self, definition: Definition) {
        #[allow(deprecated, reason = "thin shim over the deprecated store path")]
        self.definitions.append(definition);
    }

    /// Iterates over the declared properties in order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter()
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The property definition group.
    #[must_use]
    pub fn definitions(&self) -> &Definitions {
        &self.definitions
    }

    /// Configures how the wrap key name is derived at read time.
    ///
    /// Accepts a literal name, a boolean (`true` = infer from the mapping
    /// type's name, `false` = suppress wrapping) or a deferred
    /// [`WrapRule`] evaluated per mapped instance.
    pub fn set_wrap(&mut self, rule: impl Into<WrapRule>) {
        self.wrap = Some(rule.into());
    }

    /// Computes the wrap key for `name`, or `None` when output should not be
    /// nested.
    ///
    /// Without a configured directive this is always `None`. A deferred rule
    /// is evaluated against `context` and `args`; an [`WrapHint::Infer`]
    /// outcome falls back to [`infer_name_for`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portray_config::Config;
    ///
    /// let mut config = Config::new();
    /// assert_eq!(config.wrap_for("Music::SongRepresenter", &(), &[]), None);
    ///
    /// config.set_wrap(true);
    /// assert_eq!(
    ///     config.wrap_for("Music::SongRepresenter", &(), &[]),
    ///     Some("song_representer".to_owned())
    /// );
    /// ```
    #[must_use]
    pub fn wrap_for(&self, name: &str, context: &dyn Any, args: &[Value]) -> Option<String> {
        let rule = self.wrap.as_ref()?;
        match rule.evaluate(context, args) {
            WrapHint::Infer => Some(infer_name_for(name)),
            WrapHint::Skip => None,
            WrapHint::Name(wrap_name) => Some(wrap_name),
        }
    }
}

impl Inheritable for Config {
    /// Merges each directive group from `parent` independently, into the
    /// live self-owned group instance. The wrap directive is per-mapping
    /// state and does not inherit. `parent` is never mutated.
    fn inherit_from(&mut self, parent: &Self) {
        self.features.inherit_from(&parent.features);
        self.definitions.inherit_from(&parent.definitions);
        self.options.inherit_from(&parent.options);
    }
}
