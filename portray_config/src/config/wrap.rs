//! Wrap-name directives: literal, inferred, or computed per instance.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// Outcome of evaluating a wrap directive for one read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WrapHint {
    /// Derive the wrap name from the mapping type's own name.
    Infer,
    /// Do not wrap, even though a directive is configured.
    Skip,
    /// Wrap under this literal key.
    Name(String),
}

/// Signature of a wrap evaluator computed against the instance being mapped.
///
/// The traversal engine owns the concrete context type; this layer only
/// forwards it, together with any extra positional arguments.
pub type WrapEval = dyn Fn(&dyn Any, &[Value]) -> WrapHint + Send + Sync;

/// A configured wrap directive.
///
/// Literal names and booleans become static hints; a deferred rule is
/// re-evaluated on every read because the wrap name may depend on the object
/// instance being mapped, not just static configuration.
#[derive(Clone)]
pub enum WrapRule {
    /// Fixed outcome known at declaration time.
    Hint(WrapHint),
    /// Evaluated at read time against the instance being mapped.
    Deferred(Arc<WrapEval>),
}

impl WrapRule {
    /// Builds a deferred rule from `eval`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use portray_config::{WrapHint, WrapRule};
    ///
    /// let rule = WrapRule::deferred(|_context, _args| WrapHint::Skip);
    /// assert_eq!(rule.evaluate(&(), &[]), WrapHint::Skip);
    /// ```
    #[must_use]
    pub fn deferred<F>(eval: F) -> Self
    where
        F: Fn(&dyn Any, &[Value]) -> WrapHint + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(eval))
    }

    /// Resolves the rule to a hint for one read.
    #[must_use]
    pub fn evaluate(&self, context: &dyn Any, args: &[Value]) -> WrapHint {
        match self {
            Self::Hint(hint) => hint.clone(),
            Self::Deferred(eval) => eval(context, args),
        }
    }
}

impl fmt::Debug for WrapRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint(hint) => f.debug_tuple("Hint").field(hint).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<WrapHint> for WrapRule {
    fn from(hint: WrapHint) -> Self {
        Self::Hint(hint)
    }
}

impl From<bool> for WrapRule {
    /// `true` asks for an inferred name; `false` suppresses wrapping while
    /// still counting as a configured directive.
    fn from(flag: bool) -> Self {
        if flag {
            Self::Hint(WrapHint::Infer)
        } else {
            Self::Hint(WrapHint::Skip)
        }
    }
}

impl From<&str> for WrapRule {
    fn from(name: &str) -> Self {
        Self::Hint(WrapHint::Name(name.to_owned()))
    }
}

impl From<String> for WrapRule {
    fn from(name: String) -> Self {
        Self::Hint(WrapHint::Name(name))
    }
}
