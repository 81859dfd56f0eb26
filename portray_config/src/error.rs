//! Error types raised while declaring a mapping's configuration.

use thiserror::Error;

/// Errors that can occur while a mapping type declares its configuration.
///
/// Declaration-time failures indicate a programming error in the mapping
/// declaration itself; callers are expected to abort the declaration rather
/// than recover.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PortrayError {
    /// An amend declaration referenced a property that was never declared.
    #[error("cannot amend unknown property '{name}'")]
    UnknownDefinition {
        /// Normalized name the amend declaration referenced.
        name: String,
    },
}

/// Convenience alias for declaration-time results.
pub type PortrayResult<T> = std::result::Result<T, PortrayError>;
