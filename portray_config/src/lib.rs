//! Inheritable configuration core for the Portray object-mapping framework.
//!
//! A Portray mapping type describes how an object is rendered to (or parsed
//! from) a structured document. Each mapping type owns a [`Config`] holding
//! three directive groups — feature markers, free-form options and the
//! ordered property [`Definition`]s — and a mapping can derive from a base
//! by calling [`inherit_from`](Inheritable::inherit_from) once at
//! declaration time. Inheriting
//! copies, never aliases: after the call the base can keep serving other
//! derived mappings, and no later mutation of the child is observable
//! through it.
//!
//! The declaration DSL and the traversal engine live in separate crates.
//! This crate is the substrate they share: the [`Inheritable`] merge
//! contract, the two container shapes implementing it, the definition store
//! and the wrap-name resolution.

mod config;
mod definitions;
mod error;
mod inherit;
mod value;

pub use config::{Config, WrapEval, WrapHint, WrapRule};
pub use definitions::{Definition, Definitions, INHERIT_OPTION};
pub use error::{PortrayError, PortrayResult};
pub use inherit::{Inheritable, InheritableList, InheritableMap};
pub use value::Value;

/// Normalizes a property name to its canonical string form.
///
/// Surrounding whitespace and a leading `:` (symbol-literal style tokens)
/// are stripped, so the identifier-like and plain-text spellings of a name
/// address the same entry. Applied at every store and lookup boundary of
/// the definition store.
///
/// # Examples
///
/// ```rust
/// assert_eq!(portray_config::normalize_name(" :title "), "title");
/// assert_eq!(portray_config::normalize_name("title"), "title");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().trim_start_matches(':').to_owned()
}

/// Infers a default wrap name from a (possibly namespace-qualified) type
/// name.
///
/// Takes the last `::`-delimited segment, separates an uppercase run from a
/// following capitalized word as well as any lower-or-digit to uppercase
/// transition, and lowercases the result.
///
/// # Examples
///
/// ```rust
/// assert_eq!(
///     portray_config::infer_name_for("Music::SongRepresenter"),
///     "song_representer"
/// );
/// assert_eq!(portray_config::infer_name_for("HTTPServer"), "http_server");
/// ```
#[must_use]
pub fn infer_name_for(name: &str) -> String {
    let tail = name.rsplit("::").next().unwrap_or(name);
    let mut inferred = String::with_capacity(tail.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = tail.chars().peekable();
    while let Some(current) = chars.next() {
        if let Some(previous) = prev {
            let upper_run_ends = previous.is_ascii_uppercase()
                && current.is_ascii_uppercase()
                && chars.peek().is_some_and(|next| next.is_ascii_lowercase());
            let case_boundary = (previous.is_ascii_lowercase() || previous.is_ascii_digit())
                && current.is_ascii_uppercase();
            if upper_run_ends || case_boundary {
                inferred.push('_');
            }
        }
        inferred.push(current.to_ascii_lowercase());
        prev = Some(current);
    }
    inferred
}
