//! Unit tests for the definition store.

use anyhow::{Result, ensure};

use super::{Definition, Definitions, INHERIT_OPTION};
use crate::error::PortrayError;
use crate::inherit::{Inheritable, InheritableMap};
use crate::value::Value;

fn options(entries: &[(&str, &str)]) -> InheritableMap {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_owned(), Value::from(*value)))
        .collect()
}

fn names(store: &Definitions) -> Vec<&str> {
    store.iter().map(Definition::name).collect()
}

#[test]
fn declares_in_order_and_replaces_in_place() -> Result<()> {
    let mut store = Definitions::new();
    store.set("title", options(&[("as", "t")]))?;
    store.set("track", options(&[]))?;
    store.set("title", options(&[("getter", "g")]))?;

    ensure!(names(&store) == ["title", "track"]);
    let replaced = store
        .get("title")
        .ok_or_else(|| anyhow::anyhow!("title disappeared"))?;
    // Identity replace: the old option bag is gone, not merged.
    ensure!(replaced.option("as").is_none());
    ensure!(replaced.option("getter").is_some());
    Ok(())
}

#[test]
fn amend_merges_into_the_existing_definition() -> Result<()> {
    let mut store = Definitions::new();
    store.set("track", options(&[("as", "no")]))?;

    let mut amendment = options(&[("getter", "fn")]);
    amendment.insert(INHERIT_OPTION, Value::Bool(true));
    let merged = store.set("track", amendment)?;

    ensure!(merged.option("as").and_then(Value::as_str) == Some("no"));
    ensure!(merged.option("getter").and_then(Value::as_str) == Some("fn"));
    ensure!(merged.option(INHERIT_OPTION).is_none());
    ensure!(store.len() == 1);
    Ok(())
}

#[test]
fn amend_of_unknown_name_fails() {
    let mut store = Definitions::new();
    let mut amendment = InheritableMap::new();
    amendment.insert(INHERIT_OPTION, Value::Bool(true));

    let outcome = store.set("missing", amendment);

    assert!(matches!(
        outcome,
        Err(PortrayError::UnknownDefinition { name }) if name == "missing"
    ));
    assert!(store.is_empty());
}

#[test]
fn falsy_marker_declares_instead_of_amending() -> Result<()> {
    let mut store = Definitions::new();
    let mut declaration = options(&[("as", "t")]);
    declaration.insert(INHERIT_OPTION, Value::Bool(false));

    let declared = store.set("title", declaration)?;

    ensure!(declared.option(INHERIT_OPTION).is_none());
    ensure!(declared.option("as").is_some());
    Ok(())
}

#[test]
fn lookups_normalize_the_name() -> Result<()> {
    let mut store = Definitions::new();
    store.set(" :title ", options(&[]))?;

    ensure!(store.get("title").is_some());
    ensure!(store.get(":title").is_some());
    ensure!(names(&store) == ["title"]);
    Ok(())
}

#[test]
fn append_still_stores_by_name() {
    let mut store = Definitions::new();
    let definition = Definition::new("legacy", options(&[("as", "l")]));

    #[allow(deprecated, reason = "the shim must keep working until removal")]
    store.append(definition);

    assert!(store.get("legacy").is_some());
    assert_eq!(store.len(), 1);
}

#[test]
fn inherit_keeps_existing_positions_and_appends_new_names() -> Result<()> {
    let mut child = Definitions::new();
    child.set("a", options(&[("as", "child")]))?;
    child.set("b", options(&[]))?;
    child.set("c", options(&[]))?;

    let mut parent = Definitions::new();
    parent.set("a", options(&[("as", "parent")]))?;
    parent.set("d", options(&[]))?;

    child.inherit_from(&parent);

    ensure!(names(&child) == ["a", "b", "c", "d"]);
    let merged = child
        .get("a")
        .ok_or_else(|| anyhow::anyhow!("'a' disappeared"))?;
    // Scalars follow the parent-wins rule even on the amended entry.
    ensure!(merged.option("as").and_then(Value::as_str) == Some("parent"));
    ensure!(parent.len() == 2);
    Ok(())
}

#[test]
fn deep_clone_copies_each_definition() -> Result<()> {
    let mut store = Definitions::new();
    store.set("title", options(&[("as", "t")]))?;

    let mut copy = store.deep_clone();
    let mut amendment = options(&[("extra", "only in copy")]);
    amendment.insert(INHERIT_OPTION, Value::Bool(true));
    copy.set("title", amendment)?;

    let original = store
        .get("title")
        .ok_or_else(|| anyhow::anyhow!("title disappeared"))?;
    ensure!(original.option("extra").is_none());
    ensure!(original.options().len() == 1);
    Ok(())
}
