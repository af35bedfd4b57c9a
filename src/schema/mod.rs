//! Schema-node contract shared by every configuration object.
//!
//! Each option class is a typed record plus three small pieces of authored
//! data: its flattened wire-key table, an `apply` pass that runs raw
//! initializer values through validating setters, and an `emit` pass that
//! writes its untrimmed wire entries. Everything else (`construct`,
//! `from_wire`, `to_wire`, JSON text in/out) is provided plumbing.

pub mod validators;
pub mod wire;

use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use crate::error::{OptionsError, OptionsResult};

pub use wire::{InitMap, WireMap};

/// One attribute of a schema class: internal snake_case name paired with the
/// externally dictated camelCase wire key.
///
/// The pairing is a fixed per-attribute table, not a mechanical case
/// conversion; a handful of keys are irregular (`use_html` ↔ `useHTML`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireKey {
    pub attribute: &'static str,
    pub wire: &'static str,
}

#[must_use]
pub const fn key(attribute: &'static str, wire: &'static str) -> WireKey {
    WireKey { attribute, wire }
}

/// Flattened wire-key table of a concrete class: every ancestor level's keys
/// followed by the class's own additions, in declaration order.
pub type WireKeyTable = Vec<WireKey>;

/// Shared contract of every configuration node.
///
/// Extension is strictly additive single inheritance, expressed as
/// composition: a derived record embeds its parent record and its
/// `wire_keys`/`apply`/`emit` wrap the parent's. Wire keys never collide
/// across levels; `verify_wire_keys` enforces that invariant.
pub trait SchemaNode: Default + Sized {
    /// Complete `(attribute, wireKey)` table for this class, ancestors first.
    fn wire_keys() -> WireKeyTable;

    /// Runs every declared attribute through its validating setter.
    ///
    /// Absent initializer keys are treated as null (resetting the attribute);
    /// unknown keys are ignored. Attributes are processed in `wire_keys`
    /// order — ancestor levels first, own additions last — so the first
    /// validation error surfaced is deterministic.
    fn apply(&mut self, init: &InitMap) -> OptionsResult<()>;

    /// Writes the untrimmed wire entry for every declared attribute,
    /// own-level entries first, ancestor entries appended.
    fn emit(&self, out: &mut WireMap);

    fn construct(init: &InitMap) -> OptionsResult<Self> {
        let mut node = Self::default();
        node.apply(init)?;
        Ok(node)
    }

    /// Reconstructs a node from the renderer's camelCase mapping.
    ///
    /// Recognized keys are mapped through the flattened key table into an
    /// initializer mapping; unrecognized keys are ignored deterministically.
    fn from_wire(map: &WireMap) -> OptionsResult<Self> {
        let mut init = InitMap::new();
        for entry in Self::wire_keys() {
            if let Some(value) = map.get(entry.wire) {
                init.insert(entry.attribute.to_owned(), value.clone());
            }
        }
        trace!(
            class = std::any::type_name::<Self>(),
            recognized = init.len(),
            "constructing schema node from wire mapping"
        );
        Self::construct(&init)
    }

    /// Serializes to the wire mapping, deep-trimming null and empty entries.
    /// Never fails: it only sees already-validated in-memory values.
    fn to_wire(&self) -> WireMap {
        let mut out = WireMap::new();
        self.emit(&mut out);
        wire::trim_map(out)
    }

    fn from_json(input: &str) -> OptionsResult<Self> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| OptionsError::Json(format!("failed to parse options payload: {e}")))?;
        match value {
            Value::Object(map) => Self::from_wire(&map),
            other => Err(OptionsError::Json(format!(
                "expected a json object of options, got: {other}"
            ))),
        }
    }

    fn to_json(&self) -> OptionsResult<String> {
        serde_json::to_string_pretty(&Value::Object(self.to_wire()))
            .map_err(|e| OptionsError::Json(format!("failed to serialize options payload: {e}")))
    }
}

/// Startup/test-time self-check: every attribute and wire key of a class must
/// be declared by exactly one schema level.
pub fn verify_wire_keys<T: SchemaNode>() -> OptionsResult<()> {
    let table = T::wire_keys();
    let mut wire_seen = HashSet::with_capacity(table.len());
    let mut attr_seen = HashSet::with_capacity(table.len());
    for entry in &table {
        if !wire_seen.insert(entry.wire) {
            return Err(OptionsError::KeyConflict {
                wire_key: entry.wire.to_owned(),
            });
        }
        if !attr_seen.insert(entry.attribute) {
            return Err(OptionsError::AttributeConflict {
                attribute: entry.attribute.to_owned(),
            });
        }
    }
    Ok(())
}

/// Resolves a raw value into a nested schema node.
///
/// The raw mapping uses wire (camelCase) keys, matching what the renderer
/// hands back for nested option blocks. Empty-like input resolves to `None`.
pub fn resolve_node<T: SchemaNode>(attribute: &str, value: &Value) -> OptionsResult<Option<T>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(map) => Ok(Some(T::from_wire(map)?)),
        other => Err(OptionsError::validation(attribute, other)),
    }
}

/// Resolves a raw value into an ordered sequence of schema nodes.
///
/// Force-iterable policy: a single bare mapping is wrapped as a one-element
/// sequence, equivalent to passing `[item]` explicitly. Scalars are rejected.
pub fn resolve_nodes<T: SchemaNode>(
    attribute: &str,
    value: &Value,
) -> OptionsResult<Option<Vec<T>>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::Array(items) if items.is_empty() => Ok(None),
        Value::Array(items) => {
            let mut nodes = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Object(map) => nodes.push(T::from_wire(map)?),
                    other => return Err(OptionsError::validation(attribute, other)),
                }
            }
            Ok(Some(nodes))
        }
        Value::Object(map) => Ok(Some(vec![T::from_wire(map)?])),
        other => Err(OptionsError::validation(attribute, other)),
    }
}

/// Untrimmed wire value of an optional nested node.
pub fn node_value<T: SchemaNode>(node: Option<&T>) -> Value {
    match node {
        Some(node) => {
            let mut map = WireMap::new();
            node.emit(&mut map);
            Value::Object(map)
        }
        None => Value::Null,
    }
}

/// Untrimmed wire value of an optional node sequence.
pub fn nodes_value<T: SchemaNode>(nodes: Option<&[T]>) -> Value {
    match nodes {
        Some(nodes) => Value::Array(nodes.iter().map(|n| node_value(Some(n))).collect()),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct DuplicateWireNode;

    impl SchemaNode for DuplicateWireNode {
        fn wire_keys() -> WireKeyTable {
            vec![key("border_color", "borderColor"), key("edge_color", "borderColor")]
        }

        fn apply(&mut self, _init: &InitMap) -> OptionsResult<()> {
            Ok(())
        }

        fn emit(&self, _out: &mut WireMap) {}
    }

    #[derive(Default)]
    struct DuplicateAttributeNode;

    impl SchemaNode for DuplicateAttributeNode {
        fn wire_keys() -> WireKeyTable {
            vec![key("class_name", "className"), key("class_name", "classLabel")]
        }

        fn apply(&mut self, _init: &InitMap) -> OptionsResult<()> {
            Ok(())
        }

        fn emit(&self, _out: &mut WireMap) {}
    }

    #[test]
    fn duplicate_wire_key_is_reported_as_a_key_conflict() {
        let err = verify_wire_keys::<DuplicateWireNode>().expect_err("duplicate wire key");
        match err {
            OptionsError::KeyConflict { wire_key } => assert_eq!(wire_key, "borderColor"),
            other => panic!("expected a wire-key conflict, got: {other}"),
        }
    }

    #[test]
    fn duplicate_attribute_is_reported_as_an_attribute_conflict() {
        let err = verify_wire_keys::<DuplicateAttributeNode>().expect_err("duplicate attribute");
        match err {
            OptionsError::AttributeConflict { attribute } => assert_eq!(attribute, "class_name"),
            other => panic!("expected an attribute conflict, got: {other}"),
        }
        let message = verify_wire_keys::<DuplicateAttributeNode>()
            .expect_err("duplicate attribute")
            .to_string();
        assert_eq!(
            message,
            "attribute `class_name` is declared by more than one schema level"
        );
    }
}
