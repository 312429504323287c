//! Prop value and persisted-document aliases.
//!
//! The required tagged union (Null | Bool | Number | String | Sequence |
//! Mapping) is exactly [`serde_json::Value`]; a bespoke enum would duplicate
//! it, so the alias records intent instead. The persisted document shape is a
//! JSON object, i.e. a [`serde_json::Map`].

/// Free-form JSON-like property value (the required tagged union).
pub type PropValue = serde_json::Value;

/// Persisted document shape: a string-keyed JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;
