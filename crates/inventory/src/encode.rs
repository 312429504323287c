//! Document-shaped JSON rendering for HTTP response bodies.
//!
//! The baseline `serde_json` encoder does not know how to render entity
//! values; this module closes that gap. Entities render through their
//! document projection, and the store's opaque document ids serialize as
//! their string form. Anything without a `ToDocument` impl is rejected at
//! compile time, so the "unrecognized value" case is unrepresentable here;
//! residual rendering failures surface as `EncodeError` rather than
//! silently dropped fields.

use serde_json::Value;
use thiserror::Error;

use stockroom_core::{Document, Entity};

/// JSON rendering failure.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Projection to the canonical persisted document shape.
pub trait ToDocument: Entity {
    fn to_document(&self) -> Document;
}

/// Render a sequence of entities as one JSON array of document projections,
/// preserving input order.
pub fn encode_document_array<T: ToDocument>(items: &[T]) -> Result<String, EncodeError> {
    let docs: Vec<Value> = items
        .iter()
        .map(|item| Value::Object(item.to_document()))
        .collect();
    Ok(serde_json::to_string(&Value::Array(docs))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bin;
    use serde_json::json;
    use stockroom_core::BinId;

    #[test]
    fn arrays_preserve_input_order() {
        let bins: Vec<Bin> = [3u32, 1, 2]
            .into_iter()
            .map(|n| Bin::new(BinId::from_serial(n), json!({"slot": n})))
            .collect();

        let rendered: Value = serde_json::from_str(&encode_document_array(&bins).unwrap()).unwrap();
        let ids: Vec<&str> = rendered
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["BIN000003", "BIN000001", "BIN000002"]);
    }

    #[test]
    fn bin_elements_carry_exactly_id_and_props() {
        let bins = vec![
            Bin::new(BinId::from_serial(1), json!({"zone": "A"})),
            Bin::new(BinId::from_serial(2), json!(null)),
        ];

        let rendered: Value = serde_json::from_str(&encode_document_array(&bins).unwrap()).unwrap();
        for doc in rendered.as_array().unwrap() {
            let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, ["id", "props"]);
        }
    }

    #[test]
    fn an_empty_sequence_renders_an_empty_array() {
        let bins: Vec<Bin> = Vec::new();
        assert_eq!(encode_document_array(&bins).unwrap(), "[]");
    }
}
