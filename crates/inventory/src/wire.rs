//! Field extraction helpers shared by the wire and document constructors.

use serde_json::Value;

use stockroom_core::{Document, DomainError, DomainResult, PropValue};

/// Pull the required string `id` out of a wire or document mapping.
pub(crate) fn id_field(fields: &Document, entity: &str) -> DomainResult<String> {
    match fields.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(_) => Err(DomainError::validation(format!("{entity} 'id' must be a string"))),
        None => Err(DomainError::validation(format!("{entity} is missing 'id'"))),
    }
}

/// Optional display string; absent and null both read as empty.
pub(crate) fn string_field(fields: &Document, key: &str, entity: &str) -> DomainResult<String> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(DomainError::validation(format!("{entity} '{key}' must be a string"))),
    }
}

/// Optional ordered sequence of strings; absent and null both read as empty.
pub(crate) fn string_list_field(
    fields: &Document,
    key: &str,
    entity: &str,
) -> DomainResult<Vec<String>> {
    let Some(value) = fields.get(key) else {
        return Ok(Vec::new());
    };
    if value.is_null() {
        return Ok(Vec::new());
    }
    let items = value.as_array().ok_or_else(|| {
        DomainError::validation(format!("{entity} '{key}' must be a sequence of strings"))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_owned).ok_or_else(|| {
                DomainError::validation(format!("{entity} '{key}' must be a sequence of strings"))
            })
        })
        .collect()
}

/// The required `props` value of a persisted document.
pub(crate) fn props_field(doc: &Document, entity: &str) -> DomainResult<PropValue> {
    doc.get("props")
        .cloned()
        .ok_or_else(|| DomainError::validation(format!("{entity} document is missing 'props'")))
}

/// Fold every key not claimed by a typed field into a `props` mapping.
pub(crate) fn fold_props(fields: &Document, claimed: &[&str]) -> PropValue {
    let mut props = Document::new();
    for (key, value) in fields {
        if !claimed.contains(&key.as_str()) {
            props.insert(key.clone(), value.clone());
        }
    }
    Value::Object(props)
}

/// Require the wire body to be a JSON object.
pub(crate) fn wire_object<'a>(body: &'a PropValue, entity: &str) -> DomainResult<&'a Document> {
    body.as_object()
        .ok_or_else(|| DomainError::validation(format!("{entity} body must be a JSON object")))
}

/// Lift the keys of a mapping `props` into `out`; a non-mapping value stays
/// under a literal `props` key.
pub(crate) fn flatten_props_into(out: &mut Document, props: &PropValue) {
    match props {
        Value::Object(map) => {
            for (key, value) in map {
                out.insert(key.clone(), value.clone());
            }
        }
        other => {
            out.insert("props".to_string(), other.clone());
        }
    }
}
