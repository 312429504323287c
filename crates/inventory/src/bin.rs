use serde_json::Value;

use stockroom_core::{BinId, Document, DomainResult, Entity, PropValue};

use crate::encode::ToDocument;
use crate::wire;

/// A physical storage location.
///
/// `props` is free-form metadata: any JSON value, arbitrarily nested. The id
/// is immutable once created; uniqueness is enforced by the store at insert
/// time, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    id: BinId,
    props: PropValue,
}

impl Bin {
    pub fn new(id: BinId, props: PropValue) -> Self {
        Self { id, props }
    }

    pub fn props(&self) -> &PropValue {
        &self.props
    }

    /// Build a bin from a request body.
    ///
    /// Requires an object with a string `id`; every other key is folded into
    /// `props`. Ids are accepted permissively (any non-empty string).
    pub fn from_wire(body: &PropValue) -> DomainResult<Self> {
        let fields = wire::wire_object(body, "bin")?;
        let id = BinId::new(wire::id_field(fields, "bin")?)?;
        let props = wire::fold_props(fields, &["id"]);
        Ok(Self { id, props })
    }

    /// Rebuild a bin from its persisted document.
    ///
    /// `None` passes through unchanged so callers can branch on "not found"
    /// directly instead of catching an error.
    pub fn from_document(doc: Option<Document>) -> DomainResult<Option<Self>> {
        doc.as_ref().map(Bin::try_from).transpose()
    }

    /// Flattened response shape: `id` plus the keys of `props` lifted to the
    /// top level. A non-mapping `props` stays under a `props` key. The entity
    /// id always wins over a stray `id` key inside `props`.
    pub fn to_wire(&self) -> PropValue {
        let mut out = Document::new();
        wire::flatten_props_into(&mut out, &self.props);
        out.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
        Value::Object(out)
    }
}

impl TryFrom<&Document> for Bin {
    type Error = stockroom_core::DomainError;

    fn try_from(doc: &Document) -> DomainResult<Self> {
        let id = BinId::new(wire::id_field(doc, "bin")?)?;
        let props = wire::props_field(doc, "bin")?;
        Ok(Self { id, props })
    }
}

impl Entity for Bin {
    type Id = BinId;

    fn id(&self) -> &BinId {
        &self.id
    }
}

impl ToDocument for Bin {
    /// Canonical persisted shape: `{id, props}`.
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
        doc.insert("props".to_string(), self.props.clone());
        doc
    }
}
