use serde_json::Value;

use stockroom_core::{BatchId, Document, DomainError, DomainResult, Entity, PropValue, SkuId};

use crate::encode::ToDocument;
use crate::sku::string_array;
use crate::wire;

/// A production lot of a sku.
///
/// `sku_id` is a weak reference by id; a batch never owns its sku and the
/// link is resolved through the store on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    id: BatchId,
    sku_id: Option<SkuId>,
    name: String,
    owned_codes: Vec<String>,
    associated_codes: Vec<String>,
    props: PropValue,
}

impl Batch {
    pub fn new(
        id: BatchId,
        sku_id: Option<SkuId>,
        name: String,
        owned_codes: Vec<String>,
        associated_codes: Vec<String>,
        props: PropValue,
    ) -> Self {
        Self {
            id,
            sku_id,
            name,
            owned_codes,
            associated_codes,
            props,
        }
    }

    pub fn sku_id(&self) -> Option<&SkuId> {
        self.sku_id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owned_codes(&self) -> &[String] {
        &self.owned_codes
    }

    pub fn associated_codes(&self) -> &[String] {
        &self.associated_codes
    }

    pub fn props(&self) -> &PropValue {
        &self.props
    }

    /// Build a batch from a request body: typed fields are extracted, every
    /// remaining key is folded into `props`.
    pub fn from_wire(body: &PropValue) -> DomainResult<Self> {
        let fields = wire::wire_object(body, "batch")?;
        let id = BatchId::new(wire::id_field(fields, "batch")?)?;
        let sku_id = sku_ref(fields)?;
        let name = wire::string_field(fields, "name", "batch")?;
        let owned_codes = wire::string_list_field(fields, "owned_codes", "batch")?;
        let associated_codes = wire::string_list_field(fields, "associated_codes", "batch")?;
        let props = wire::fold_props(
            fields,
            &["id", "sku_id", "name", "owned_codes", "associated_codes"],
        );
        Ok(Self {
            id,
            sku_id,
            name,
            owned_codes,
            associated_codes,
            props,
        })
    }

    /// Rebuild a batch from its persisted document; `None` passes through.
    pub fn from_document(doc: Option<Document>) -> DomainResult<Option<Self>> {
        doc.as_ref().map(Batch::try_from).transpose()
    }

    /// Flattened response shape; typed fields win over colliding props keys.
    pub fn to_wire(&self) -> PropValue {
        let mut out = Document::new();
        wire::flatten_props_into(&mut out, &self.props);
        out.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
        out.insert("sku_id".to_string(), sku_ref_value(self.sku_id.as_ref()));
        out.insert("name".to_string(), Value::String(self.name.clone()));
        out.insert("owned_codes".to_string(), string_array(&self.owned_codes));
        out.insert(
            "associated_codes".to_string(),
            string_array(&self.associated_codes),
        );
        Value::Object(out)
    }
}

fn sku_ref(fields: &Document) -> DomainResult<Option<SkuId>> {
    match fields.get("sku_id") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(SkuId::new(id.clone())?)),
        Some(_) => Err(DomainError::validation("batch 'sku_id' must be a string")),
    }
}

fn sku_ref_value(sku_id: Option<&SkuId>) -> Value {
    match sku_id {
        Some(id) => Value::String(id.as_str().to_owned()),
        None => Value::Null,
    }
}

impl TryFrom<&Document> for Batch {
    type Error = DomainError;

    fn try_from(doc: &Document) -> DomainResult<Self> {
        let id = BatchId::new(wire::id_field(doc, "batch")?)?;
        let sku_id = sku_ref(doc)?;
        let name = wire::string_field(doc, "name", "batch")?;
        let owned_codes = wire::string_list_field(doc, "owned_codes", "batch")?;
        let associated_codes = wire::string_list_field(doc, "associated_codes", "batch")?;
        let props = wire::props_field(doc, "batch")?;
        Ok(Self {
            id,
            sku_id,
            name,
            owned_codes,
            associated_codes,
            props,
        })
    }
}

impl Entity for Batch {
    type Id = BatchId;

    fn id(&self) -> &BatchId {
        &self.id
    }
}

impl ToDocument for Batch {
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
        doc.insert("sku_id".to_string(), sku_ref_value(self.sku_id.as_ref()));
        doc.insert("name".to_string(), Value::String(self.name.clone()));
        doc.insert("owned_codes".to_string(), string_array(&self.owned_codes));
        doc.insert(
            "associated_codes".to_string(),
            string_array(&self.associated_codes),
        );
        doc.insert("props".to_string(), self.props.clone());
        doc
    }
}
