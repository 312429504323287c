use serde_json::Value;

use stockroom_core::{Document, DomainResult, Entity, PropValue, SkuId};

use crate::encode::ToDocument;
use crate::wire;

/// A product type.
///
/// `owned_codes` are barcodes exclusively owned by this sku;
/// `associated_codes` are referentially associated but not owned. Both keep
/// their wire order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sku {
    id: SkuId,
    name: String,
    owned_codes: Vec<String>,
    associated_codes: Vec<String>,
    props: PropValue,
}

impl Sku {
    pub fn new(
        id: SkuId,
        name: String,
        owned_codes: Vec<String>,
        associated_codes: Vec<String>,
        props: PropValue,
    ) -> Self {
        Self {
            id,
            name,
            owned_codes,
            associated_codes,
            props,
        }
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

    /// Build a sku from a request body: typed fields are extracted, every
    /// remaining key is folded into `props`.
    pub fn from_wire(body: &PropValue) -> DomainResult<Self> {
        let fields = wire::wire_object(body, "sku")?;
        let id = SkuId::new(wire::id_field(fields, "sku")?)?;
        let name = wire::string_field(fields, "name", "sku")?;
        let owned_codes = wire::string_list_field(fields, "owned_codes", "sku")?;
        let associated_codes = wire::string_list_field(fields, "associated_codes", "sku")?;
        let props = wire::fold_props(fields, &["id", "name", "owned_codes", "associated_codes"]);
        Ok(Self {
            id,
            name,
            owned_codes,
            associated_codes,
            props,
        })
    }

    /// Rebuild a sku from its persisted document; `None` passes through.
    pub fn from_document(doc: Option<Document>) -> DomainResult<Option<Self>> {
        doc.as_ref().map(Sku::try_from).transpose()
    }

    /// Flattened response shape; typed fields win over colliding props keys.
    pub fn to_wire(&self) -> PropValue {
        let mut out = Document::new();
        wire::flatten_props_into(&mut out, &self.props);
        out.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
        out.insert("name".to_string(), Value::String(self.name.clone()));
        out.insert("owned_codes".to_string(), string_array(&self.owned_codes));
        out.insert(
            "associated_codes".to_string(),
            string_array(&self.associated_codes),
        );
        Value::Object(out)
    }
}

pub(crate) fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

impl TryFrom<&Document> for Sku {
    type Error = stockroom_core::DomainError;

    fn try_from(doc: &Document) -> DomainResult<Self> {
        let id = SkuId::new(wire::id_field(doc, "sku")?)?;
        let name = wire::string_field(doc, "name", "sku")?;
        let owned_codes = wire::string_list_field(doc, "owned_codes", "sku")?;
        let associated_codes = wire::string_list_field(doc, "associated_codes", "sku")?;
        let props = wire::props_field(doc, "sku")?;
        Ok(Self {
            id,
            name,
            owned_codes,
            associated_codes,
            props,
        })
    }
}

impl Entity for Sku {
    type Id = SkuId;

    fn id(&self) -> &SkuId {
        &self.id
    }
}

impl ToDocument for Sku {
    fn to_document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("id".to_string(), Value::String(self.id.as_str().to_owned()));
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
