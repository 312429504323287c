use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use stockroom_core::Document;

use super::r#trait::{DocumentId, DocumentStore, Filter, Page, StoreError};

#[derive(Debug, Clone)]
struct StoredDocument {
    doc_id: DocumentId,
    body: Document,
}

impl StoredDocument {
    /// Render the body the way the engine returns it: with the assigned
    /// `_id` included. Entity constructors ignore it.
    fn rendered(&self) -> Document {
        let mut doc = self.body.clone();
        doc.insert("_id".to_string(), Value::String(self.doc_id.to_string()));
        doc
    }
}

/// In-memory document store.
///
/// Collections keep insertion order, which is the natural order `find`
/// exposes. Intended for tests/dev; not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

impl DocumentStore for InMemoryDocumentStore {
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        page: Page,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        let Some(stored) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(stored
            .iter()
            .filter(|s| filter.matches(&s.body))
            .skip(page.skip)
            .take(page.limit)
            .map(StoredDocument::rendered)
            .collect())
    }

    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections
            .get(collection)
            .and_then(|stored| stored.iter().find(|s| filter.matches(&s.body)))
            .map(StoredDocument::rendered))
    }

    fn insert_one(&self, collection: &str, doc: Document) -> Result<DocumentId, StoreError> {
        let mut collections = self.collections.write().map_err(|_| poisoned())?;
        let doc_id = DocumentId::assign();
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { doc_id, body: doc });
        Ok(doc_id)
    }

    fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        doc: Document,
    ) -> Result<DocumentId, StoreError> {
        // Check and insert under one write lock: this is the uniqueness
        // primitive create endpoints rely on instead of check-then-insert.
        let mut collections = self.collections.write().map_err(|_| poisoned())?;
        let stored = collections.entry(collection.to_string()).or_default();

        let Some(key) = doc.get(key_field) else {
            return Err(StoreError::Backend(format!(
                "insert_unique requires a '{key_field}' field"
            )));
        };
        if stored.iter().any(|s| s.body.get(key_field) == Some(key)) {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
                field: key_field.to_string(),
                value: key_display(key),
            });
        }

        let doc_id = DocumentId::assign();
        stored.push(StoredDocument { doc_id, body: doc });
        Ok(doc_id)
    }
}

fn key_display(key: &Value) -> String {
    match key.as_str() {
        Some(s) => s.to_owned(),
        None => key.to_string(),
    }
}
