use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use stockroom_core::Document;

/// Opaque, store-assigned document identifier.
///
/// Time-ordered (UUIDv7) and rendered as its string form on the wire; the
/// entity-level `id` label is a separate, caller-chosen key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Assign a fresh identifier at insert time.
    pub fn assign() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl core::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Equality filter over document fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    id: Option<String>,
}

impl Filter {
    /// Matches every document in the collection.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches documents whose `id` field equals `id` exactly.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }

    pub fn matches(&self, doc: &Document) -> bool {
        match &self.id {
            Some(id) => doc.get("id").and_then(|v| v.as_str()) == Some(id.as_str()),
            None => true,
        }
    }
}

/// Skip/limit pagination, applied in that order after filtering.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub skip: usize,
}

impl Page {
    pub const DEFAULT_LIMIT: usize = 20;

    pub fn new(limit: usize, skip: usize) -> Self {
        Self { limit, skip }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            skip: 0,
        }
    }
}

/// Document store operation error.
///
/// Infrastructure failures only; data-contract validation lives in
/// `stockroom-core`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached. Never retried here; backoff is the
    /// deployment's concern.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// A unique-key insert found an existing document with the same value.
    #[error("duplicate {field} '{value}' in collection '{collection}'")]
    Duplicate {
        collection: String,
        field: String,
        value: String,
    },

    /// The backend failed mid-operation (e.g. poisoned lock).
    #[error("document store backend failure: {0}")]
    Backend(String),
}

/// Keyed-document persistence collaborator.
///
/// One logical database holds named collections of schema-flexible JSON
/// documents in insertion order. Each call is atomic in isolation; no
/// transaction spans calls.
pub trait DocumentStore: Send + Sync {
    /// Documents matching `filter` in natural order, `skip` applied before
    /// `limit`.
    fn find(&self, collection: &str, filter: &Filter, page: Page)
    -> Result<Vec<Document>, StoreError>;

    /// First document matching `filter`, if any.
    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError>;

    /// Append a document unconditionally.
    fn insert_one(&self, collection: &str, doc: Document) -> Result<DocumentId, StoreError>;

    /// Insert-if-absent on `key_field`: of any number of concurrent callers
    /// with the same key value, exactly one wins and the rest observe
    /// [`StoreError::Duplicate`]. The existing document is never touched.
    fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        doc: Document,
    ) -> Result<DocumentId, StoreError>;
}

impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        page: Page,
    ) -> Result<Vec<Document>, StoreError> {
        (**self).find(collection, filter, page)
    }

    fn find_one(&self, collection: &str, filter: &Filter) -> Result<Option<Document>, StoreError> {
        (**self).find_one(collection, filter)
    }

    fn insert_one(&self, collection: &str, doc: Document) -> Result<DocumentId, StoreError> {
        (**self).insert_one(collection, doc)
    }

    fn insert_unique(
        &self,
        collection: &str,
        key_field: &str,
        doc: Document,
    ) -> Result<DocumentId, StoreError> {
        (**self).insert_unique(collection, key_field, doc)
    }
}
