//! `stockroom-store`: the document persistence boundary.
//!
//! The actual document-store engine is an external collaborator; this crate
//! owns the interface to it (the [`DocumentStore`] trait), an in-memory
//! backend for dev/test, and the startup gateway that turns process
//! configuration into the one store handle the HTTP layer is given.

pub mod document_store;
pub mod gateway;

pub use document_store::{
    DocumentId, DocumentStore, Filter, InMemoryDocumentStore, Page, StoreError, collections,
};
pub use gateway::{StoreConfig, connect};
