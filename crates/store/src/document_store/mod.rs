pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use r#trait::{DocumentId, DocumentStore, Filter, Page, StoreError};

/// Collection names within the one logical database (`inventorydb`).
pub mod collections {
    pub const BINS: &str = "bins";
    pub const SKUS: &str = "skus";
    pub const BATCHES: &str = "batches";
}
