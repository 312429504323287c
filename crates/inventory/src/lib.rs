//! Inventory entity model.
//!
//! This crate contains the in-memory representation of each inventory entity
//! (Bin, Sku, Batch) together with its conversions: wire JSON in,
//! persisted-document form in/out, wire JSON out. All conversions are pure;
//! the document store is the only durable holder of state and entities live
//! for a single request.
//!
//! The `strategies` module (feature `testkit`, or `cfg(test)`) provides the
//! composable random-value builders used by the property-based tests.

pub mod batch;
pub mod bin;
pub mod encode;
pub mod sku;
mod wire;

#[cfg(any(test, feature = "testkit"))]
pub mod strategies;

pub use batch::Batch;
pub use bin::Bin;
pub use encode::{EncodeError, ToDocument, encode_document_array};
pub use sku::Sku;
