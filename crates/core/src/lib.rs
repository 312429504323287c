//! `stockroom-core`: domain foundation building blocks.
//!
//! This crate contains **pure data-contract** primitives (no IO, no HTTP, no
//! storage): entity labels, the free-form property value, the persisted
//! document shape and the domain error model.

pub mod document;
pub mod entity;
pub mod error;
pub mod label;

pub use document::{Document, PropValue};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use label::{BatchId, BinId, SkuId};
