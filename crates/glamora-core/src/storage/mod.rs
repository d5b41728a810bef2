//! Persistence layer
//!
//! State is mirrored to six independent JSON files, one per entity class.
//! The store rewrites all of them after every mutation.

mod error;
mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonPersistence, StorageKey};
