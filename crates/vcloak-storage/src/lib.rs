//! vcloak Storage Layer
//!
//! Browser-style local storage for the client: string values under string
//! keys, scoped to the origin the client talks to. Backed by SQLite so the
//! session survives restarts.

mod database;
mod error;
mod local;
mod migrations;

pub use database::Database;
pub use error::StorageError;
pub use local::{KeyValueStore, LocalStorage, MemoryStorage};

pub type Result<T> = std::result::Result<T, StorageError>;
