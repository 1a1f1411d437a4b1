//! Storage abstraction for Notepad.
//!
//! This module defines the `KeyValueStore` trait, its backends, and the
//! `NoteRecord` that gets written into a slot.
//!
//! ## Architecture
//!
//! The storage layer is backend-agnostic:
//! - `MemoryStore`: tests and embedding
//! - `JsonFileStore`: default CLI backend, one JSON object file
//! - `SqliteStore`: a `kv` table in a SQLite database
//!
//! Stores only ever see envelopes, hashes, and the session address.

pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;
pub use types::NoteRecord;
