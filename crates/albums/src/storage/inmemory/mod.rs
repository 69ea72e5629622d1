//! In-memory record store.
//!
//! Stores tables in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and for running the server locally without AWS. Data is lost when
//! the store is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use albums::storage::{album_table_schema, inmemory::InMemoryStore};
//!
//! let store = InMemoryStore::with_table(album_table_schema("albums"));
//! ```

mod store;

pub use store::InMemoryStore;
