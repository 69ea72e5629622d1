//! Storage layer for the albums catalog.
//!
//! A [`RecordStore`] performs raw item operations against a table. The
//! [`StoreAlbumRepository`] sits on top of any record store and implements
//! `albums_core::storage::AlbumRepository` by projecting albums to items.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB record store using `aws-sdk-dynamodb`
//! - `inmemory`: in-memory record store, useful for local development
//!
//! These features are mutually exclusive. The in-memory store is always
//! compiled for tests.
//!
//! Build with the in-memory store:
//! ```bash
//! cargo run -p albums --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!(
    "Features 'dynamodb' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "dynamodb", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'dynamodb' or 'inmemory' feature. \
    Example: cargo build -p albums --features dynamodb"
);

mod conversions;
mod keys;
mod repository;
mod schema;
mod store;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

pub use repository::StoreAlbumRepository;
pub use schema::album_table_schema;
pub use store::{RecordStore, TableStatus};
