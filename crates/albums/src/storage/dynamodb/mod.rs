//! DynamoDB record store.
//!
//! Implements [`RecordStore`](super::RecordStore) using `aws-sdk-dynamodb`.

mod client;
mod error;
mod store;

pub use client::{create_client, AwsConfig};
pub use store::DynamoDbStore;
