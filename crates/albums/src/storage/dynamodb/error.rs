//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `albums_core::storage`.
//! A missing table maps to `TableNotActive` so callers can tell "still
//! provisioning" apart from every other failure without inspecting SDK types.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{BuildError, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;

use albums_core::storage::RepositoryError;

/// Timeouts and dispatch failures never reached the service.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "DynamoDB request timed out".to_string(),
        )),
        SdkError::DispatchFailure(failure) => Some(RepositoryError::ConnectionFailed(format!(
            "DynamoDB dispatch failure: {:?}",
            failure
        ))),
        _ => None,
    }
}

fn table_not_active(table: &str) -> RepositoryError {
    RepositoryError::TableNotActive {
        table: table.to_string(),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => table_not_active(table),
        ScanError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => table_not_active(table),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => table_not_active(table),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => table_not_active(table),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a CreateTable SDK error to RepositoryError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => RepositoryError::AlreadyExists {
            entity_type: "Table",
            id: table.to_string(),
        },
        CreateTableError::LimitExceededException(_) => {
            RepositoryError::QueryFailed("Table limit exceeded".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("CreateTable failed: {:?}", err)),
    }
}

/// Map a DescribeTable SDK error to RepositoryError.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
    table: &str,
) -> RepositoryError {
    if let Some(transport) = map_transport_error(&err) {
        return transport;
    }
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => table_not_active(table),
        DescribeTableError::InternalServerError(_) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => RepositoryError::QueryFailed(format!("DescribeTable failed: {:?}", err)),
    }
}

/// Map a request builder error (missing required field) to RepositoryError.
pub fn map_build_error(err: BuildError) -> RepositoryError {
    RepositoryError::QueryFailed(format!("Invalid request: {}", err))
}
