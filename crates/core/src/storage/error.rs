use thiserror::Error;

/// Errors that can occur during repository and record store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    /// The table is missing or still being provisioned.
    #[error("Table not active: {table}")]
    TableNotActive { table: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true when the same call may succeed if repeated later.
    ///
    /// Only a table that is not active yet qualifies; every other failure is
    /// final for the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RepositoryError::TableNotActive { .. })
    }

    /// Returns true for the expected "target absent" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    /// Returns true when a stored record could not be decoded.
    pub fn is_decoding(&self) -> bool {
        matches!(
            self,
            RepositoryError::Serialization(_) | RepositoryError::InvalidData(_)
        )
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
