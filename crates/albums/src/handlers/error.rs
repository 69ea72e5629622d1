use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use albums_core::album::AlbumError;
use albums_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::seed::SeedError;

/// JSON body carried by every message-only response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A failed API call: a status code and a human-readable message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a repository failure to its status, replacing the detail with
    /// `message`. Anything other than not-found is logged with the detail.
    pub fn repository(err: RepositoryError, message: impl Into<String>) -> Self {
        let status = repository_status(&err);
        let message = message.into();

        if !err.is_not_found() {
            tracing::error!(error = %err, status = %status, "{}", message);
        }

        Self::new(status, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<AlbumError> for ApiError {
    fn from(err: AlbumError) -> Self {
        tracing::warn!(error = %err, "Album rejected");
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Message::new(self.message))).into_response()
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(err))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Application error type that wraps `anyhow::Error`.
///
/// The status comes from a `RepositoryError` or `SeedError` found in the
/// chain; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(seed_error) = self.0.downcast_ref::<SeedError>() {
            match seed_error {
                SeedError::TableNeverActive { .. } => StatusCode::SERVICE_UNAVAILABLE,
                SeedError::Store(e) | SeedError::CreateTable(e) => repository_status(e),
            }
        } else if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_status(repo_error)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(error = %self.0, status = %status_code, "Application error");

        (status_code, Json(Message::new(self.0.to_string()))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_message(response: Response) -> Message {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let response = ApiError::from(AlbumError::MissingPrice).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await.message, "Missing Price");
    }

    #[tokio::test]
    async fn test_repository_error_keeps_caller_message() {
        let err = RepositoryError::QueryFailed("boom".to_string());
        let response = ApiError::repository(err, "issue fetching albums").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await.message, "issue fetching albums");
    }

    #[test]
    fn test_repository_error_statuses() {
        let not_found = RepositoryError::NotFound {
            entity_type: "Album",
            id: "x".to_string(),
        };
        let not_active = RepositoryError::TableNotActive {
            table: "albums".to_string(),
        };

        assert_eq!(
            ApiError::repository(not_found, "album not found").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::repository(not_active, "issue fetching albums").status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn test_app_error_uses_seed_error_status() {
        let err = SeedError::TableNeverActive {
            attempts: 4,
            source: RepositoryError::TableNotActive {
                table: "albums".to_string(),
            },
        };
        let response = AppError::from(err).into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_message(response)
            .await
            .message
            .contains("did not become active"));
    }
}
