//! Album CRUD handlers.
//!
//! Each handler is a single repository call. Store failures are logged with
//! their detail and answered with a fixed message.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use albums_core::album::{Album, CreateAlbumRequest};

use super::error::{ApiError, Message};
use crate::state::AppState;

/// Normalises a path ID, rejecting anything that is not a UUID.
fn parse_id(raw: &str) -> Result<String, ApiError> {
    Uuid::parse_str(raw)
        .map(|id| id.to_string())
        .map_err(|_| ApiError::bad_request("invalid ID"))
}

/// List all albums (GET /albums).
pub async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<Album>>, ApiError> {
    let albums = state
        .albums
        .list_albums()
        .await
        .map_err(|e| ApiError::repository(e, "issue fetching albums"))?;

    Ok(Json(albums))
}

/// Get a single album (GET /albums/{id}).
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    let id = parse_id(&id)?;

    let album = state.albums.get_album(&id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::repository(e, "album not found")
        } else {
            ApiError::repository(e, "error fetching album")
        }
    })?;

    Ok(Json(album))
}

/// Create an album (POST /albums).
///
/// Any `id` in the body is ignored; the server assigns a fresh UUID.
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<CreateAlbumRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Rejected album body");
        ApiError::bad_request("invalid request body")
    })?;

    let album = request.into_album()?;

    state
        .albums
        .create_album(&album)
        .await
        .map_err(|e| ApiError::repository(e, "issue creating album"))?;

    tracing::info!(album_id = %album.id, "Created album");
    Ok((StatusCode::CREATED, Json(album)))
}

/// Delete an album (DELETE /albums/{id}).
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&id)?;

    state.albums.delete_album(&id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::repository(e, "album does not exist")
        } else {
            ApiError::repository(e, "issue deleting album")
        }
    })?;

    tracing::info!(album_id = %id, "Deleted album");
    Ok(Json(Message::new("Deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_normalises_case() {
        let id = parse_id("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(id, "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[test]
    fn test_parse_id_rejects_non_uuid() {
        let err = parse_id("not-a-uuid").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
