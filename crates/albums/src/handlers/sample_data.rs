//! Sample-data handler.

use std::sync::Arc;

use axum::{extract::State, Json};

use albums_core::album::sample_albums;

use crate::handlers::AppError;
use crate::seed::{seed, SeedReport};
use crate::state::AppState;

/// Seed the starter catalog (GET /sample-data).
///
/// Each call writes a fresh copy of the catalog with new IDs.
pub async fn create_sample_data(
    State(state): State<AppState>,
) -> Result<Json<SeedReport>, AppError> {
    let report = seed(Arc::clone(&state.albums), sample_albums(), &state.seed_policy).await?;
    Ok(Json(report))
}
