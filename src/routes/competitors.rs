use axum::extract::{Path, State};
use axum::response::Redirect;

use crate::error::AppError;
use crate::state::AppState;

// POST /competitor/{location}/{competitor} - Register a new competitor
pub async fn create_competitor(
    State(state): State<AppState>,
    Path((location, competitor)): Path<(String, String)>,
) -> Result<Redirect, AppError> {
    let id = state.competitors.insert(&competitor, &location).await?;

    tracing::info!(id, name = %competitor, "competitor created");

    // Send the caller back to the home page.
    Ok(Redirect::to("/"))
}
