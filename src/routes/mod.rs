use axum::{
    routing::{get, post},
    Router,
};
use chrono::Datelike;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

pub mod competitors;
pub mod health;
pub mod home;
pub mod rank;
pub mod results;

/// Build the application router.
///
/// Static assets are served under /static with the prefix stripped
/// before resolving against the configured directory. Anything that
/// matches no route falls through to a plain 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route(
            "/rank/{contest}/{year}/{division}/{class}",
            get(rank::class_rank).post(rank::class_rank_post),
        )
        .route(
            "/results/{contest}/{year}/{division}/{class}",
            get(results::class_results),
        )
        .route(
            "/competitor/{location}/{competitor}",
            post(competitors::create_competitor),
        )
        .nest_service("/static", ServeDir::new(&state.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Parse the year segment and require it to be the current calendar
// year. Stale or malformed years read as missing routes to the caller.
pub(crate) fn parse_current_year(raw: &str) -> Result<i32, AppError> {
    let year: i32 = raw
        .parse()
        .map_err(|_| AppError::InvalidYear(raw.to_string()))?;

    if year != chrono::Local::now().year() {
        return Err(AppError::InvalidYear(raw.to_string()));
    }

    Ok(year)
}
