use axum::extract::Path;
use axum::http::StatusCode;

use crate::error::AppError;
use crate::routes::parse_current_year;

// GET /rank/{contest}/{year}/{division}/{class} - Show the ranking form for one class
pub async fn class_rank(
    Path((contest, year, division, class)): Path<(String, String, String, String)>,
) -> Result<String, AppError> {
    let year = parse_current_year(&year)?;

    Ok(format!(
        "Display a form to the judge to rank {division} {class} competitors for the {year} {contest} contest."
    ))
}

// POST /rank/{contest}/{year}/{division}/{class} - Accept a submitted ranking
//
// The ranking is acknowledged for later compilation; nothing is stored yet.
pub async fn class_rank_post(
    Path((contest, year, division, class)): Path<(String, String, String, String)>,
) -> Result<(StatusCode, String), AppError> {
    let year = parse_current_year(&year)?;

    Ok((
        StatusCode::ACCEPTED,
        format!(
            "Save a ranking of {division} {class} competitors for the {year} {contest} contest."
        ),
    ))
}
