use axum::extract::Path;

use crate::error::AppError;
use crate::routes::parse_current_year;

// GET /results/{contest}/{year}/{division}/{class} - Show compiled judge rankings
pub async fn class_results(
    Path((contest, year, division, class)): Path<(String, String, String, String)>,
) -> Result<String, AppError> {
    let year = parse_current_year(&year)?;

    Ok(format!(
        "See compiled rankings for the {year} {contest} contest, Division: {division}, Class: {class}."
    ))
}
