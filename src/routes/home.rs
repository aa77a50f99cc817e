use askama::Template;
use axum::response::Html;

use crate::error::AppError;

/// Landing page where a judge signs in to the platform.
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

// GET / - Render the home page
pub async fn home() -> Result<Html<String>, AppError> {
    let page = HomeTemplate;
    Ok(Html(page.render()?))
}
