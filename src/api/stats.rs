//! Statistics Endpoints

use gloo_net::http::Request;

use super::{dispatch, read_json};
use crate::error::ApiResult;
use crate::models::{DashboardStats, Genre, QuizStats};
use crate::routes;

pub async fn fetch_stats(genre: Genre) -> ApiResult<QuizStats> {
    let url = routes::quiz_stats(genre);
    let response = dispatch("GET", &url, Request::get(&url).build()).await?;
    read_json(&url, response).await
}

pub async fn fetch_dashboard(genre: Genre) -> ApiResult<DashboardStats> {
    let url = routes::dashboard_stats(genre);
    let response = dispatch("GET", &url, Request::get(&url).build()).await?;
    read_json(&url, response).await
}

/// Clear every recorded result in the genre
pub async fn reset_stats(genre: Genre) -> ApiResult<()> {
    let url = routes::quiz_reset(genre);
    dispatch("POST", &url, Request::post(&url).build()).await?;
    log::info!("quiz results reset for {}", genre.as_str());
    Ok(())
}
