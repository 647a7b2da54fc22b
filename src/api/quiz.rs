//! Quiz Endpoints

use gloo_net::http::Request;

use super::{dispatch, read_json};
use crate::error::ApiResult;
use crate::models::{Genre, QuizMode, QuizQuestion, QuizSubmission};
use crate::routes;

pub async fn fetch_question(genre: Genre, mode: QuizMode) -> ApiResult<QuizQuestion> {
    let url = routes::quiz_question(genre, mode);
    let response = dispatch("GET", &url, Request::get(&url).build()).await?;
    read_json(&url, response).await
}

/// Record one answered question; the acknowledgment body is ignored
pub async fn submit_result(genre: Genre, submission: &QuizSubmission) -> ApiResult<()> {
    let url = routes::quiz_submit(genre);
    let request = Request::post(&url).json(submission);
    dispatch("POST", &url, request).await?;
    Ok(())
}
