//! Backend API Bindings
//!
//! Thin async wrappers over the backend's HTTP endpoints, organized by domain.
//! Each call resolves to an `ApiResult`; nothing here retries.

mod artworks;
mod quiz;
mod stats;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::error::{classify_failure, ApiError, ApiResult};

// Re-export all public items
pub use artworks::*;
pub use quiz::*;
pub use stats::*;

/// Send a built request and split the response into success and
/// application failure (non-2xx, with the backend's `detail` when present).
async fn dispatch(
    method: &'static str,
    url: &str,
    request: Result<Request, gloo_net::Error>,
) -> ApiResult<Response> {
    let response = request?.send().await.map_err(|err| {
        let err = ApiError::from(err);
        log::error!("{} {} failed ({:?}): {}", method, url, err.kind(), err);
        err
    })?;

    let status = response.status();
    if response.ok() {
        log::debug!("{} {} -> {}", method, url, status);
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = classify_failure(status, &body);
    log::warn!("{} {} -> {} ({:?}): {}", method, url, status, err.kind(), err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> ApiResult<T> {
    response.json::<T>().await.map_err(|err| {
        let err = ApiError::from(err);
        log::error!("{} returned an unexpected body ({:?}): {}", url, err.kind(), err);
        err
    })
}
