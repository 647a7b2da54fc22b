//! Artwork Endpoints
//!
//! List, upload, edit and delete artworks in one genre.

use gloo_net::http::Request;
use web_sys::FormData;

use super::{dispatch, read_json};
use crate::error::ApiResult;
use crate::models::{Artwork, ArtworkList, ArtworkUpdate, Genre, UploadResponse};
use crate::routes;

/// Fetch the collection; a non-empty `query` is filtered server-side
pub async fn list_artworks(genre: Genre, query: &str) -> ApiResult<Vec<Artwork>> {
    let url = routes::artworks(genre);
    let params = routes::search_params(query);
    let request = Request::get(&url)
        .query(params.iter().map(|(key, value)| (*key, value.as_str())))
        .build();
    let response = dispatch("GET", &url, request).await?;
    let list: ArtworkList = read_json(&url, response).await?;
    Ok(list.artworks)
}

/// Multipart create; the form may carry an `image` file
pub async fn upload_artwork(genre: Genre, form: &FormData) -> ApiResult<UploadResponse> {
    let url = routes::artwork_upload(genre);
    let request = Request::post(&url).body(form.clone());
    let response = dispatch("POST", &url, request).await?;
    read_json(&url, response).await
}

/// Full-record replacement
pub async fn update_artwork(genre: Genre, id: u32, update: &ArtworkUpdate) -> ApiResult<()> {
    let url = routes::artwork(genre, id);
    let request = Request::put(&url).json(update);
    dispatch("PUT", &url, request).await?;
    Ok(())
}

pub async fn delete_artwork(genre: Genre, id: u32) -> ApiResult<()> {
    let url = routes::artwork(genre, id);
    let request = Request::delete(&url).build();
    dispatch("DELETE", &url, request).await?;
    Ok(())
}
