//! Thumbnail Component
//!
//! Clickable thumbnail that opens the full-size image in a new tab.

use leptos::prelude::*;

use crate::models::Genre;
use crate::routes;

fn open_full_image(genre: Genre, filename: &str) {
    let url = routes::image_url(genre, filename);
    let opened = web_sys::window().and_then(|w| w.open_with_url_and_target(&url, "_blank").ok().flatten());
    if opened.is_none() {
        log::warn!("could not open {}", url);
    }
}

#[component]
pub fn Thumbnail(
    genre: Genre,
    #[prop(into)] filename: String,
    #[prop(into, default = "thumbnail".to_string())] img_class: String,
) -> impl IntoView {
    let src = routes::thumbnail_url(genre, &filename);
    let alt = filename.clone();

    view! {
        <img
            class=img_class
            src=src
            alt=alt
            title="クリックで元画像を表示"
            on:click=move |_| open_full_image(genre, &filename)
        />
    }
}
