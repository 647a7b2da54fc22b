//! Artwork Info Component
//!
//! The artwork card above a question. One attribute may be masked.

use leptos::prelude::*;

use crate::components::Thumbnail;
use crate::models::{ArtworkView, Genre, ImageSlot, MASKED};

#[component]
pub fn ArtworkInfo(genre: Genre, artwork: ArtworkView) -> impl IntoView {
    let image = match artwork.image_slot() {
        ImageSlot::Thumbnail(filename) => view! {
            <Thumbnail genre=genre filename=filename img_class="artwork-image" />
        }
        .into_any(),
        ImageSlot::Masked => view! { <div class="image-placeholder masked">{MASKED}</div> }.into_any(),
        ImageSlot::Missing => view! { <div class="image-placeholder">"画像なし"</div> }.into_any(),
    };

    let row = |label: &'static str, value: String| {
        let masked = value == MASKED;
        view! {
            <p class="artwork-field" class:masked=masked>
                <strong>{label}": "</strong>
                {value}
            </p>
        }
    };

    view! {
        <div class="artwork-info">
            <div class="artwork-image-slot">{image}</div>
            <div class="artwork-details">
                {row("作者", artwork.author)}
                {row("作品名", artwork.title)}
                {row("美術様式", artwork.style)}
            </div>
        </div>
    }
}
