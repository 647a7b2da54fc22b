//! Artwork Table Component
//!
//! The catalog list area: load button, empty and error states, or the table.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{CatalogListing, DELETE_FAILED};
use crate::components::{ConfirmButton, Thumbnail};
use crate::context::{AppContext, NoticeLevel};
use crate::models::Artwork;
use crate::store::{store_load_listing, store_open_editor, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn ArtworkTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_catalog_store();

    view! {
        <div id="artworks-list" class="artworks-list">
            {move || match store.listing().get() {
                CatalogListing::NotLoaded => view! {
                    <button
                        class="btn btn-primary"
                        on:click=move |_| store_load_listing(store, ctx.genre, String::new())
                    >
                        "作品一覧を表示"
                    </button>
                }
                .into_any(),
                CatalogListing::Loading => view! { <p class="loading">"読み込み中..."</p> }.into_any(),
                CatalogListing::Empty(reason) => view! { <p class="empty">{reason.message()}</p> }.into_any(),
                CatalogListing::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                CatalogListing::Table(artworks) => view! {
                    <table class="artworks-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"画像"</th>
                                <th>"作者"</th>
                                <th>"作品名"</th>
                                <th>"様式"</th>
                                <th>"備考"</th>
                                <th>"操作"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {artworks.into_iter().map(|artwork| view! { <ArtworkRow artwork=artwork /> }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ArtworkRow(artwork: Artwork) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_catalog_store();
    let genre = ctx.genre;
    let id = artwork.id;

    let delete = move |_: ()| {
        spawn_local(async move {
            match api::delete_artwork(genre, id).await {
                Ok(()) => {
                    log::info!("deleted artwork {}", id);
                    ctx.notify("作品を削除しました", NoticeLevel::Success);
                    store_load_listing(store, genre, String::new());
                }
                Err(err) => ctx.notify(err.alert_message(DELETE_FAILED), NoticeLevel::Error),
            }
        });
    };

    let image = match artwork.image_filename.clone().filter(|f| !f.is_empty()) {
        Some(filename) => view! { <Thumbnail genre=genre filename=filename /> }.into_any(),
        None => view! { <span class="no-image">"なし"</span> }.into_any(),
    };
    let notes = artwork.display_notes().unwrap_or("").to_string();
    let editable = artwork.clone();

    view! {
        <tr>
            <td>{id}</td>
            <td>{image}</td>
            <td>{artwork.author}</td>
            <td>{artwork.title}</td>
            <td>{artwork.style}</td>
            <td class="notes">{notes}</td>
            <td class="actions">
                <button class="btn btn-secondary" on:click=move |_| store_open_editor(&store, &editable)>
                    "編集"
                </button>
                <ConfirmButton
                    button_class="btn btn-danger"
                    label="削除"
                    prompt="削除しますか？"
                    on_confirm=Callback::new(delete)
                />
            </td>
        </tr>
    }
}
