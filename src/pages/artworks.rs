//! Artworks Page
//!
//! Catalog management: register, search, edit, delete.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ArtworkTable, EditModal, SearchForm, UploadForm};
use crate::store::{CatalogState, CatalogStateStoreFields};

#[component]
pub fn ArtworksPage() -> impl IntoView {
    let store = Store::new(CatalogState::default());
    provide_context(store);

    view! {
        <div class="container artworks-page">
            <h1>"作品管理"</h1>
            <UploadForm />
            <section class="catalog">
                <SearchForm />
                <p class="artwork-count">
                    "登録作品数: "
                    {move || store.artwork_count().get().map(|n| format!("{}件", n)).unwrap_or_else(|| "-".to_string())}
                </p>
                <ArtworkTable />
            </section>
            <EditModal />
        </div>
    }
}
