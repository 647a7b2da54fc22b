//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity on the artworks page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::catalog::{apply_fetch, normalize_query, CatalogListing, EditDraft, ListingRequests};
use crate::error::ApiResult;
use crate::models::{Artwork, Genre};

/// Artworks page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// What the list area currently shows
    pub listing: CatalogListing,
    /// Size of the unfiltered collection, once known
    pub artwork_count: Option<usize>,
    /// Search box contents
    pub query: String,
    /// Artwork open in the edit modal
    pub editing: Option<EditDraft>,
    /// In-flight list fetches; responses for superseded ones are dropped
    pub requests: ListingRequests,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a resolved list fetch; the count only moves for unfiltered fetches
pub fn store_apply_listing(store: &CatalogStore, query: &str, result: ApiResult<Vec<Artwork>>) {
    let update = apply_fetch(query, result);
    if let Some(count) = update.count {
        store.artwork_count().set(Some(count));
    }
    store.listing().set(update.listing);
}

pub fn store_open_editor(store: &CatalogStore, artwork: &Artwork) {
    store.editing().set(Some(EditDraft::from_artwork(artwork)));
}

pub fn store_close_editor(store: &CatalogStore) {
    store.editing().set(None);
}

// ========================
// Store Actions
// ========================

/// Fetch the list for `query` and apply it. The previous table stays up
/// until the response arrives.
pub fn store_load_listing(store: CatalogStore, genre: Genre, query: String) {
    let Some(ticket) = store.requests().try_update(ListingRequests::begin) else {
        return;
    };
    store.query().set(query.clone());
    if store.listing().with_untracked(|l| matches!(l, CatalogListing::NotLoaded)) {
        store.listing().set(CatalogListing::Loading);
    }
    spawn_local(async move {
        let result = api::list_artworks(genre, &query).await;
        if !store.requests().with_untracked(|r| r.is_current(ticket)) {
            log::debug!("dropped superseded artwork list for query {:?}", normalize_query(&query));
            return;
        }
        match &result {
            Ok(artworks) => log::debug!(
                "listed {} artworks for query {:?}",
                artworks.len(),
                normalize_query(&query)
            ),
            Err(err) => log::error!("artwork list failed: {}", err),
        }
        store_apply_listing(&store, &query, result);
    });
}
