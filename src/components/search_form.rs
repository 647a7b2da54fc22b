//! Search Form Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_load_listing, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn SearchForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_catalog_store();
    let (draft, set_draft) = signal(String::new());

    // Follow resets of the query (e.g. after a delete reloads the full list)
    Effect::new(move |_| set_draft.set(store.query().get()));

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_load_listing(store, ctx.genre, draft.get_untracked());
    };

    view! {
        <form class="search-form" on:submit=search>
            <input
                type="search"
                placeholder="作者・作品名・様式で検索"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"検索"</button>
        </form>
    }
}
