//! Edit Modal Component
//!
//! Replaces an artwork's text fields. The image is not editable here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::catalog::{ArtworkFields, EditDraft, UPDATE_FAILED};
use crate::context::{AppContext, NoticeLevel};
use crate::store::{store_close_editor, store_load_listing, use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn EditModal() -> impl IntoView {
    let store = use_catalog_store();

    view! {
        {move || store.editing().get().map(|draft| view! { <EditDialog draft=draft /> })}
    }
}

#[component]
fn EditDialog(draft: EditDraft) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_catalog_store();
    let genre = ctx.genre;
    let id = draft.id;

    let (author, set_author) = signal(draft.fields.author);
    let (title, set_title) = signal(draft.fields.title);
    let (style, set_style) = signal(draft.fields.style);
    let (notes, set_notes) = signal(draft.fields.notes);
    let (saving, set_saving) = signal(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = EditDraft {
            id,
            fields: ArtworkFields {
                author: author.get_untracked(),
                title: title.get_untracked(),
                style: style.get_untracked(),
                notes: notes.get_untracked(),
            },
        };
        let update = match draft.to_update() {
            Ok(update) => update,
            Err(message) => {
                ctx.notify(message, NoticeLevel::Error);
                return;
            }
        };

        set_saving.set(true);
        spawn_local(async move {
            match api::update_artwork(genre, id, &update).await {
                Ok(()) => {
                    ctx.notify("更新しました", NoticeLevel::Success);
                    store_close_editor(&store);
                    store_load_listing(store, genre, String::new());
                }
                Err(err) => ctx.notify(err.alert_message(UPDATE_FAILED), NoticeLevel::Error),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal edit-modal" on:submit=save>
                <h2>{format!("作品を編集 (ID: {})", id)}</h2>
                <label>
                    "作者"
                    <input type="text" prop:value=move || author.get() on:input=move |ev| set_author.set(event_target_value(&ev)) />
                </label>
                <label>
                    "作品名"
                    <input type="text" prop:value=move || title.get() on:input=move |ev| set_title.set(event_target_value(&ev)) />
                </label>
                <label>
                    "様式"
                    <input type="text" prop:value=move || style.get() on:input=move |ev| set_style.set(event_target_value(&ev)) />
                </label>
                <label>
                    "備考"
                    <textarea rows="3" prop:value=move || notes.get() on:input=move |ev| set_notes.set(event_target_value(&ev))></textarea>
                </label>
                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary" prop:disabled=move || saving.get()>"保存"</button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| store_close_editor(&store)>
                        "キャンセル"
                    </button>
                </div>
            </form>
        </div>
    }
}
