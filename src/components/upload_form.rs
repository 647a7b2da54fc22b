//! Upload Form Component
//!
//! Multipart registration of a new artwork with an optional image.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use crate::api;
use crate::catalog::{upload_entries, ArtworkFields, UPLOAD_FAILED};
use crate::context::{AppContext, NoticeLevel};
use crate::store::{store_load_listing, use_catalog_store};

fn form_text(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_catalog_store();
    let genre = ctx.genre;
    let form_ref = NodeRef::<html::Form>::new();
    let (submitting, set_submitting) = signal(false);

    let upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get() else {
            return;
        };
        let data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(err) => {
                log::error!("could not read upload form: {:?}", err);
                return;
            }
        };
        let fields = ArtworkFields {
            author: form_text(&data, "author"),
            title: form_text(&data, "title"),
            style: form_text(&data, "style"),
            notes: form_text(&data, "notes"),
        };
        let update = match fields.validate() {
            Ok(update) => update,
            Err(message) => {
                ctx.notify(message, NoticeLevel::Error);
                return;
            }
        };
        for (name, value) in upload_entries(&update) {
            if let Err(err) = data.set_with_str(name, &value) {
                log::error!("could not set upload field {}: {:?}", name, err);
                return;
            }
        }

        set_submitting.set(true);
        spawn_local(async move {
            match api::upload_artwork(genre, &data).await {
                Ok(response) => {
                    log::info!("uploaded artwork (image: {})", response.image_uploaded);
                    ctx.notify(response.message, NoticeLevel::Success);
                    form.reset();
                    store_load_listing(store, genre, String::new());
                }
                Err(err) => ctx.notify(err.alert_message(UPLOAD_FAILED), NoticeLevel::Error),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="upload-form" node_ref=form_ref on:submit=upload>
            <h2>"作品を登録"</h2>
            <label>"作者" <input type="text" name="author" required /></label>
            <label>"作品名" <input type="text" name="title" required /></label>
            <label>"様式" <input type="text" name="style" required /></label>
            <label>"備考" <textarea name="notes" rows="3"></textarea></label>
            <label>"画像" <input type="file" name="image" accept="image/*" /></label>
            <button type="submit" class="btn btn-primary" prop:disabled=move || submitting.get()>
                {move || if submitting.get() { "送信中..." } else { "登録" }}
            </button>
        </form>
    }
}
