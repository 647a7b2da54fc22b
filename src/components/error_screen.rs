//! Error Screen Component
//!
//! Full-page error with a way back to genre selection.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn ErrorScreen(
    #[prop(into)] message: String,
    #[prop(optional, into)] reason: Option<String>,
) -> impl IntoView {
    view! {
        <div class="container error-screen">
            <h1>"エラー"</h1>
            <p class="error">{message}</p>
            {reason.map(|reason| view! { <p class="error-reason">{reason}</p> })}
            <a class="btn btn-primary" href=routes::GENRE_SELECT>"ジャンル選択に戻る"</a>
        </div>
    }
}
