//! Message Modal Component
//!
//! Shows the current notice from `AppContext` until dismissed.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn MessageModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| {
            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.dismiss()>
                    <div
                        class=format!("modal message-modal {}", notice.level.class())
                        on:click=|ev| ev.stop_propagation()
                    >
                        <p class="message-text">{notice.message}</p>
                        <button class="btn btn-primary" on:click=move |_| ctx.dismiss()>
                            "閉じる"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
