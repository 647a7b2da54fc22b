//! Stats Panel Component
//!
//! Per-genre quiz statistics under the quiz area, with a reset action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::charts::format_percent;
use crate::components::ConfirmButton;
use crate::context::{AppContext, NoticeLevel};
use crate::dashboard::{reset_failure_message, STATS_FAILED};
use crate::models::{field_label, QuizStats};

#[component]
pub fn StatsPanel(#[prop(into)] on_reset: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let genre = ctx.genre;

    let (visible, set_visible) = signal(true);
    let (stats, set_stats) = signal(None::<Result<QuizStats, String>>);

    // Refetch on every trigger bump while shown
    Effect::new(move |_| {
        let _ = ctx.stats_trigger.get();
        if !visible.get() {
            return;
        }
        spawn_local(async move {
            match api::fetch_stats(genre).await {
                Ok(loaded) => set_stats.set(Some(Ok(loaded))),
                Err(err) => {
                    log::error!("stats fetch failed: {}", err);
                    set_stats.set(Some(Err(STATS_FAILED.to_string())));
                }
            }
        });
    });

    let reset = move |_: ()| {
        spawn_local(async move {
            match api::reset_stats(genre).await {
                Ok(()) => {
                    ctx.notify("クイズ結果をリセットしました", NoticeLevel::Success);
                    ctx.reload_stats();
                    on_reset.run(());
                }
                Err(err) => ctx.notify(reset_failure_message(&err), NoticeLevel::Error),
            }
        });
    };

    view! {
        <section class="stats-panel">
            <div class="stats-actions">
                <button class="btn btn-secondary" on:click=move |_| set_visible.update(|v| *v = !*v)>
                    {move || if visible.get() { "統計を非表示" } else { "統計を表示" }}
                </button>
                <ConfirmButton
                    button_class="btn btn-danger"
                    label="クイズ結果をリセット"
                    prompt="このジャンルの回答履歴をすべて削除しますか？"
                    on_confirm=Callback::new(reset)
                />
            </div>
            <div id="stats-content" class:hidden=move || !visible.get()>
                {move || match stats.get() {
                    None => view! { <p class="loading">"読み込み中..."</p> }.into_any(),
                    Some(Err(message)) => view! { <p class="error">{message}</p> }.into_any(),
                    Some(Ok(loaded)) => view! { <StatCards stats=loaded /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn StatCards(stats: QuizStats) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <h3>"総回答数"</h3>
                <p class="stat-value">{stats.total_attempts}</p>
            </div>
            <div class="stat-card">
                <h3>"正解数"</h3>
                <p class="stat-value">{stats.correct_attempts}</p>
            </div>
            <div class="stat-card">
                <h3>"正答率"</h3>
                <p class="stat-value">{format_percent(stats.overall_accuracy)}</p>
            </div>
            {stats.field_stats.into_iter().map(|stat| view! {
                <div class="stat-card field-stat">
                    <h3>{field_label(&stat.field).to_string()}</h3>
                    <p class="stat-value">{format_percent(stat.accuracy)}</p>
                    <p class="stat-detail">{format!("{}/{}問", stat.correct, stat.total)}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
