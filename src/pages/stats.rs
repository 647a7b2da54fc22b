//! Stats Dashboard Page
//!
//! Charts and recent answers for one genre. A failed load replaces the page
//! with an error screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::charts::format_percent;
use crate::components::{AccuracyChart, AttemptsChart, ConfirmButton, DoughnutChart, ErrorScreen, RecentResults};
use crate::context::{AppContext, NoticeLevel};
use crate::dashboard::{failure_reason, RESET_FAILED};
use crate::models::DashboardStats;

#[component]
pub fn StatsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let genre = ctx.genre;
    let (loaded, set_loaded) = signal(None::<Result<DashboardStats, String>>);

    Effect::new(move |_| {
        let _ = ctx.stats_trigger.get();
        spawn_local(async move {
            match api::fetch_dashboard(genre).await {
                Ok(stats) => set_loaded.set(Some(Ok(stats))),
                Err(err) => {
                    log::error!("dashboard fetch failed: {}", err);
                    set_loaded.set(Some(Err(failure_reason(&err))));
                }
            }
        });
    });

    let reset = Callback::new(move |_: ()| {
        spawn_local(async move {
            match api::reset_stats(genre).await {
                Ok(()) => {
                    ctx.notify("統計データをリセットしました。", NoticeLevel::Success);
                    ctx.reload_stats();
                }
                Err(err) => {
                    log::error!("stats reset failed: {}", err);
                    ctx.notify(format!("エラーが発生しました: {}", RESET_FAILED), NoticeLevel::Error);
                }
            }
        });
    });

    view! {
        {move || match loaded.get() {
            None => view! { <p class="loading">"読み込み中..."</p> }.into_any(),
            Some(Err(reason)) => view! {
                <ErrorScreen message="統計データの読み込みに失敗しました。" reason=reason />
            }
            .into_any(),
            Some(Ok(stats)) => view! {
                <div class="container stats-page">
                    <h1>"学習統計"</h1>
                    <div class="stats-summary">
                        <p>{format!("総回答数: {}", stats.total_attempts)}</p>
                        <p>{format!("正解数: {}", stats.correct_attempts)}</p>
                        <p>{format!("正答率: {}", format_percent(stats.overall_accuracy))}</p>
                    </div>
                    <div class="charts">
                        <DoughnutChart correct=stats.correct_attempts total=stats.total_attempts />
                        <AccuracyChart stats=stats.field_stats.clone() />
                        <AttemptsChart stats=stats.field_stats.clone() />
                    </div>
                    <h2>"最近の回答"</h2>
                    <RecentResults results=stats.recent_results />
                    <ConfirmButton
                        button_class="btn btn-danger"
                        label="統計データをリセット"
                        prompt="すべての回答履歴を削除しますか？"
                        on_confirm=reset
                    />
                </div>
            }
            .into_any(),
        }}
    }
}
