//! Recent Results Component

use leptos::prelude::*;

use crate::dashboard::{recent_row, NO_HISTORY};
use crate::models::RecentResult;

#[component]
pub fn RecentResults(results: Vec<RecentResult>) -> impl IntoView {
    if results.is_empty() {
        return view! { <p class="empty">{NO_HISTORY}</p> }.into_any();
    }

    view! {
        <table class="recent-results">
            <thead>
                <tr>
                    <th>"問題タイプ"</th>
                    <th>"正解"</th>
                    <th>"あなたの回答"</th>
                    <th>"結果"</th>
                    <th>"日時"</th>
                </tr>
            </thead>
            <tbody>
                {results.iter().map(recent_row).map(|row| view! {
                    <tr>
                        <td>{row.field}</td>
                        <td>{row.correct_answer}</td>
                        <td>{row.user_answer}</td>
                        <td class=row.verdict_class>{row.verdict}</td>
                        <td>{row.answered_at}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
