//! Stats Chart Components
//!
//! Inline SVG renderings of the dashboard charts.

use leptos::prelude::*;

use crate::charts::{
    accuracy_bars, attempt_bars, bar_slot, format_percent, overall_doughnut, ACCURACY_COLOR, CORRECT_COLOR,
    DOUGHNUT_RADIUS, INCORRECT_COLOR,
};
use crate::models::FieldStat;

#[component]
pub fn DoughnutChart(correct: u32, total: u32) -> impl IntoView {
    let radius = DOUGHNUT_RADIUS.to_string();
    let arcs = overall_doughnut(correct, total);

    view! {
        <figure class="chart doughnut-chart">
            <figcaption>"全体の正答率"</figcaption>
            <svg viewBox="0 0 42 42" class="doughnut">
                <circle cx="21" cy="21" r=radius.clone() fill="transparent" stroke="#e5e5e5" stroke-width="6" />
                {arcs.iter().filter(|arc| arc.length > 0.0).map(|arc| view! {
                    <circle
                        cx="21"
                        cy="21"
                        r=radius.clone()
                        fill="transparent"
                        stroke=arc.color
                        stroke-width="6"
                        stroke-dasharray=arc.dash_array()
                        stroke-dashoffset=arc.dash_offset()
                    />
                }).collect_view()}
            </svg>
            <ul class="chart-legend">
                {arcs.into_iter().map(|arc| view! {
                    <li>
                        <span class="legend-swatch" style=format!("background: {}", arc.color)></span>
                        {format!("{}: {}", arc.label, arc.caption)}
                    </li>
                }).collect_view()}
            </ul>
        </figure>
    }
}

fn coord(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn AccuracyChart(stats: Vec<FieldStat>) -> impl IntoView {
    let bars = accuracy_bars(&stats);
    let count = bars.len();

    view! {
        <figure class="chart bar-chart">
            <figcaption>"問題タイプ別正答率"</figcaption>
            <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="bars">
                {bars.iter().enumerate().map(|(index, bar)| {
                    let (x, width) = bar_slot(index, count);
                    view! {
                        <rect
                            x=coord(x)
                            y=coord(100.0 - bar.height)
                            width=coord(width)
                            height=coord(bar.height)
                            fill=ACCURACY_COLOR
                        />
                    }
                }).collect_view()}
            </svg>
            <ul class="bar-labels">
                {bars.into_iter().map(|bar| view! {
                    <li>
                        <span class="bar-label">{bar.label}</span>
                        <span class="bar-value">{format_percent(bar.value)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </figure>
    }
}

#[component]
pub fn AttemptsChart(stats: Vec<FieldStat>) -> impl IntoView {
    let bars = attempt_bars(&stats);
    let count = bars.len();

    view! {
        <figure class="chart bar-chart stacked">
            <figcaption>"問題タイプ別回答数"</figcaption>
            <svg viewBox="0 0 100 100" preserveAspectRatio="none" class="bars">
                {bars.iter().enumerate().map(|(index, bar)| {
                    let (x, width) = bar_slot(index, count);
                    let correct_top = 100.0 - bar.correct_height;
                    view! {
                        <rect
                            x=coord(x)
                            y=coord(correct_top)
                            width=coord(width)
                            height=coord(bar.correct_height)
                            fill=CORRECT_COLOR
                        />
                        <rect
                            x=coord(x)
                            y=coord(correct_top - bar.incorrect_height)
                            width=coord(width)
                            height=coord(bar.incorrect_height)
                            fill=INCORRECT_COLOR
                        />
                    }
                }).collect_view()}
            </svg>
            <ul class="bar-labels">
                {bars.into_iter().map(|bar| view! {
                    <li>
                        <span class="bar-label">{bar.label}</span>
                        <span class="bar-value">{format!("正解 {} / 不正解 {}", bar.correct, bar.incorrect)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </figure>
    }
}
