//! Quiz Page
//!
//! Standard and review quizzes share this page; only the question source differs.

use leptos::prelude::*;

use crate::components::{QuizArea, QuizController, StatsPanel};
use crate::context::AppContext;
use crate::models::{Genre, QuizMode};

fn heading(genre: Genre, mode: QuizMode) -> String {
    let genre = match genre {
        Genre::Western => "西洋美術",
        Genre::Japanese => "日本美術",
    };
    match mode {
        QuizMode::Standard => format!("{}クイズ", genre),
        QuizMode::Review => format!("{}クイズ (復習)", genre),
    }
}

#[component]
pub fn QuizPage(mode: QuizMode) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let controller = QuizController::new(ctx, mode);

    view! {
        <div class="container quiz-page">
            <h1>{heading(ctx.genre, mode)}</h1>
            <QuizArea controller=controller />
            <StatsPanel on_reset=Callback::new(move |_: ()| controller.clear()) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_names_genre_and_mode() {
        assert_eq!(heading(Genre::Western, QuizMode::Standard), "西洋美術クイズ");
        assert_eq!(heading(Genre::Japanese, QuizMode::Review), "日本美術クイズ (復習)");
    }
}
