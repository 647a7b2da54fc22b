//! Art Quiz App
//!
//! Root component: provides the shared context and mounts the configured page.

use leptos::prelude::*;

use crate::components::{ErrorScreen, MessageModal};
use crate::config::{ConfigError, PageConfig, PageKind};
use crate::context::{AppContext, Notice};
use crate::models::QuizMode;
use crate::pages::{ArtworksPage, QuizPage, StatsPage};

const RESTART_HINT: &str = "トップページからやり直してください。";

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    // State
    let stats_trigger = signal(0u32);
    let notice = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(AppContext::new(config.genre, stats_trigger, notice));

    let page = match config.page {
        PageKind::Quiz => view! { <QuizPage mode=QuizMode::Standard /> }.into_any(),
        PageKind::Review => view! { <QuizPage mode=QuizMode::Review /> }.into_any(),
        PageKind::Artworks => view! { <ArtworksPage /> }.into_any(),
        PageKind::Stats => view! { <StatsPage /> }.into_any(),
    };

    view! {
        <div class=format!("app genre-{}", config.genre.as_str())>
            {page}
            <MessageModal />
        </div>
    }
}

/// Shown instead of `App` when the host page is misconfigured
#[component]
pub fn ConfigErrorScreen(error: ConfigError) -> impl IntoView {
    let message = match error {
        ConfigError::MissingGenre | ConfigError::UnknownGenre(_) => {
            format!("{}{}", ConfigError::MissingGenre, RESTART_HINT)
        }
        other => format!("{}{}", other, RESTART_HINT),
    };

    view! { <ErrorScreen message=message /> }
}
