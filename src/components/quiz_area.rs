//! Quiz Area Component
//!
//! Renders the quiz session and drives it: fetch a question, accept one
//! answer, report it, advance.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ArtworkInfo, Thumbnail};
use crate::context::AppContext;
use crate::models::{Genre, QuestionField, QuizMode, QuizQuestion};
use crate::routes;
use crate::session::{choice_label, Outcome, QuizSession, Stage};

/// Handle to the page's quiz session. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct QuizController {
    genre: Genre,
    mode: QuizMode,
    session: RwSignal<QuizSession>,
    ctx: AppContext,
}

impl QuizController {
    pub fn new(ctx: AppContext, mode: QuizMode) -> Self {
        Self {
            genre: ctx.genre,
            mode,
            session: RwSignal::new(QuizSession::new()),
            ctx,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn session(&self) -> RwSignal<QuizSession> {
        self.session
    }

    /// Fetch a fresh question; only the latest request may land
    pub fn load(&self) {
        let ticket = self.session.write().begin_load();
        let (genre, mode, session) = (self.genre, self.mode, self.session);
        spawn_local(async move {
            let result = api::fetch_question(genre, mode).await;
            if !session.with_untracked(|s| s.is_current(ticket)) {
                log::debug!("dropped superseded question response ({:?})", ticket);
                return;
            }
            if let Err(err) = &result {
                log::error!("question fetch failed: {}", err);
            }
            session.write().complete_load(ticket, result);
        });
    }

    /// Commit `choice` and report it. Ignored once the question is answered.
    pub fn submit(&self, choice: String) {
        if !self.session.with_untracked(QuizSession::accepts_answer) {
            return;
        }
        let Some(report) = self.session.write().submit(&choice) else {
            return;
        };
        log::debug!(
            "answered {} for artwork {}: correct={}",
            report.question_field.as_str(),
            report.artwork_id,
            report.is_correct
        );

        let (genre, ctx) = (self.genre, self.ctx);
        spawn_local(async move {
            match api::submit_result(genre, &report).await {
                Ok(()) => ctx.reload_stats(),
                Err(err) => log::error!("failed to record quiz result: {}", err),
            }
        });
    }

    pub fn advance(&self) {
        self.load();
    }

    /// Back to the start screen, discarding any in-flight fetch
    pub fn clear(&self) {
        self.session.write().reset();
    }
}

#[component]
pub fn QuizArea(controller: QuizController) -> impl IntoView {
    let session = controller.session();
    let stage = Memo::new(move |_| session.with(QuizSession::stage));
    let question = Memo::new(move |_| session.with(|s| s.question().cloned()));

    view! {
        <div id="quiz-area" class="quiz-area">
            {move || match stage.get() {
                Stage::Idle => view! {
                    <div class="quiz-start">
                        <button class="btn btn-primary" on:click=move |_| controller.load()>
                            "クイズを開始"
                        </button>
                    </div>
                }
                .into_any(),
                Stage::Loading => view! { <p class="loading">"読み込み中..."</p> }.into_any(),
                Stage::Failed(message) => view! {
                    <QuizFailure message=message controller=controller />
                }
                .into_any(),
                Stage::Question => view! {
                    {move || question.get().map(|q| view! { <QuestionView question=q controller=controller /> })}
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn QuizFailure(message: String, controller: QuizController) -> impl IntoView {
    view! {
        <div class="quiz-error">
            <p class="error">{message}</p>
            {match controller.mode() {
                QuizMode::Review => view! {
                    <a class="btn btn-secondary" href=routes::GENRE_SELECT>"ジャンル選択に戻る"</a>
                }
                .into_any(),
                QuizMode::Standard => view! {
                    <button class="btn btn-primary" on:click=move |_| controller.load()>
                        "もう一度読み込む"
                    </button>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn QuestionView(question: QuizQuestion, controller: QuizController) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let genre = ctx.genre;
    let session = controller.session();
    let is_image = question.question_field == QuestionField::Image;

    let choices = question
        .choices
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, choice)| {
            let marked = choice.clone();
            let class_for = move |base: &'static str| {
                let marked = marked.clone();
                move || format!("{}{}", base, session.with(|s| s.choice_state(&marked).class_suffix()))
            };
            if is_image {
                let src = routes::thumbnail_url(genre, &choice);
                view! {
                    <img
                        class=class_for("choice-image")
                        src=src
                        alt=format!("選択肢 {}", index + 1)
                        on:click=move |_| controller.submit(choice.clone())
                    />
                }
                .into_any()
            } else {
                let label = choice_label(index, &choice);
                view! {
                    <button
                        class=class_for("choice-button")
                        on:click=move |_| controller.submit(choice.clone())
                    >
                        {label}
                    </button>
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <div class="quiz-question">
            <ArtworkInfo genre=genre artwork=question.artwork.clone() />
            <h2 class="question-text">{question.question.clone()}</h2>
            <div class="choices" class:image-choices=is_image>
                {choices}
            </div>
            <Show when=move || session.with(QuizSession::is_loading)>
                <p class="loading">"次の問題を読み込み中..."</p>
            </Show>
            {move || session.with(QuizSession::result_panel).map(|panel| {
                let class = match panel.outcome {
                    Outcome::Correct => "quiz-result correct",
                    Outcome::Incorrect => "quiz-result incorrect",
                };
                let answer = panel.correct_answer.map(|answer| {
                    let shown = if is_image {
                        view! { <Thumbnail genre=genre filename=answer img_class="answer-image" /> }.into_any()
                    } else {
                        view! { <span>{answer}</span> }.into_any()
                    };
                    view! { <p class="correct-answer"><strong>"正解: "</strong>{shown}</p> }
                });
                let notes = panel.notes.map(|notes| {
                    view! { <p class="artwork-notes"><strong>"備考: "</strong>{notes}</p> }
                });
                view! {
                    <div class=class>
                        <h3>{panel.heading}</h3>
                        {answer}
                        {notes}
                        <button class="btn btn-primary" on:click=move |_| controller.advance()>
                            "次のクイズ"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
