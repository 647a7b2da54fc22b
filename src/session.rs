//! Quiz Session State
//!
//! One question at a time: load, answer once, reveal, advance.
//! Pure state; the controller in `components::quiz_area` renders it and
//! talks to the backend.

use crate::error::ApiResult;
use crate::models::{QuizQuestion, QuizSubmission};

/// Copy shown when a question fetch fails without a backend detail
pub const LOAD_FAILED: &str = "クイズの取得に失敗しました。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Loading,
    AwaitingAnswer,
    Answered(Outcome),
    Failed(String),
}

/// Token handed out by `begin_load`; only the newest one may land
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load was issued (or the session reset) after this one
    Stale,
}

/// Coarse render stage; the question view is rebuilt only when this or the
/// question itself changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Loading,
    Question,
    Failed(String),
}

/// Visual state of one choice element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    Open,
    Disabled,
    Correct,
    Incorrect,
}

impl ChoiceState {
    pub fn class_suffix(self) -> &'static str {
        match self {
            ChoiceState::Open => "",
            ChoiceState::Disabled => " disabled",
            ChoiceState::Correct => " disabled correct",
            ChoiceState::Incorrect => " disabled incorrect",
        }
    }
}

/// Content of the result panel shown after answering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub outcome: Outcome,
    pub heading: &'static str,
    /// Only set for incorrect answers
    pub correct_answer: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    question: Option<QuizQuestion>,
    answered: bool,
    selected: Option<String>,
    phase: QuizPhase,
    latest: u64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            question: None,
            answered: false,
            selected: None,
            phase: QuizPhase::Idle,
            latest: 0,
        }
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn question(&self) -> Option<&QuizQuestion> {
        self.question.as_ref()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == QuizPhase::Loading
    }

    pub fn stage(&self) -> Stage {
        match &self.phase {
            QuizPhase::Idle => Stage::Idle,
            QuizPhase::Failed(message) => Stage::Failed(message.clone()),
            _ if self.question.is_some() => Stage::Question,
            _ => Stage::Loading,
        }
    }

    /// Whether a response for `ticket` would still be applied
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Whether `submit` would accept a choice right now
    pub fn accepts_answer(&self) -> bool {
        !self.answered && self.question.is_some() && self.phase == QuizPhase::AwaitingAnswer
    }

    /// Start fetching a question. The previous question stays visible until
    /// the response lands.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest += 1;
        self.phase = QuizPhase::Loading;
        LoadTicket(self.latest)
    }

    /// Apply a fetch result. Responses for superseded tickets are dropped.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: ApiResult<QuizQuestion>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        self.selected = None;
        self.answered = false;
        match result {
            Ok(question) => {
                self.question = Some(question);
                self.phase = QuizPhase::AwaitingAnswer;
            }
            Err(err) => {
                self.question = None;
                self.phase = QuizPhase::Failed(err.inline_message(LOAD_FAILED));
            }
        }
        LoadOutcome::Applied
    }

    /// Commit a choice. Returns the report to send, or `None` when the
    /// answer gate is closed (already answered, or nothing loaded).
    pub fn submit(&mut self, choice: &str) -> Option<QuizSubmission> {
        if !self.accepts_answer() {
            return None;
        }
        let question = self.question.as_ref()?;
        let is_correct = choice == question.correct_answer;
        let submission = QuizSubmission {
            artwork_id: question.full_artwork_data.id,
            question_field: question.question_field,
            correct_answer: question.correct_answer.clone(),
            user_answer: choice.to_string(),
            is_correct,
        };
        self.answered = true;
        self.selected = Some(choice.to_string());
        self.phase = QuizPhase::Answered(if is_correct { Outcome::Correct } else { Outcome::Incorrect });
        Some(submission)
    }

    /// Back to `Idle`; any in-flight load becomes stale
    pub fn reset(&mut self) {
        self.latest += 1;
        self.question = None;
        self.answered = false;
        self.selected = None;
        self.phase = QuizPhase::Idle;
    }

    pub fn choice_state(&self, choice: &str) -> ChoiceState {
        let Some(question) = self.question.as_ref() else {
            return ChoiceState::Disabled;
        };
        if !self.answered {
            return ChoiceState::Open;
        }
        if choice == question.correct_answer {
            ChoiceState::Correct
        } else if self.selected.as_deref() == Some(choice) {
            ChoiceState::Incorrect
        } else {
            ChoiceState::Disabled
        }
    }

    pub fn result_panel(&self) -> Option<ResultPanel> {
        let QuizPhase::Answered(outcome) = self.phase else {
            return None;
        };
        let question = self.question.as_ref()?;
        let (heading, correct_answer) = match outcome {
            Outcome::Correct => ("正解です！", None),
            Outcome::Incorrect => ("❌ 不正解", Some(question.correct_answer.clone())),
        };
        Some(ResultPanel {
            outcome,
            heading,
            correct_answer,
            notes: question.full_artwork_data.display_notes().map(str::to_string),
        })
    }
}

/// Text button label: `A. Monet`, `B. Manet`, ...
pub fn choice_label(index: usize, choice: &str) -> String {
    let letter = u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?');
    format!("{}. {}", letter, choice)
}
