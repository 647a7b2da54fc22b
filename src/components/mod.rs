//! UI Components
//!
//! Reusable Leptos components.

mod artwork_info;
mod artwork_table;
mod confirm_button;
mod edit_modal;
mod error_screen;
mod message_modal;
mod quiz_area;
mod recent_results;
mod search_form;
mod stats_charts;
mod stats_panel;
mod thumbnail;
mod upload_form;

pub use artwork_info::ArtworkInfo;
pub use artwork_table::ArtworkTable;
pub use confirm_button::ConfirmButton;
pub use edit_modal::EditModal;
pub use error_screen::ErrorScreen;
pub use message_modal::MessageModal;
pub use quiz_area::{QuizArea, QuizController};
pub use recent_results::RecentResults;
pub use search_form::SearchForm;
pub use stats_charts::{AccuracyChart, AttemptsChart, DoughnutChart};
pub use stats_panel::StatsPanel;
pub use thumbnail::Thumbnail;
pub use upload_form::UploadForm;
