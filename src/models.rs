//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Placeholder the backend puts into the field a question hides
pub const MASKED: &str = "???";

/// Top-level category partitioning artworks, quizzes and assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Western,
    Japanese,
}

impl Genre {
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Western => "western",
            Genre::Japanese => "japanese",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "western" => Some(Genre::Western),
            "japanese" => Some(Genre::Japanese),
            _ => None,
        }
    }
}

/// Which question pool the quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizMode {
    /// Whole collection
    Standard,
    /// Previously missed items
    Review,
}

/// Artwork record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u32,
    pub author: String,
    pub title: String,
    pub style: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
}

impl Artwork {
    /// Notes worth showing (blank notes count as none)
    pub fn display_notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Artwork as shown in a question; one field may be masked as `???`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkView {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub image_filename: Option<String>,
}

/// How the image slot of an artwork view is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Thumbnail(String),
    Masked,
    Missing,
}

impl ArtworkView {
    pub fn image_slot(&self) -> ImageSlot {
        match self.image_filename.as_deref() {
            Some(MASKED) => ImageSlot::Masked,
            Some(name) if !name.is_empty() => ImageSlot::Thumbnail(name.to_string()),
            _ => ImageSlot::Missing,
        }
    }
}

/// Attribute a question asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionField {
    Author,
    Title,
    Style,
    Image,
}

impl QuestionField {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionField::Author => "author",
            QuestionField::Title => "title",
            QuestionField::Style => "style",
            QuestionField::Image => "image",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuestionField::Author => "作者",
            QuestionField::Title => "作品名",
            QuestionField::Style => "様式",
            QuestionField::Image => "画像",
        }
    }
}

/// Japanese label for a field name as reported by the stats endpoints.
/// Unknown names are shown as-is.
pub fn field_label(field: &str) -> &str {
    match field {
        "author" => QuestionField::Author.label(),
        "title" => QuestionField::Title.label(),
        "style" => QuestionField::Style.label(),
        "image" => QuestionField::Image.label(),
        other => other,
    }
}

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub artwork: ArtworkView,
    pub question: String,
    pub question_field: QuestionField,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub full_artwork_data: Artwork,
}

/// Result report sent after an answer is committed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizSubmission {
    pub artwork_id: u32,
    pub question_field: QuestionField,
    pub correct_answer: String,
    pub user_answer: String,
    pub is_correct: bool,
}

/// PUT body for an artwork edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkUpdate {
    pub author: String,
    pub title: String,
    pub style: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkList {
    pub artworks: Vec<Artwork>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    #[serde(default)]
    pub image_uploaded: bool,
}

/// Error body returned with non-2xx statuses. `detail` is usually a string;
/// validation failures send a list of objects instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Per-field accuracy breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldStat {
    pub field: String,
    pub accuracy: f64,
    pub total: u32,
    pub correct: u32,
}

/// Aggregate shown in the quiz page's stats panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizStats {
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub overall_accuracy: f64,
    pub field_stats: Vec<FieldStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentResult {
    #[serde(alias = "field")]
    pub question_field: String,
    pub correct_answer: String,
    pub user_answer: String,
    pub is_correct: bool,
    #[serde(alias = "date", default)]
    pub created_at: Option<String>,
}

/// Aggregate shown on the stats dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub overall_accuracy: f64,
    pub field_stats: Vec<FieldStat>,
    #[serde(default)]
    pub recent_results: Vec<RecentResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_question_payload() {
        let json = r#"{
            "artwork": {"id": 7, "author": "???", "title": "睡蓮", "style": "印象派", "image_filename": "lilies.jpg", "notes": null},
            "full_artwork_data": {"id": 7, "author": "Monet", "title": "睡蓮", "style": "印象派", "image_filename": "lilies.jpg", "image_size": 1024, "notes": "オランジュリー美術館"},
            "question": "この作品の作者は？",
            "question_field": "author",
            "choices": ["Monet", "Manet", "Renoir", "Degas"],
            "correct_answer": "Monet"
        }"#;
        let question: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(question.question_field, QuestionField::Author);
        assert_eq!(question.artwork.author, MASKED);
        assert_eq!(question.full_artwork_data.id, 7);
        assert_eq!(question.full_artwork_data.display_notes(), Some("オランジュリー美術館"));
        assert_eq!(question.choices.len(), 4);
    }

    #[test]
    fn test_image_slot() {
        let mut view = ArtworkView {
            author: "Monet".into(),
            title: "睡蓮".into(),
            style: "印象派".into(),
            image_filename: Some("lilies.jpg".into()),
        };
        assert_eq!(view.image_slot(), ImageSlot::Thumbnail("lilies.jpg".into()));
        view.image_filename = Some(MASKED.into());
        assert_eq!(view.image_slot(), ImageSlot::Masked);
        view.image_filename = None;
        assert_eq!(view.image_slot(), ImageSlot::Missing);
        view.image_filename = Some(String::new());
        assert_eq!(view.image_slot(), ImageSlot::Missing);
    }

    #[test]
    fn test_recent_result_accepts_legacy_keys() {
        let json = r#"{"field": "title", "correct_answer": "星月夜", "user_answer": "ひまわり", "is_correct": false, "date": "2024-05-01 10:00:00"}"#;
        let result: RecentResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.question_field, "title");
        assert_eq!(result.created_at.as_deref(), Some("2024-05-01 10:00:00"));
    }

    #[test]
    fn test_submission_wire_shape() {
        let submission = QuizSubmission {
            artwork_id: 3,
            question_field: QuestionField::Image,
            correct_answer: "a.png".into(),
            user_answer: "b.png".into(),
            is_correct: false,
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["question_field"], "image");
        assert_eq!(value["artwork_id"], 3);
        assert_eq!(value["is_correct"], false);
    }

    #[test]
    fn test_genre_and_field_labels() {
        assert_eq!(Genre::parse("japanese"), Some(Genre::Japanese));
        assert_eq!(Genre::parse(" western "), Some(Genre::Western));
        assert_eq!(Genre::parse("baroque"), None);
        assert_eq!(field_label("style"), "様式");
        assert_eq!(field_label("era"), "era");
    }
}
