//! Stats Dashboard Formatting
//!
//! Copy and row formatting for the statistics views.

use chrono::{DateTime, NaiveDateTime};

use crate::error::ApiError;
use crate::models::{field_label, RecentResult};

pub const NO_HISTORY: &str = "まだ回答履歴がありません。";
pub const STATS_FAILED: &str = "統計の読み込みに失敗しました。";
pub const RESET_FAILED: &str = "リセットに失敗しました。";

/// Reason line on the dashboard's error screen
pub fn failure_reason(err: &ApiError) -> String {
    match err {
        ApiError::Application { status, .. } => {
            format!("サーバーエラーが発生しました (ステータス: {})", status)
        }
        ApiError::Decode(_) => "サーバーから無効な統計データが返されました。".to_string(),
        ApiError::Transport(message) => message.clone(),
    }
}

/// Copy for a failed reset from the quiz page's stats panel
pub fn reset_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(message) => format!("ネットワークエラー: {}", message),
        _ => format!("リセット失敗: {}", err.detail_or("不明なエラー")),
    }
}

/// Timestamps arrive as SQLite `YYYY-MM-DD HH:MM:SS` or RFC 3339
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%Y/%m/%d %H:%M:%S").to_string();
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y/%m/%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRow {
    pub field: String,
    pub correct_answer: String,
    pub user_answer: String,
    pub verdict: &'static str,
    pub verdict_class: &'static str,
    pub answered_at: String,
}

pub fn recent_row(result: &RecentResult) -> RecentRow {
    let (verdict, verdict_class) = if result.is_correct {
        ("正解", "correct")
    } else {
        ("不正解", "incorrect")
    };
    RecentRow {
        field: field_label(&result.question_field).to_string(),
        correct_answer: result.correct_answer.clone(),
        user_answer: result.user_answer.clone(),
        verdict,
        verdict_class,
        answered_at: result.created_at.as_deref().map(format_timestamp).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_per_kind() {
        let app = ApiError::Application { status: 500, detail: Some("boom".into()) };
        assert_eq!(failure_reason(&app), "サーバーエラーが発生しました (ステータス: 500)");
        let decode = ApiError::Decode("missing field `field_stats`".into());
        assert_eq!(failure_reason(&decode), "サーバーから無効な統計データが返されました。");
        let transport = ApiError::Transport("Failed to fetch".into());
        assert_eq!(failure_reason(&transport), "Failed to fetch");
    }

    #[test]
    fn test_reset_failure_message() {
        let app = ApiError::Application { status: 500, detail: Some("リセットに失敗しました".into()) };
        assert_eq!(reset_failure_message(&app), "リセット失敗: リセットに失敗しました");
        let bare = ApiError::Application { status: 500, detail: None };
        assert_eq!(reset_failure_message(&bare), "リセット失敗: 不明なエラー");
        let transport = ApiError::Transport("offline".into());
        assert_eq!(reset_failure_message(&transport), "ネットワークエラー: offline");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-05-01 09:30:00"), "2024/05/01 09:30:00");
        assert_eq!(format_timestamp("2024-05-01T09:30:00+09:00"), "2024/05/01 09:30:00");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_recent_row() {
        let result = RecentResult {
            question_field: "author".into(),
            correct_answer: "Monet".into(),
            user_answer: "Manet".into(),
            is_correct: false,
            created_at: Some("2024-05-01 09:30:00".into()),
        };
        let row = recent_row(&result);
        assert_eq!(row.field, "作者");
        assert_eq!(row.verdict, "不正解");
        assert_eq!(row.verdict_class, "incorrect");
        assert_eq!(row.answered_at, "2024/05/01 09:30:00");
    }
}
