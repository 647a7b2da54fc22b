//! Backend Call Errors
//!
//! Every backend call resolves to `ApiResult<T>`; the variants keep transport
//! failures, application failures and malformed payloads apart.

use thiserror::Error;

use crate::models::ErrorBody;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Application,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx status, with the backend's `detail` when it sent one
    #[error("request failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Application { status: u16, detail: Option<String> },

    /// 2xx status but the body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Application { .. } => ErrorKind::Application,
            ApiError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Backend detail if present, otherwise the operation's fallback copy
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiError::Application { detail: Some(detail), .. } if !detail.is_empty() => detail,
            _ => fallback,
        }
    }

    /// Copy for the message modal, e.g. `エラー: file too large`
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Transport(message) => format!("ネットワークエラー: {}", message),
            _ => format!("エラー: {}", self.detail_or(fallback)),
        }
    }

    /// Copy rendered in place of the content that failed to load
    pub fn inline_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Transport(message) => format!("ネットワークエラー: {}", message),
            _ => self.detail_or(fallback).to_string(),
        }
    }
}

/// Classify a non-2xx response from its status and raw body. Only a string
/// `detail` is surfaced; anything else falls back to the caller's copy.
pub fn classify_failure(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
        .and_then(|detail| detail.as_str().map(str::to_string))
        .filter(|detail| !detail.trim().is_empty());
    ApiError::Application { status, detail }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_message_uses_backend_detail() {
        let err = ApiError::Application { status: 413, detail: Some("file too large".into()) };
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(err.alert_message("保存に失敗しました"), "エラー: file too large");
    }

    #[test]
    fn test_classify_missing_artwork() {
        let err = classify_failure(404, r#"{"detail":"作品が見つかりません"}"#);
        assert_eq!(err.kind(), ErrorKind::Application);
        assert_eq!(
            err,
            ApiError::Application { status: 404, detail: Some("作品が見つかりません".into()) }
        );
        assert_eq!(err.alert_message("削除に失敗しました"), "エラー: 作品が見つかりません");
    }

    #[test]
    fn test_classify_upload_rejection() {
        let err = classify_failure(413, r#"{"detail":"file too large"}"#);
        assert_eq!(err.alert_message("保存に失敗しました"), "エラー: file too large");
    }

    #[test]
    fn test_classify_non_json_body() {
        let err = classify_failure(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Application { status: 502, detail: None });
        assert_eq!(err.alert_message("更新に失敗しました"), "エラー: 更新に失敗しました");
        assert_eq!(classify_failure(500, ""), ApiError::Application { status: 500, detail: None });
    }

    #[test]
    fn test_classify_list_detail() {
        let body = r#"{"detail":[{"loc":["body","author"],"msg":"field required","type":"value_error.missing"}]}"#;
        let err = classify_failure(422, body);
        assert_eq!(err, ApiError::Application { status: 422, detail: None });
        assert_eq!(err.alert_message("保存に失敗しました"), "エラー: 保存に失敗しました");
    }

    #[test]
    fn test_alert_message_falls_back_without_detail() {
        let err = ApiError::Application { status: 500, detail: None };
        assert_eq!(err.alert_message("削除に失敗しました"), "エラー: 削除に失敗しました");

        let empty = ApiError::Application { status: 500, detail: Some(String::new()) };
        assert_eq!(empty.alert_message("更新に失敗しました"), "エラー: 更新に失敗しました");

        let decode = ApiError::Decode("missing field `artworks`".into());
        assert_eq!(decode.kind(), ErrorKind::Decode);
        assert_eq!(decode.alert_message("保存に失敗しました"), "エラー: 保存に失敗しました");
    }

    #[test]
    fn test_transport_messages() {
        let err = ApiError::Transport("Failed to fetch".into());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.alert_message("unused"), "ネットワークエラー: Failed to fetch");
        assert_eq!(err.inline_message("unused"), "ネットワークエラー: Failed to fetch");
    }

    #[test]
    fn test_inline_message_has_no_prefix() {
        let err = ApiError::Application {
            status: 404,
            detail: Some("4択クイズには最低4件のデータが必要です".into()),
        };
        assert_eq!(err.inline_message("クイズの取得に失敗しました。"), "4択クイズには最低4件のデータが必要です");
        let bare = ApiError::Application { status: 404, detail: None };
        assert_eq!(bare.inline_message("クイズの取得に失敗しました。"), "クイズの取得に失敗しました。");
    }
}
