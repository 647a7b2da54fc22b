//! Page Configuration
//!
//! The host page declares which genre and which screen to mount through data
//! attributes on `<body>`: `data-genre`, `data-page`, `data-log-level`.

use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use crate::models::{Genre, QuizMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Quiz,
    Review,
    Artworks,
    Stats,
}

impl PageKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "quiz" => Some(PageKind::Quiz),
            "review" => Some(PageKind::Review),
            "artworks" => Some(PageKind::Artworks),
            "stats" => Some(PageKind::Stats),
            _ => None,
        }
    }

    /// Quiz mode for the quiz screens
    pub fn quiz_mode(self) -> Option<QuizMode> {
        match self {
            PageKind::Quiz => Some(QuizMode::Standard),
            PageKind::Review => Some(QuizMode::Review),
            PageKind::Artworks | PageKind::Stats => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("ジャンルが指定されていません。")]
    MissingGenre,
    #[error("不明なジャンルです: {0}")]
    UnknownGenre(String),
    #[error("ページ種別が指定されていません。")]
    MissingPage,
    #[error("不明なページ種別です: {0}")]
    UnknownPage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub genre: Genre,
    pub page: PageKind,
    pub log_level: LevelFilter,
}

impl PageConfig {
    pub fn from_attrs(
        genre: Option<&str>,
        page: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let genre = match genre.map(str::trim).filter(|g| !g.is_empty()) {
            None => return Err(ConfigError::MissingGenre),
            Some(raw) => Genre::parse(raw).ok_or_else(|| ConfigError::UnknownGenre(raw.to_string()))?,
        };
        let page = match page.map(str::trim).filter(|p| !p.is_empty()) {
            None => return Err(ConfigError::MissingPage),
            Some(raw) => PageKind::parse(raw).ok_or_else(|| ConfigError::UnknownPage(raw.to_string()))?,
        };
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info);

        Ok(Self { genre, page, log_level })
    }

    /// Read the attributes from the live document's `<body>`
    pub fn from_document() -> Result<Self, ConfigError> {
        let dataset = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.dataset());

        let read = |key: &str| dataset.as_ref().and_then(|ds| ds.get(key));
        let genre = read("genre");
        let page = read("page");
        let log_level = read("logLevel");

        Self::from_attrs(genre.as_deref(), page.as_deref(), log_level.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_complete_attributes() {
        let config = PageConfig::from_attrs(Some("japanese"), Some("review"), Some("debug")).unwrap();
        assert_eq!(config.genre, Genre::Japanese);
        assert_eq!(config.page, PageKind::Review);
        assert_eq!(config.page.quiz_mode(), Some(QuizMode::Review));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_log_level_defaults_to_info() {
        let config = PageConfig::from_attrs(Some("western"), Some("artworks"), Some("chatty")).unwrap();
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.page.quiz_mode(), None);
    }

    #[test]
    fn test_missing_genre() {
        assert_eq!(PageConfig::from_attrs(None, Some("quiz"), None), Err(ConfigError::MissingGenre));
        assert_eq!(PageConfig::from_attrs(Some("  "), Some("quiz"), None), Err(ConfigError::MissingGenre));
    }

    #[test]
    fn test_unknown_values() {
        assert_eq!(
            PageConfig::from_attrs(Some("baroque"), Some("quiz"), None),
            Err(ConfigError::UnknownGenre("baroque".into()))
        );
        assert_eq!(
            PageConfig::from_attrs(Some("western"), Some("admin"), None),
            Err(ConfigError::UnknownPage("admin".into()))
        );
        assert_eq!(PageConfig::from_attrs(Some("western"), None, None), Err(ConfigError::MissingPage));
    }
}
