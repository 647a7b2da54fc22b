//! Backend Routes
//!
//! URL builders for the API namespaces and the uploaded image assets.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{Genre, QuizMode};

/// Characters escaped in a file name used as a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Link target for "back to genre selection"
pub const GENRE_SELECT: &str = "/";

fn api_base(genre: Genre) -> String {
    format!("/api/{}", genre.as_str())
}

pub fn artworks(genre: Genre) -> String {
    format!("{}/artworks", api_base(genre))
}

pub fn artwork(genre: Genre, id: u32) -> String {
    format!("{}/artworks/{}", api_base(genre), id)
}

pub fn artwork_upload(genre: Genre) -> String {
    format!("{}/artworks/upload", api_base(genre))
}

/// Query parameters for the artwork list; an empty query asks for everything
pub fn search_params(query: &str) -> Vec<(&'static str, String)> {
    let query = query.trim();
    if query.is_empty() {
        Vec::new()
    } else {
        vec![("q", query.to_string())]
    }
}

pub fn quiz_question(genre: Genre, mode: QuizMode) -> String {
    let endpoint = match mode {
        QuizMode::Standard => "multiple-choice",
        QuizMode::Review => "review",
    };
    format!("{}/quiz/{}", api_base(genre), endpoint)
}

pub fn quiz_submit(genre: Genre) -> String {
    format!("{}/quiz/submit", api_base(genre))
}

pub fn quiz_stats(genre: Genre) -> String {
    format!("{}/quiz/stats", api_base(genre))
}

pub fn quiz_reset(genre: Genre) -> String {
    format!("{}/quiz/reset", api_base(genre))
}

/// Dashboard aggregate (served outside the `/api` namespace)
pub fn dashboard_stats(genre: Genre) -> String {
    format!("/quiz/stats/{}", genre.as_str())
}

fn thumbnail_dir(genre: Genre) -> &'static str {
    match genre {
        Genre::Japanese => "japanese_thumbnails",
        Genre::Western => "thumbnails",
    }
}

fn image_dir(genre: Genre) -> &'static str {
    match genre {
        Genre::Japanese => "japanese_images",
        Genre::Western => "images",
    }
}

pub fn thumbnail_url(genre: Genre, filename: &str) -> String {
    format!(
        "/uploads/{}/thumb_{}",
        thumbnail_dir(genre),
        utf8_percent_encode(filename, PATH_SEGMENT)
    )
}

pub fn image_url(genre: Genre, filename: &str) -> String {
    format!(
        "/uploads/{}/{}",
        image_dir(genre),
        utf8_percent_encode(filename, PATH_SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_are_genre_scoped() {
        assert_eq!(artworks(Genre::Western), "/api/western/artworks");
        assert_eq!(artwork(Genre::Japanese, 12), "/api/japanese/artworks/12");
        assert_eq!(artwork_upload(Genre::Japanese), "/api/japanese/artworks/upload");
        assert_eq!(quiz_submit(Genre::Western), "/api/western/quiz/submit");
        assert_eq!(quiz_reset(Genre::Western), "/api/western/quiz/reset");
        assert_eq!(quiz_stats(Genre::Japanese), "/api/japanese/quiz/stats");
        assert_eq!(dashboard_stats(Genre::Japanese), "/quiz/stats/japanese");
    }

    #[test]
    fn test_quiz_mode_selects_endpoint() {
        assert_eq!(quiz_question(Genre::Western, QuizMode::Standard), "/api/western/quiz/multiple-choice");
        assert_eq!(quiz_question(Genre::Western, QuizMode::Review), "/api/western/quiz/review");
    }

    #[test]
    fn test_search_params_only_for_non_empty_query() {
        assert!(search_params("").is_empty());
        assert!(search_params("   ").is_empty());
        assert_eq!(search_params(" monet "), vec![("q", "monet".to_string())]);
    }

    #[test]
    fn test_asset_urls() {
        assert_eq!(thumbnail_url(Genre::Western, "a.jpg"), "/uploads/thumbnails/thumb_a.jpg");
        assert_eq!(thumbnail_url(Genre::Japanese, "a.jpg"), "/uploads/japanese_thumbnails/thumb_a.jpg");
        assert_eq!(image_url(Genre::Japanese, "a.jpg"), "/uploads/japanese_images/a.jpg");
        assert_eq!(image_url(Genre::Western, "my pic#1.png"), "/uploads/images/my%20pic%231.png");
    }
}
