//! Catalog Listing
//!
//! What the artwork list shows for a given search, and the editable form
//! values behind upload and edit.

use crate::error::{ApiError, ApiResult};
use crate::models::{Artwork, ArtworkUpdate};

pub const UPLOAD_FAILED: &str = "保存に失敗しました";
pub const UPDATE_FAILED: &str = "更新に失敗しました";
pub const DELETE_FAILED: &str = "削除に失敗しました";
pub const LIST_FAILED: &str = "データの取得に失敗しました";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// A search was active and nothing matched
    NoMatches,
    /// The unfiltered collection is empty
    NoneRegistered,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoMatches => "該当する作品がありません。",
            EmptyReason::NoneRegistered => "登録されている作品はありません。",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogListing {
    #[default]
    NotLoaded,
    Loading,
    Empty(EmptyReason),
    Table(Vec<Artwork>),
    Failed(String),
}

pub fn normalize_query(query: &str) -> &str {
    query.trim()
}

/// Listing for a successful fetch; a non-empty result replaces the whole table
pub fn listing_for(query: &str, artworks: Vec<Artwork>) -> CatalogListing {
    if !artworks.is_empty() {
        return CatalogListing::Table(artworks);
    }
    if normalize_query(query).is_empty() {
        CatalogListing::Empty(EmptyReason::NoneRegistered)
    } else {
        CatalogListing::Empty(EmptyReason::NoMatches)
    }
}

/// New value for the artwork-count indicator; searches leave it untouched
pub fn count_update(query: &str, len: usize) -> Option<usize> {
    normalize_query(query).is_empty().then_some(len)
}

/// Token for one list fetch; only the newest may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingTicket(u64);

/// Issues list-fetch tickets so a slow search cannot overwrite a newer reload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingRequests {
    latest: u64,
}

impl ListingRequests {
    pub fn begin(&mut self) -> ListingTicket {
        self.latest += 1;
        ListingTicket(self.latest)
    }

    pub fn is_current(&self, ticket: ListingTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Listing and count indicator after a fetch resolves
#[derive(Debug, Clone, PartialEq)]
pub struct ListingUpdate {
    pub listing: CatalogListing,
    pub count: Option<usize>,
}

pub fn apply_fetch(query: &str, result: ApiResult<Vec<Artwork>>) -> ListingUpdate {
    match result {
        Ok(artworks) => ListingUpdate {
            count: count_update(query, artworks.len()),
            listing: listing_for(query, artworks),
        },
        Err(err) => ListingUpdate {
            listing: CatalogListing::Failed(list_failure(&err)),
            count: None,
        },
    }
}

fn list_failure(err: &ApiError) -> String {
    let reason = match err {
        ApiError::Transport(message) | ApiError::Decode(message) => message.clone(),
        ApiError::Application { status, detail } => {
            detail.clone().unwrap_or_else(|| format!("HTTP {}", status))
        }
    };
    format!("{}: {}", LIST_FAILED, reason)
}

/// Text fields shared by the upload and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtworkFields {
    pub author: String,
    pub title: String,
    pub style: String,
    pub notes: String,
}

impl ArtworkFields {
    /// Empty-string check only; length and content rules belong to the backend
    pub fn validate(&self) -> Result<ArtworkUpdate, String> {
        let missing: Vec<&str> = [
            ("作者", &self.author),
            ("作品名", &self.title),
            ("様式", &self.style),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect();

        if !missing.is_empty() {
            return Err(format!("{}を入力してください", missing.join("・")));
        }

        let notes = self.notes.trim();
        Ok(ArtworkUpdate {
            author: self.author.trim().to_string(),
            title: self.title.trim().to_string(),
            style: self.style.trim().to_string(),
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

/// Text entries written back into the upload form, so upload and edit send
/// the same trimmed values. Blank notes go out as an empty string.
pub fn upload_entries(update: &ArtworkUpdate) -> [(&'static str, String); 4] {
    [
        ("author", update.author.clone()),
        ("title", update.title.clone()),
        ("style", update.style.clone()),
        ("notes", update.notes.clone().unwrap_or_default()),
    ]
}

/// Open edit surface for one artwork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: u32,
    pub fields: ArtworkFields,
}

impl EditDraft {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id,
            fields: ArtworkFields {
                author: artwork.author.clone(),
                title: artwork.title.clone(),
                style: artwork.style.clone(),
                notes: artwork.notes.clone().unwrap_or_default(),
            },
        }
    }

    /// Full-record replacement body for the PUT call
    pub fn to_update(&self) -> Result<ArtworkUpdate, String> {
        self.fields.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_artwork(id: u32, author: &str) -> Artwork {
        Artwork {
            id,
            author: author.to_string(),
            title: format!("Title {}", id),
            style: "印象派".to_string(),
            notes: None,
            image_filename: None,
        }
    }

    #[test]
    fn test_upload_entries_are_trimmed() {
        let fields = ArtworkFields {
            author: " Monet ".into(),
            title: "睡蓮\n".into(),
            style: "\t印象派".into(),
            notes: "   ".into(),
        };
        let update = fields.validate().unwrap();
        assert_eq!(
            upload_entries(&update),
            [
                ("author", "Monet".to_string()),
                ("title", "睡蓮".to_string()),
                ("style", "印象派".to_string()),
                ("notes", String::new()),
            ]
        );
    }

    #[test]
    fn test_newer_listing_request_supersedes_older() {
        let mut requests = ListingRequests::default();
        let search = requests.begin();
        let reload = requests.begin();
        assert!(!requests.is_current(search));
        assert!(requests.is_current(reload));
    }

    #[test]
    fn test_empty_states_are_distinct() {
        assert_eq!(listing_for("xyz123", Vec::new()), CatalogListing::Empty(EmptyReason::NoMatches));
        assert_eq!(listing_for("", Vec::new()), CatalogListing::Empty(EmptyReason::NoneRegistered));
        assert_ne!(EmptyReason::NoMatches.message(), EmptyReason::NoneRegistered.message());
    }

    #[test]
    fn test_non_empty_result_replaces_table() {
        let artworks = vec![make_artwork(2, "Monet"), make_artwork(1, "Degas")];
        match listing_for("", artworks.clone()) {
            CatalogListing::Table(rows) => assert_eq!(rows, artworks),
            other => panic!("unexpected listing: {:?}", other),
        }
    }

    #[test]
    fn test_count_updates_only_for_unfiltered_query() {
        assert_eq!(count_update("", 5), Some(5));
        assert_eq!(count_update("  ", 0), Some(0));
        assert_eq!(count_update("monet", 1), None);
    }

    #[test]
    fn test_apply_fetch_for_search_keeps_count() {
        let update = apply_fetch("monet", Ok(vec![make_artwork(1, "Monet")]));
        assert_eq!(update.count, None);
        assert!(matches!(update.listing, CatalogListing::Table(ref rows) if rows.len() == 1));

        let update = apply_fetch("", Ok(Vec::new()));
        assert_eq!(update.count, Some(0));
        assert_eq!(update.listing, CatalogListing::Empty(EmptyReason::NoneRegistered));
    }

    #[test]
    fn test_apply_fetch_failure() {
        let update = apply_fetch("", Err(ApiError::Transport("Failed to fetch".into())));
        assert_eq!(update.count, None);
        assert_eq!(update.listing, CatalogListing::Failed("データの取得に失敗しました: Failed to fetch".into()));

        let update = apply_fetch("", Err(ApiError::Application { status: 500, detail: None }));
        assert_eq!(update.listing, CatalogListing::Failed("データの取得に失敗しました: HTTP 500".into()));
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let fields = ArtworkFields {
            author: "  ".into(),
            title: String::new(),
            style: "バロック".into(),
            notes: String::new(),
        };
        assert_eq!(fields.validate().unwrap_err(), "作者・作品名を入力してください");
    }

    #[test]
    fn test_edit_draft_carries_artwork_fields() {
        let mut artwork = make_artwork(9, "Vermeer");
        artwork.notes = Some("マウリッツハイス美術館".into());
        let draft = EditDraft::from_artwork(&artwork);
        assert_eq!(draft.id, 9);

        let update = draft.to_update().unwrap();
        assert_eq!(update.author, "Vermeer");
        assert_eq!(update.notes.as_deref(), Some("マウリッツハイス美術館"));
    }

    #[test]
    fn test_blank_notes_become_null() {
        let mut draft = EditDraft::from_artwork(&make_artwork(1, "Monet"));
        draft.fields.notes = "   ".into();
        assert_eq!(draft.to_update().unwrap().notes, None);
    }
}
