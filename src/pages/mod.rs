//! Pages
//!
//! One top-level view per `data-page` value.

mod artworks;
mod quiz;
mod stats;

pub use artworks::ArtworksPage;
pub use quiz::QuizPage;
pub use stats::StatsPage;
