pub mod genres;
pub mod home;
pub mod movies;
pub mod series;

use serde::Serialize;

pub use genres::{GenreEntry, MOVIE_GENRES, SERIES_GENRES};
pub use home::{HomeComposer, HomePage};
pub use movies::MovieBrowser;
pub use series::SeriesBrowser;

/// Which truncation limit applies: the 6-item homepage preview or the
/// configurable full genre-page limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    Preview,
    Full,
}

/// One genre's worth of page data. `items` is truncated to the context
/// limit; `total_count` is the upstream total across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct GenreRow<T> {
    pub id: i32,
    pub name: String,
    pub items: Vec<T>,
    pub total_count: i32,
}
