use std::sync::Arc;

use crate::config::BrowseConfig;
use crate::tmdb::{MediaProvider, Movie};
use super::{GenreRow, PageContext};

/// Shapes upstream movie data into page-ready rows.
#[derive(Clone)]
pub struct MovieBrowser {
    provider: Arc<dyn MediaProvider>,
    limits: BrowseConfig,
}

impl MovieBrowser {
    pub fn new(provider: Arc<dyn MediaProvider>, limits: BrowseConfig) -> Self {
        Self { provider, limits }
    }

    /// Fetch one page of movies for a genre and truncate to the context
    /// limit. The row keeps the upstream total, not the truncated count.
    /// Upstream failures and unknown genres come back as an empty row.
    pub async fn genre_page(
        &self,
        genre_id: i32,
        name: &str,
        page: i32,
        context: PageContext,
    ) -> GenreRow<Movie> {
        let response = self.provider.movies_by_genre(genre_id, page.max(1)).await;

        let limit = match context {
            PageContext::Preview => self.limits.preview_limit,
            PageContext::Full => self.limits.movie_page_limit,
        };

        let mut items = response.results;
        items.truncate(limit);

        GenreRow {
            id: genre_id,
            name: name.to_string(),
            items,
            total_count: response.total_results,
        }
    }

    pub async fn details(&self, id: i32) -> Movie {
        self.provider.movie_details(id).await
    }
}
