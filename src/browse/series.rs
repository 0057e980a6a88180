use std::sync::Arc;

use crate::config::BrowseConfig;
use crate::tmdb::{MediaProvider, Series};
use super::{GenreRow, PageContext};

/// Shapes upstream series data into page-ready rows. Same contract as
/// `MovieBrowser`, with its own full-page limit.
#[derive(Clone)]
pub struct SeriesBrowser {
    provider: Arc<dyn MediaProvider>,
    limits: BrowseConfig,
}

impl SeriesBrowser {
    pub fn new(provider: Arc<dyn MediaProvider>, limits: BrowseConfig) -> Self {
        Self { provider, limits }
    }

    pub async fn genre_page(
        &self,
        genre_id: i32,
        name: &str,
        page: i32,
        context: PageContext,
    ) -> GenreRow<Series> {
        let response = self.provider.series_by_genre(genre_id, page.max(1)).await;

        let limit = match context {
            PageContext::Preview => self.limits.preview_limit,
            PageContext::Full => self.limits.series_page_limit,
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

    pub async fn details(&self, id: i32) -> Series {
        self.provider.series_details(id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::tmdb::{Movie, Page};
    use super::*;

    struct StubProvider;

    #[async_trait]
    impl MediaProvider for StubProvider {
        async fn movies_by_genre(&self, _genre_id: i32, _page: i32) -> Page<Movie> {
            Page::empty()
        }

        async fn series_by_genre(&self, _genre_id: i32, _page: i32) -> Page<Series> {
            Page {
                results: (0..30)
                    .map(|i| Series {
                        id: i,
                        name: format!("Series {}", i),
                        ..Series::default()
                    })
                    .collect(),
                page: 1,
                total_pages: 10,
                total_results: 200,
            }
        }

        async fn movie_details(&self, id: i32) -> Movie {
            Movie {
                id,
                ..Movie::default()
            }
        }

        async fn series_details(&self, id: i32) -> Series {
            Series {
                id,
                ..Series::default()
            }
        }
    }

    #[tokio::test]
    async fn test_series_limits() {
        let limits = BrowseConfig {
            series_page_limit: 18,
            ..BrowseConfig::default()
        };
        let browser = SeriesBrowser::new(Arc::new(StubProvider), limits);

        let preview = browser.genre_page(18, "Drama", 1, PageContext::Preview).await;
        assert_eq!(preview.items.len(), 6);

        // The full-page limit follows configuration, not a hard-coded value.
        let full = browser.genre_page(18, "Drama", 1, PageContext::Full).await;
        assert_eq!(full.items.len(), 18);
        assert_eq!(full.total_count, 200);
    }
}
