use serde::Serialize;
use tracing::warn;

use crate::tmdb::{Movie, Series};
use super::genres::{MOVIE_GENRES, SERIES_GENRES};
use super::{GenreRow, MovieBrowser, PageContext, SeriesBrowser};

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub movie_genres: Vec<GenreRow<Movie>>,
    pub series_genres: Vec<GenreRow<Series>>,
}

/// Assembles the homepage: one preview row per catalog genre, movies first,
/// series second. Fetches run concurrently but rows are joined in catalog
/// declaration order, which is the order the page renders them in.
#[derive(Clone)]
pub struct HomeComposer {
    movies: MovieBrowser,
    series: SeriesBrowser,
    skip_empty: bool,
}

impl HomeComposer {
    pub fn new(movies: MovieBrowser, series: SeriesBrowser, skip_empty: bool) -> Self {
        Self {
            movies,
            series,
            skip_empty,
        }
    }

    pub async fn compose(&self) -> HomePage {
        let movie_tasks: Vec<_> = MOVIE_GENRES
            .iter()
            .map(|genre| {
                let browser = self.movies.clone();
                let genre = *genre;
                tokio::spawn(async move {
                    browser
                        .genre_page(genre.id, genre.name, 1, PageContext::Preview)
                        .await
                })
            })
            .collect();

        let series_tasks: Vec<_> = SERIES_GENRES
            .iter()
            .map(|genre| {
                let browser = self.series.clone();
                let genre = *genre;
                tokio::spawn(async move {
                    browser
                        .genre_page(genre.id, genre.name, 1, PageContext::Preview)
                        .await
                })
            })
            .collect();

        let mut movie_genres = Vec::with_capacity(movie_tasks.len());
        for task in movie_tasks {
            match task.await {
                Ok(row) => {
                    if self.include(row.items.is_empty()) {
                        movie_genres.push(row);
                    }
                }
                Err(e) => warn!(error = %e, "homepage movie genre task failed"),
            }
        }

        let mut series_genres = Vec::with_capacity(series_tasks.len());
        for task in series_tasks {
            match task.await {
                Ok(row) => {
                    if self.include(row.items.is_empty()) {
                        series_genres.push(row);
                    }
                }
                Err(e) => warn!(error = %e, "homepage series genre task failed"),
            }
        }

        HomePage {
            movie_genres,
            series_genres,
        }
    }

    fn include(&self, row_is_empty: bool) -> bool {
        !(self.skip_empty && row_is_empty)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::config::BrowseConfig;
    use crate::tmdb::{MediaProvider, Page};
    use super::*;

    /// Returns items for every genre except the ones listed as empty.
    struct StubProvider {
        empty_movie_genres: Vec<i32>,
    }

    #[async_trait]
    impl MediaProvider for StubProvider {
        async fn movies_by_genre(&self, genre_id: i32, _page: i32) -> Page<Movie> {
            if self.empty_movie_genres.contains(&genre_id) {
                return Page::empty();
            }
            Page {
                results: vec![Movie {
                    id: genre_id,
                    title: format!("Movie in {}", genre_id),
                    ..Movie::default()
                }],
                page: 1,
                total_pages: 1,
                total_results: 1,
            }
        }

        async fn series_by_genre(&self, genre_id: i32, _page: i32) -> Page<Series> {
            Page {
                results: vec![Series {
                    id: genre_id,
                    name: format!("Series in {}", genre_id),
                    ..Series::default()
                }],
                page: 1,
                total_pages: 1,
                total_results: 1,
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

    fn composer(empty_movie_genres: Vec<i32>, skip_empty: bool) -> HomeComposer {
        let provider: Arc<dyn MediaProvider> = Arc::new(StubProvider { empty_movie_genres });
        HomeComposer::new(
            MovieBrowser::new(provider.clone(), BrowseConfig::default()),
            SeriesBrowser::new(provider, BrowseConfig::default()),
            skip_empty,
        )
    }

    #[tokio::test]
    async fn test_rows_follow_catalog_order() {
        let home = composer(vec![], true).compose().await;

        let names: Vec<&str> = home.movie_genres.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = MOVIE_GENRES.iter().map(|g| g.name).collect();
        assert_eq!(names, expected);

        let series_names: Vec<&str> = home.series_genres.iter().map(|r| r.name.as_str()).collect();
        let series_expected: Vec<&str> = SERIES_GENRES.iter().map(|g| g.name).collect();
        assert_eq!(series_names, series_expected);
    }

    #[tokio::test]
    async fn test_empty_genre_skipped_order_unchanged() {
        // Comedy (35) returns nothing upstream.
        let home = composer(vec![35], true).compose().await;

        assert_eq!(home.movie_genres.len(), MOVIE_GENRES.len() - 1);
        let names: Vec<&str> = home.movie_genres.iter().map(|r| r.name.as_str()).collect();
        let expected: Vec<&str> = MOVIE_GENRES
            .iter()
            .filter(|g| g.id != 35)
            .map(|g| g.name)
            .collect();
        assert_eq!(names, expected);

        // The series catalog is independent and unaffected.
        assert_eq!(home.series_genres.len(), SERIES_GENRES.len());
    }

    #[tokio::test]
    async fn test_skip_empty_disabled_keeps_rows() {
        let home = composer(vec![35], false).compose().await;
        assert_eq!(home.movie_genres.len(), MOVIE_GENRES.len());
        let comedy = home.movie_genres.iter().find(|r| r.id == 35).unwrap();
        assert!(comedy.items.is_empty());
        assert_eq!(comedy.total_count, 0);
    }
}
