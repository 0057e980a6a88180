use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::TmdbConfig;
use super::types::{Movie, Page, Series};

#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("tmdb returned status {0}")]
    Status(reqwest::StatusCode),
}

/// The seam between the upstream client and everything that consumes it.
/// Implementations never fail: any upstream problem degrades to an empty
/// page or a placeholder item carrying the requested id.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn movies_by_genre(&self, genre_id: i32, page: i32) -> Page<Movie>;
    async fn series_by_genre(&self, genre_id: i32, page: i32) -> Page<Series>;
    async fn movie_details(&self, id: i32) -> Movie;
    async fn series_details(&self, id: i32) -> Series;
}

pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, TmdbError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "TMDB request");

        let resp = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(TmdbError::Status(resp.status()));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl MediaProvider for TmdbClient {
    async fn movies_by_genre(&self, genre_id: i32, page: i32) -> Page<Movie> {
        let query = [
            ("with_genres", genre_id.to_string()),
            ("page", page.to_string()),
        ];
        match self.get_json("/discover/movie", &query).await {
            Ok(result) => result,
            Err(e) => {
                warn!(genre_id, page, error = %e, "discover movies failed");
                Page::empty()
            }
        }
    }

    async fn series_by_genre(&self, genre_id: i32, page: i32) -> Page<Series> {
        let query = [
            ("with_genres", genre_id.to_string()),
            ("page", page.to_string()),
        ];
        match self.get_json("/discover/tv", &query).await {
            Ok(result) => result,
            Err(e) => {
                warn!(genre_id, page, error = %e, "discover series failed");
                Page::empty()
            }
        }
    }

    async fn movie_details(&self, id: i32) -> Movie {
        let query = [("append_to_response", "credits,videos".to_string())];
        match self.get_json(&format!("/movie/{}", id), &query).await {
            Ok(movie) => movie,
            Err(e) => {
                warn!(id, error = %e, "fetch movie details failed");
                Movie {
                    id,
                    ..Movie::default()
                }
            }
        }
    }

    async fn series_details(&self, id: i32) -> Series {
        let query = [("append_to_response", "credits,videos".to_string())];
        match self.get_json(&format!("/tv/{}", id), &query).await {
            Ok(series) => series,
            Err(e) => {
                warn!(id, error = %e, "fetch series details failed");
                Series {
                    id,
                    ..Series::default()
                }
            }
        }
    }
}
