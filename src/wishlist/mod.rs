use std::sync::Arc;

use crate::session::Session;
use crate::tmdb::{MediaProvider, Movie};

const WISHLIST_KEY: &str = "wishlist";

/// The visitor's wishlist: a JSON-encoded list of movie ids in the session.
/// Constructed per request around an explicit session handle; every mutation
/// rewrites the whole list (read-modify-write, last write wins).
pub struct Wishlist {
    session: Session,
    provider: Arc<dyn MediaProvider>,
}

impl Wishlist {
    pub fn new(session: Session, provider: Arc<dyn MediaProvider>) -> Self {
        Self { session, provider }
    }

    pub async fn ids(&self) -> Vec<i32> {
        self.session.get(WISHLIST_KEY).await.unwrap_or_default()
    }

    pub async fn contains(&self, id: i32) -> bool {
        self.ids().await.contains(&id)
    }

    /// Add an id; already-present ids are left alone so the list stays
    /// duplicate-free.
    pub async fn add(&self, id: i32) {
        let mut ids = self.ids().await;
        if !ids.contains(&id) {
            ids.push(id);
            self.session.set(WISHLIST_KEY, &ids).await;
        }
    }

    /// Remove every occurrence of an id. Removing an id that was never
    /// added is a no-op.
    pub async fn remove(&self, id: i32) {
        let mut ids = self.ids().await;
        ids.retain(|&stored| stored != id);
        self.session.set(WISHLIST_KEY, &ids).await;
    }

    /// Hydrate the stored ids into full movies, in stored order. A failed
    /// detail fetch yields a placeholder carrying the id; the entry is kept.
    pub async fn items(&self) -> Vec<Movie> {
        let ids = self.ids().await;
        let mut movies = Vec::with_capacity(ids.len());
        for id in ids {
            movies.push(self.provider.movie_details(id).await);
        }
        movies
    }
}
