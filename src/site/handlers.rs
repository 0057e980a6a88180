use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Extension, Json,
};
use serde::Deserialize;

use crate::browse::{genres, PageContext};
use crate::server::AppState;
use crate::session::Session;
use crate::wishlist::Wishlist;
use super::types::*;

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub name: Option<String>,
    pub page: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveQuery {
    pub back: Option<String>,
}

pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let home = state.home.compose().await;
    Json(HomeResponse::from(&home))
}

pub async fn movie_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<GenreQuery>,
) -> Json<GenreListingResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let name = query
        .name
        .or_else(|| genres::movie_genre_name(id).map(|n| n.to_string()))
        .unwrap_or_default();

    let row = state
        .movies
        .genre_page(id, &name, page, PageContext::Full)
        .await;

    Json(GenreListingResponse {
        id: row.id,
        name: row.name,
        page,
        total_count: row.total_count,
        items: row.items.iter().map(MediaCardDto::from_card).collect(),
    })
}

pub async fn series_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<GenreQuery>,
) -> Json<GenreListingResponse> {
    let page = query.page.unwrap_or(1).max(1);
    let name = query
        .name
        .or_else(|| genres::series_genre_name(id).map(|n| n.to_string()))
        .unwrap_or_default();

    let row = state
        .series
        .genre_page(id, &name, page, PageContext::Full)
        .await;

    Json(GenreListingResponse {
        id: row.id,
        name: row.name,
        page,
        total_count: row.total_count,
        items: row.items.iter().map(MediaCardDto::from_card).collect(),
    })
}

pub async fn movie_detail(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Json<MovieDetailResponse> {
    let movie = state.movies.details(id).await;
    let wishlist = Wishlist::new(session, state.provider.clone());
    let in_wishlist = wishlist.contains(movie.id).await;
    Json(MovieDetailResponse::from_movie(&movie, in_wishlist))
}

pub async fn series_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Json<SeriesDetailResponse> {
    let series = state.series.details(id).await;
    Json(SeriesDetailResponse::from_series(&series))
}

pub async fn wishlist_index(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Json<WishlistResponse> {
    let wishlist = Wishlist::new(session, state.provider.clone());
    let items: Vec<MediaCardDto> = wishlist
        .items()
        .await
        .iter()
        .map(MediaCardDto::from_card)
        .collect();

    Json(WishlistResponse {
        count: items.len(),
        items,
    })
}

/// POST-only; sends the visitor back to the item page they came from.
pub async fn wishlist_add(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> Redirect {
    let wishlist = Wishlist::new(session, state.provider.clone());
    wishlist.add(id).await;
    Redirect::to(&format!("/movie/{}", id))
}

/// POST-only; `?back=wishlist` returns to the wishlist page instead of the
/// item page.
pub async fn wishlist_remove(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    Query(query): Query<RemoveQuery>,
) -> Redirect {
    let wishlist = Wishlist::new(session, state.provider.clone());
    wishlist.remove(id).await;

    if query.back.as_deref() == Some("wishlist") {
        Redirect::to("/wishlist")
    } else {
        Redirect::to(&format!("/movie/{}", id))
    }
}
