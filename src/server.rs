use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::browse::{HomeComposer, MovieBrowser, SeriesBrowser};
use crate::config::Config;
use crate::session::SessionStore;
use crate::tmdb::MediaProvider;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn MediaProvider>,
    pub sessions: Arc<SessionStore>,
    pub movies: MovieBrowser,
    pub series: SeriesBrowser,
    pub home: HomeComposer,
}

impl AppState {
    pub fn new(
        config: Config,
        provider: Arc<dyn MediaProvider>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        let movies = MovieBrowser::new(provider.clone(), config.browse.clone());
        let series = SeriesBrowser::new(provider.clone(), config.browse.clone());
        let home = HomeComposer::new(
            movies.clone(),
            series.clone(),
            config.browse.skip_empty_on_home,
        );

        Self {
            config: Arc::new(config),
            provider,
            sessions,
            movies,
            series,
            home,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/home", get(crate::site::home))
        .route("/api/movies/genre/:id", get(crate::site::movie_genre))
        .route("/api/series/genre/:id", get(crate::site::series_genre))
        .route("/api/movie/:id", get(crate::site::movie_detail))
        .route("/api/series/:id", get(crate::site::series_detail))
        .route("/api/wishlist", get(crate::site::wishlist_index))
        .route("/wishlist/add/:id", post(crate::site::wishlist_add))
        .route("/wishlist/remove/:id", post(crate::site::wishlist_remove));

    let mut router = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::session::session_middleware,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
