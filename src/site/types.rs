use serde::Serialize;

use crate::browse::{GenreRow, HomePage};
use crate::tmdb::{MediaCard, Movie, Series};

/// List-context card: what a genre row or wishlist entry needs to render.
/// URL and year fields are computed here at response time from the raw
/// paths; they are never persisted anywhere.
#[derive(Debug, Clone, Serialize)]
pub struct MediaCardDto {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub release_year: String,
    pub poster_url: String,
    pub backdrop_url: String,
}

impl MediaCardDto {
    pub fn from_card<T: MediaCard>(item: &T) -> Self {
        Self {
            id: item.media_id(),
            title: item.display_title().to_string(),
            overview: item.overview().to_string(),
            release_year: item.release_year(),
            poster_url: item.poster_url(),
            backdrop_url: item.backdrop_url(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreRowDto {
    pub id: i32,
    pub name: String,
    pub total_count: i32,
    pub items: Vec<MediaCardDto>,
}

impl GenreRowDto {
    pub fn from_row<T: MediaCard>(row: &GenreRow<T>) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            total_count: row.total_count,
            items: row.items.iter().map(MediaCardDto::from_card).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub movie_genres: Vec<GenreRowDto>,
    pub series_genres: Vec<GenreRowDto>,
}

impl From<&HomePage> for HomeResponse {
    fn from(home: &HomePage) -> Self {
        Self {
            movie_genres: home.movie_genres.iter().map(GenreRowDto::from_row).collect(),
            series_genres: home
                .series_genres
                .iter()
                .map(GenreRowDto::from_row)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreListingResponse {
    pub id: i32,
    pub name: String,
    pub page: i32,
    pub total_count: i32,
    pub items: Vec<MediaCardDto>,
}

#[derive(Debug, Serialize)]
pub struct CastDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub release_year: String,
    pub poster_url: String,
    pub backdrop_url: String,
    /// Genre names as the detail endpoint reports them, not catalog names.
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<CastDto>,
    /// YouTube key of the first trailer, when the upstream returned one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    pub in_wishlist: bool,
}

#[derive(Debug, Serialize)]
pub struct SeriesDetailResponse {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub release_year: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub cast: Vec<CastDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WishlistResponse {
    pub count: usize,
    pub items: Vec<MediaCardDto>,
}

const CAST_LIMIT: usize = 12;

impl MovieDetailResponse {
    pub fn from_movie(movie: &Movie, in_wishlist: bool) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            release_year: movie.release_year(),
            poster_url: movie.poster_url(),
            backdrop_url: movie.backdrop_url(),
            genres: genre_names(movie.genres.as_deref()),
            directors: movie
                .credits
                .as_ref()
                .map(|c| c.directors())
                .unwrap_or_default(),
            cast: cast_dtos(movie.credits.as_ref()),
            trailer: movie
                .videos
                .as_ref()
                .and_then(|v| v.trailer())
                .map(|t| t.key.clone()),
            in_wishlist,
        }
    }
}

impl SeriesDetailResponse {
    pub fn from_series(series: &Series) -> Self {
        Self {
            id: series.id,
            title: series.name.clone(),
            overview: series.overview.clone(),
            release_year: series.release_year(),
            poster_url: series.poster_url(),
            backdrop_url: series.backdrop_url(),
            genres: genre_names(series.genres.as_deref()),
            directors: series
                .credits
                .as_ref()
                .map(|c| c.directors())
                .unwrap_or_default(),
            cast: cast_dtos(series.credits.as_ref()),
            trailer: series
                .videos
                .as_ref()
                .and_then(|v| v.trailer())
                .map(|t| t.key.clone()),
        }
    }
}

fn genre_names(genres: Option<&[crate::tmdb::Genre]>) -> Vec<String> {
    genres
        .map(|g| g.iter().map(|genre| genre.name.clone()).collect())
        .unwrap_or_default()
}

fn cast_dtos(credits: Option<&crate::tmdb::Credits>) -> Vec<CastDto> {
    credits
        .map(|c| {
            c.top_cast(CAST_LIMIT)
                .into_iter()
                .map(|member| CastDto {
                    name: member.name.clone(),
                    character: member.character.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::tmdb::{
        CastMember, Credits, CrewMember, Genre, Video, VideoList, POSTER_FALLBACK,
    };
    use super::*;

    #[test]
    fn test_card_from_movie() {
        let movie = Movie {
            id: 603,
            title: "The Matrix".into(),
            overview: "A hacker learns the truth.".into(),
            release_date: Some("1999-03-30".into()),
            poster_path: Some("/matrix.jpg".into()),
            ..Movie::default()
        };
        let card = MediaCardDto::from_card(&movie);
        assert_eq!(card.id, 603);
        assert_eq!(card.release_year, "1999");
        assert_eq!(card.poster_url, "https://image.tmdb.org/t/p/w500/matrix.jpg");
    }

    #[test]
    fn test_card_fallbacks() {
        let card = MediaCardDto::from_card(&Series::default());
        assert_eq!(card.release_year, "");
        assert_eq!(card.poster_url, POSTER_FALLBACK);
    }

    #[test]
    fn test_movie_detail_shaping() {
        let movie = Movie {
            id: 603,
            title: "The Matrix".into(),
            genres: Some(vec![Genre {
                id: 28,
                name: "Action".into(),
            }]),
            credits: Some(Credits {
                cast: vec![
                    CastMember {
                        name: "Carrie-Anne Moss".into(),
                        character: Some("Trinity".into()),
                        order: Some(1),
                        profile_path: None,
                    },
                    CastMember {
                        name: "Keanu Reeves".into(),
                        character: Some("Neo".into()),
                        order: Some(0),
                        profile_path: None,
                    },
                ],
                crew: vec![CrewMember {
                    name: "Lana Wachowski".into(),
                    job: "Director".into(),
                    department: "Directing".into(),
                }],
            }),
            videos: Some(VideoList {
                results: vec![Video {
                    id: "v1".into(),
                    key: "trailer-key".into(),
                    video_type: "Trailer".into(),
                    site: "YouTube".into(),
                }],
            }),
            ..Movie::default()
        };

        let detail = MovieDetailResponse::from_movie(&movie, true);
        assert!(detail.in_wishlist);
        assert_eq!(detail.genres, vec!["Action".to_string()]);
        assert_eq!(detail.directors, vec!["Lana Wachowski".to_string()]);
        // Cast follows billing order, not input order.
        assert_eq!(detail.cast[0].name, "Keanu Reeves");
        assert_eq!(detail.trailer.as_deref(), Some("trailer-key"));
    }
}
