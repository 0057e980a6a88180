use serde::{Deserialize, Serialize};

pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const BACKDROP_BASE: &str = "https://image.tmdb.org/t/p/original";
pub const POSTER_FALLBACK: &str = "/img/poster-not-available.jpg";
pub const BACKDROP_FALLBACK: &str = "/img/no-backdrop-available.jpg";

/// One page of a TMDB list response (`/discover/movie`, `/discover/tv`).
/// `total_results` is the upstream total across all pages, not the number
/// of entries in `results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub total_pages: i32,
    #[serde(default)]
    pub total_results: i32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            page: 0,
            total_pages: 0,
            total_results: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    /// Present on discover results only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i32>>,
    /// Present on the detail endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<VideoList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_air_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Credits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<VideoList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub video_type: String,
    pub site: String,
}

/// Shared display surface of movies and series. URL and year fields are
/// computed from the raw paths on every call and never stored.
pub trait MediaCard {
    fn media_id(&self) -> i32;
    fn display_title(&self) -> &str;
    fn overview(&self) -> &str;
    fn date(&self) -> Option<&str>;
    fn poster_path(&self) -> Option<&str>;
    fn backdrop_path(&self) -> Option<&str>;

    fn release_year(&self) -> String {
        self.date()
            .and_then(|d| d.get(..4))
            .unwrap_or("")
            .to_string()
    }

    fn poster_url(&self) -> String {
        match self.poster_path() {
            Some(p) if !p.is_empty() => format!("{}{}", POSTER_BASE, p),
            _ => POSTER_FALLBACK.to_string(),
        }
    }

    fn backdrop_url(&self) -> String {
        match self.backdrop_path() {
            Some(p) if !p.is_empty() => format!("{}{}", BACKDROP_BASE, p),
            _ => BACKDROP_FALLBACK.to_string(),
        }
    }
}

impl MediaCard for Movie {
    fn media_id(&self) -> i32 {
        self.id
    }
    fn display_title(&self) -> &str {
        &self.title
    }
    fn overview(&self) -> &str {
        &self.overview
    }
    fn date(&self) -> Option<&str> {
        self.release_date.as_deref()
    }
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl MediaCard for Series {
    fn media_id(&self) -> i32 {
        self.id
    }
    fn display_title(&self) -> &str {
        &self.name
    }
    fn overview(&self) -> &str {
        &self.overview
    }
    fn date(&self) -> Option<&str> {
        self.first_air_date.as_deref()
    }
    fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref()
    }
    fn backdrop_path(&self) -> Option<&str> {
        self.backdrop_path.as_deref()
    }
}

impl Credits {
    /// Directors, in crew order.
    pub fn directors(&self) -> Vec<String> {
        self.crew
            .iter()
            .filter(|c| c.job == "Director")
            .map(|c| c.name.clone())
            .collect()
    }

    /// Top billed cast, sorted by billing order.
    pub fn top_cast(&self, limit: usize) -> Vec<&CastMember> {
        let mut cast: Vec<&CastMember> = self.cast.iter().collect();
        cast.sort_by_key(|c| c.order.unwrap_or(i32::MAX));
        cast.truncate(limit);
        cast
    }
}

impl VideoList {
    /// First YouTube trailer, if the upstream returned one.
    pub fn trailer(&self) -> Option<&Video> {
        self.results
            .iter()
            .find(|v| v.site == "YouTube" && v.video_type == "Trailer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_joins_path() {
        let movie = Movie {
            poster_path: Some("/abc.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.poster_url(), "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn test_poster_url_fallback() {
        let movie = Movie::default();
        assert_eq!(movie.poster_url(), POSTER_FALLBACK);

        let empty_path = Movie {
            poster_path: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty_path.poster_url(), POSTER_FALLBACK);
    }

    #[test]
    fn test_backdrop_url() {
        let series = Series {
            backdrop_path: Some("/bg.jpg".to_string()),
            ..Default::default()
        };
        assert_eq!(
            series.backdrop_url(),
            "https://image.tmdb.org/t/p/original/bg.jpg"
        );
        assert_eq!(Series::default().backdrop_url(), BACKDROP_FALLBACK);
    }

    #[test]
    fn test_release_year() {
        let movie = Movie {
            release_date: Some("2023-10-01".to_string()),
            ..Default::default()
        };
        assert_eq!(movie.release_year(), "2023");
        assert_eq!(Movie::default().release_year(), "");

        let blank = Movie {
            release_date: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(blank.release_year(), "");
    }

    #[test]
    fn test_page_deserializes_snake_case() {
        let json = r#"{
            "page": 1,
            "results": [{"id": 603, "title": "The Matrix", "release_date": "1999-03-30"}],
            "total_pages": 25,
            "total_results": 500
        }"#;
        let page: Page<Movie> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 603);
        assert_eq!(page.total_results, 500);
    }

    #[test]
    fn test_trailer_picks_youtube_trailer() {
        let videos = VideoList {
            results: vec![
                Video {
                    id: "1".into(),
                    key: "aaa".into(),
                    video_type: "Featurette".into(),
                    site: "YouTube".into(),
                },
                Video {
                    id: "2".into(),
                    key: "bbb".into(),
                    video_type: "Trailer".into(),
                    site: "YouTube".into(),
                },
            ],
        };
        assert_eq!(videos.trailer().map(|v| v.key.as_str()), Some("bbb"));
        assert!(VideoList::default().trailer().is_none());
    }

    #[test]
    fn test_directors() {
        let credits = Credits {
            cast: vec![],
            crew: vec![
                CrewMember {
                    name: "Lana Wachowski".into(),
                    job: "Director".into(),
                    department: "Directing".into(),
                },
                CrewMember {
                    name: "Joel Silver".into(),
                    job: "Producer".into(),
                    department: "Production".into(),
                },
            ],
        };
        assert_eq!(credits.directors(), vec!["Lana Wachowski".to_string()]);
    }
}
