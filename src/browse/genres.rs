/// The curated genre catalogs. These are what the site chooses to surface,
/// independent of TMDB's own genre list; the ids are TMDB genre ids and the
/// names are the display names used on the page. Catalog order is page order.
#[derive(Debug, Clone, Copy)]
pub struct GenreEntry {
    pub id: i32,
    pub name: &'static str,
}

pub const MOVIE_GENRES: &[GenreEntry] = &[
    GenreEntry { id: 28, name: "Action" },
    GenreEntry { id: 35, name: "Comedy" },
    GenreEntry { id: 80, name: "Crime" },
    GenreEntry { id: 99, name: "Documentary" },
    GenreEntry { id: 18, name: "Drama" },
    GenreEntry { id: 27, name: "Horror" },
    GenreEntry { id: 10749, name: "Romance" },
    GenreEntry { id: 53, name: "Thriller" },
    GenreEntry { id: 10752, name: "War" },
];

pub const SERIES_GENRES: &[GenreEntry] = &[
    GenreEntry { id: 35, name: "Comedy" },
    GenreEntry { id: 80, name: "Crime" },
    GenreEntry { id: 99, name: "Documentary" },
    GenreEntry { id: 18, name: "Drama" },
    GenreEntry { id: 10749, name: "Romance" },
];

pub fn movie_genre_name(id: i32) -> Option<&'static str> {
    MOVIE_GENRES.iter().find(|g| g.id == id).map(|g| g.name)
}

pub fn series_genre_name(id: i32) -> Option<&'static str> {
    SERIES_GENRES.iter().find(|g| g.id == id).map(|g| g.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_name_lookup() {
        assert_eq!(movie_genre_name(28), Some("Action"));
        assert_eq!(movie_genre_name(12345), None);
        assert_eq!(series_genre_name(18), Some("Drama"));
        // Horror is movie-only.
        assert_eq!(series_genre_name(27), None);
    }
}
