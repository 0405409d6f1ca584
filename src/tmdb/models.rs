use serde::{Deserialize, Deserializer, Serialize};

/// Represents a TMDB movie search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String, // As sent by TMDB (e.g., "2008-07-16"), may be empty
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// One page of `search/movie` results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviesResponse {
    pub results: Vec<Movie>,
    pub total_results: u32,
    pub page: u32,
    pub total_pages: u32,
}

impl MoviesResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_nullable_fields() {
        let json = r#"{
            "id": 268,
            "title": "Batman",
            "overview": null,
            "release_date": null,
            "vote_average": 7.2,
            "backdrop_path": null
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 268);
        assert_eq!(movie.overview, "");
        assert_eq!(movie.release_date, "");
        assert_eq!(movie.backdrop_path, None);
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn test_response_ignores_unknown_fields() {
        let json = r#"{
            "page": 1,
            "results": [{
                "adult": false,
                "id": 414906,
                "title": "The Batman",
                "original_title": "The Batman",
                "overview": "In his second year of fighting crime...",
                "release_date": "2022-03-01",
                "vote_average": 7.7,
                "backdrop_path": "/b0PlSFdDwbyK0cf5RxwDpaOJQvQ.jpg",
                "poster_path": "/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                "genre_ids": [80, 9648]
            }],
            "total_pages": 5,
            "total_results": 97
        }"#;

        let response: MoviesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_pages, 5);
        assert_eq!(response.total_results, 97);
        assert!(!response.is_empty());
        assert_eq!(
            response.results[0].backdrop_path.as_deref(),
            Some("/b0PlSFdDwbyK0cf5RxwDpaOJQvQ.jpg")
        );
    }
}
