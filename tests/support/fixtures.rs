use marquee::tmdb::{Movie, MoviesResponse};
use serde_json::{json, Value};

pub fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("{title} overview"),
        release_date: "2008-07-16".to_string(),
        vote_average: 8.5,
        backdrop_path: Some(format!("/backdrop-{id}.jpg")),
        poster_path: Some(format!("/poster-{id}.jpg")),
    }
}

/// One page of `per_page` movies with ids unique across pages
pub fn movies_page(page: u32, total_pages: u32, per_page: u64) -> MoviesResponse {
    let first = u64::from(page - 1) * per_page + 1;
    MoviesResponse {
        results: (first..first + per_page)
            .map(|id| movie(id, &format!("Movie {id}")))
            .collect(),
        total_results: total_pages * per_page as u32,
        page,
        total_pages,
    }
}

pub fn empty_page() -> MoviesResponse {
    MoviesResponse {
        results: Vec::new(),
        total_results: 0,
        page: 1,
        total_pages: 0,
    }
}

/// TMDB `/search/movie` body as the API sends it
pub fn search_body(page: u32, total_pages: u32) -> Value {
    json!({
        "page": page,
        "total_pages": total_pages,
        "total_results": total_pages * 2,
        "results": [
            {
                "id": 268,
                "title": "Batman",
                "overview": "The Dark Knight of Gotham City begins his war on crime.",
                "release_date": "1989-06-21",
                "vote_average": 7.234,
                "backdrop_path": "/frDS8A5vIP927KYAxTVVKRIbqZw.jpg",
                "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                "adult": false,
                "genre_ids": [14, 28],
                "original_language": "en",
                "popularity": 33.1
            },
            {
                "id": 2661,
                "title": "Batman",
                "overview": null,
                "release_date": null,
                "vote_average": 6.4,
                "backdrop_path": null,
                "poster_path": null
            }
        ]
    })
}
