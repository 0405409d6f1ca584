mod support;

use marquee::tmdb::{ImageUrls, TmdbClient, TmdbError};
use reqwest::StatusCode;
use support::{search_body, tracing_init};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::with_base_url(Some("test-token".to_string()), format!("{}/3", server.uri()))
}

#[tokio::test]
async fn test_search_sends_query_parameters_and_token() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "batman"))
        .and(query_param("include_adult", "false"))
        .and(query_param("language", "en-US"))
        .and(query_param("page", "2"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(2, 5)))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .search_movies("batman", 2)
        .await
        .expect("search should succeed");

    assert_eq!(response.page, 2);
    assert_eq!(response.total_pages, 5);
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].id, 268);
    assert_eq!(response.results[0].vote_average, 7.234);
}

#[tokio::test]
async fn test_null_fields_are_tolerated() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(1, 1)))
        .mount(&server)
        .await;

    let response = client_for(&server).search_movies("batman", 1).await.unwrap();
    let sparse = &response.results[1];
    assert_eq!(sparse.overview, "");
    assert_eq!(sparse.release_date, "");
    assert_eq!(sparse.backdrop_path, None);

    let images = ImageUrls::default();
    assert_eq!(
        images.backdrop(sparse.backdrop_path.as_deref()),
        "https://via.placeholder.com/1280x720?text=No+Image"
    );
    assert_eq!(
        images.backdrop(response.results[0].backdrop_path.as_deref()),
        "https://image.tmdb.org/t/p/original/frDS8A5vIP927KYAxTVVKRIbqZw.jpg"
    );
}

#[tokio::test]
async fn test_query_is_url_encoded() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "the dark knight & co"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .search_movies("the dark knight & co", 1)
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unauthorized_maps_to_error() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status_code": 7,
            "status_message": "Invalid API key: You must be granted a valid key.",
            "success": false
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).search_movies("batman", 1).await;
    assert!(matches!(result, Err(TmdbError::Unauthorized)));
}

#[tokio::test]
async fn test_rate_limit_maps_to_error() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = client_for(&server).search_movies("batman", 1).await;
    assert!(matches!(result, Err(TmdbError::RateLimit)));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).search_movies("batman", 1).await;
    match result {
        Err(TmdbError::Status(status)) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_serialization_error() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"results\": \"nope\"}"))
        .mount(&server)
        .await;

    let result = client_for(&server).search_movies("batman", 1).await;
    assert!(matches!(result, Err(TmdbError::Serialization(_))));
}

#[tokio::test]
async fn test_blank_query_sends_no_request() {
    tracing_init();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(1, 1)))
        .expect(0)
        .mount(&server)
        .await;

    let result = client_for(&server).search_movies("  ", 1).await;
    assert!(matches!(result, Err(TmdbError::InvalidInput(_))));
}
