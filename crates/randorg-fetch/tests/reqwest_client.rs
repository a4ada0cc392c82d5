//! Wire-level tests for the reqwest-backed client against a mock server.

#![cfg(feature = "reqwest")]

use std::num::NonZeroUsize;
use std::time::Duration;

use randorg_fetch::{
    Error, FetchOptions, Fetcher, HttpClient, ReqwestClient, RequestSpec, TransportError,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(count: usize, columns: usize) -> RequestSpec {
    RequestSpec::new(0, 255, count, NonZeroUsize::new(columns).unwrap()).unwrap()
}

#[tokio::test]
async fn client_returns_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integers/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1\t2\n"))
        .mount(&mock_server)
        .await;

    let client = ReqwestClient::new().unwrap();
    let url = format!("{}/integers/?num=2", mock_server.uri());
    let response = client.get(&url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "1\t2\n");
}

#[tokio::test]
async fn fetcher_sends_service_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integers/"))
        .and(query_param("num", "4"))
        .and(query_param("min", "0"))
        .and(query_param("max", "255"))
        .and(query_param("col", "2"))
        .and(query_param("base", "10"))
        .and(query_param("format", "plain"))
        .and(query_param("rnd", "new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("10\t20\n30\t40\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(ReqwestClient::new().unwrap())
        .with_options(FetchOptions::default().endpoint(format!("{}/integers/", mock_server.uri())));

    let ints = fetcher.fetch(&request(4, 2)).await.unwrap();

    assert_eq!(ints, [10, 20, 30, 40]);
}

#[tokio::test]
async fn fetcher_issues_one_request_per_chunk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integers/"))
        .and(query_param("num", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("7\t8\n"))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/integers/"))
        .and(query_param("num", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("9\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(ReqwestClient::new().unwrap()).with_options(
        FetchOptions::default()
            .endpoint(format!("{}/integers/", mock_server.uri()))
            .chunk_limit(NonZeroUsize::new(2).unwrap()),
    );

    let ints = fetcher.fetch(&request(5, 2)).await.unwrap();

    assert_eq!(ints, [7, 8, 7, 8, 9]);
}

#[tokio::test]
async fn service_error_status_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503).set_body_string("Error: The server is overloaded"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(ReqwestClient::new().unwrap())
        .with_options(FetchOptions::default().endpoint(format!("{}/integers/", mock_server.uri())));

    let err = fetcher.fetch(&request(4, 2)).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Transport {
            chunk: 0,
            source: TransportError::Status(503),
        }
    ));
}

#[tokio::test]
async fn slow_service_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("1\n")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let fetcher = Fetcher::new(ReqwestClient::new().unwrap()).with_options(
        FetchOptions::default()
            .endpoint(format!("{}/integers/", mock_server.uri()))
            .timeout(Duration::from_millis(200)),
    );

    let err = fetcher.fetch(&request(1, 1)).await.unwrap_err();

    assert!(matches!(err, Error::Transport { chunk: 0, .. }));
}
