use std::time::Duration;

use stacktable_engine::{
    request_url, EngineConfig, EngineEvent, EngineHandle, FailureKind, FetchSettings, PageRequest,
    ReqwestSearchClient, SearchClient,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_BODY: &str = r#"{"items":[{"title":"t","view_count":5,"score":1,"link":"https://stackoverflow.com/q/5"}],"quota_max":300}"#;

fn page_request() -> PageRequest {
    PageRequest {
        sort: "activity".to_string(),
        order: "desc".to_string(),
        page_index: 0,
    }
}

fn mock_config(server: &MockServer) -> EngineConfig {
    EngineConfig::with_endpoint(format!("{}/2.2/questions", server.uri()))
}

#[tokio::test]
async fn client_returns_decoded_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.2/questions"))
        .and(query_param("site", "stackoverflow"))
        .and(query_param("sort", "activity"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_BODY, "application/json"))
        .mount(&server)
        .await;

    let url = request_url(&mock_config(&server), &page_request()).expect("url");
    let client = ReqwestSearchClient::new(FetchSettings::default());

    let page = client.fetch_page(&url).await.expect("fetch ok");
    assert_eq!(page.quota_max, 300);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].view_count, "5");
}

#[tokio::test]
async fn client_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let url = request_url(&mock_config(&server), &page_request()).expect("url");
    let client = ReqwestSearchClient::new(FetchSettings::default());

    let err = client.fetch_page(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(400));
}

#[tokio::test]
async fn client_fails_on_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>nope</html>", "text/html"))
        .mount(&server)
        .await;

    let url = request_url(&mock_config(&server), &page_request()).expect("url");
    let client = ReqwestSearchClient::new(FetchSettings::default());

    let err = client.fetch_page(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedPayload);
}

#[tokio::test]
async fn client_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(PAGE_BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let url = request_url(&mock_config(&server), &page_request()).expect("url");
    let client = ReqwestSearchClient::new(settings);

    let err = client.fetch_page(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn client_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let url = request_url(&mock_config(&server), &page_request()).expect("url");
    let client = ReqwestSearchClient::new(settings);

    let err = client.fetch_page(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn engine_reports_completion_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE_BODY, "application/json"))
        .mount(&server)
        .await;

    let (engine, events) = EngineHandle::new(mock_config(&server));
    engine.search(7, page_request());

    let event = tokio::task::spawn_blocking(move || events.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join")
        .expect("event");
    let EngineEvent::FetchCompleted { request_id, result } = event;
    assert_eq!(request_id, 7);
    assert_eq!(result.expect("page").quota_max, 300);
}

#[tokio::test]
async fn engine_reports_failures_as_events() {
    // Nothing listens on port 1; the connection is refused immediately.
    let config = EngineConfig::with_endpoint("http://127.0.0.1:1/2.2/questions");
    let (engine, events) = EngineHandle::new(config);
    engine.search(3, page_request());

    let event = tokio::task::spawn_blocking(move || events.recv_timeout(Duration::from_secs(5)))
        .await
        .expect("join")
        .expect("event");
    let EngineEvent::FetchCompleted { request_id, result } = event;
    assert_eq!(request_id, 3);
    assert_eq!(result.unwrap_err().kind, FailureKind::Network);
}
