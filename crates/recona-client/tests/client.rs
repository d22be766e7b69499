//! Dispatcher and transport behavior against a mocked backend.

use std::time::Duration;

use recona_client::{ReconaClient, ReconaError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReconaClient {
    ReconaClient::builder("test-token")
        .base_url(server.uri())
        .requests_per_sec(1_000.0)
        .burst_size(10)
        .build()
        .unwrap()
}

#[tokio::test]
async fn sends_the_three_contract_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/account"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "login": "analyst@example.com",
            "request_count": 12,
            "request_limit_per_day": 1000,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profile = client.account().details().await.unwrap();

    assert_eq!(profile.customer.id, 7);
    assert_eq!(profile.requests_remaining(), 988);
}

#[tokio::test]
async fn get_details_hits_the_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cve/CVE-2021-44228"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "CVE-2021-44228",
            "status": "Published",
            "has_poc": true,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cve = client.cves().details("CVE-2021-44228").await.unwrap();

    assert_eq!(cve.id, "CVE-2021-44228");
    assert!(cve.has_poc);
}

#[tokio::test]
async fn error_status_surfaces_the_response_body_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/domains/example.com"))
        .respond_with(ResponseTemplate::new(403).set_body_string("insufficient permissions"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.domains().details("example.com").await.unwrap_err();

    // The error names the operation, then the backend's own diagnostics.
    assert!(
        err.to_string()
            .starts_with("failed to get domain details for ID example.com:"),
        "unexpected message: {err}"
    );
    match err {
        ReconaError::Operation { ref source, .. } => match **source {
            ReconaError::Api { status, ref body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "insufficient permissions");
            }
            ref other => panic!("unexpected inner error: {other}"),
        },
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hosts/203.0.113.7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!doctype html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.hosts().details("203.0.113.7").await.unwrap_err();

    assert!(err
        .to_string()
        .contains("failed to get host details for ID 203.0.113.7"));
    assert!(matches!(
        err,
        ReconaError::Operation { ref source, .. }
            if matches!(**source, ReconaError::Decoding(_))
    ));
}

#[tokio::test]
async fn admission_wait_is_cut_off_at_the_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    // One token, ten seconds to the next: the second call cannot be
    // admitted within the 50ms budget.
    let client = ReconaClient::builder("test-token")
        .base_url(server.uri())
        .requests_per_sec(0.1)
        .burst_size(1)
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    client.account().details().await.unwrap();

    let err = client.account().details().await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(err.to_string().contains("failed to get account details"));

    // Throttling is distinguishable from backend failure: only the
    // admitted call reached the server.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn clones_share_one_rate_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = ReconaClient::builder("test-token")
        .base_url(server.uri())
        .requests_per_sec(0.1)
        .burst_size(1)
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let clone = client.clone();

    client.account().details().await.unwrap();

    // The clone draws from the same bucket, so it is throttled too.
    let err = clone.account().details().await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn cwe_lookup_posts_the_id_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cwe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "code": "CWE-79", "name": "Cross-site Scripting" }],
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .cves()
        .cwe(recona_core::CweParams {
            ids: vec!["CWE-79".to_string()],
        })
        .await
        .unwrap();

    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].code, "CWE-79");

    let body: serde_json::Value =
        serde_json::from_slice(&server.received_requests().await.unwrap()[0].body).unwrap();
    assert_eq!(body, json!({ "ids": ["CWE-79"] }));
}
