//! Exhaustive pagination behavior against a mocked backend.

use recona_client::{ReconaClient, ReconaError};
use recona_core::{Search, SearchRequest};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Backend serving a fixed number of domain records, windowed by the
/// limit/offset in the request body.
struct DomainBackend {
    total: usize,
}

impl Respond for DomainBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let req: SearchRequest = serde_json::from_slice(&request.body).unwrap();
        let offset = req.pagination.offset as usize;
        let limit = req.pagination.limit as usize;

        let count = self.total.saturating_sub(offset).min(limit);
        let domains: Vec<_> = (offset..offset + count)
            .map(|i| json!({ "name": format!("d{i}.example.com") }))
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({
            "total_items": { "value": self.total, "relation": "eq" },
            "limit": limit,
            "offset": offset,
            "domains": domains,
        }))
    }
}

/// Backend that fails with a server error once the request offset
/// reaches `fail_at`.
struct FailingBackend {
    fail_at: usize,
}

impl Respond for FailingBackend {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let req: SearchRequest = serde_json::from_slice(&request.body).unwrap();
        let offset = req.pagination.offset as usize;
        let limit = req.pagination.limit as usize;

        if offset >= self.fail_at {
            return ResponseTemplate::new(500).set_body_string("index shard unavailable");
        }

        let domains: Vec<_> = (offset..offset + limit)
            .map(|i| json!({ "name": format!("d{i}.example.com") }))
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({
            "total_items": { "value": 100_000, "relation": "gte" },
            "domains": domains,
        }))
    }
}

fn fast_client(server: &MockServer) -> ReconaClient {
    ReconaClient::builder("test-token")
        .base_url(server.uri())
        .requests_per_sec(10_000.0)
        .burst_size(200)
        .build()
        .unwrap()
}

async fn requested_offsets(server: &MockServer) -> Vec<usize> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| {
            let req: SearchRequest = serde_json::from_slice(&r.body).unwrap();
            req.pagination.offset as usize
        })
        .collect()
}

#[tokio::test]
async fn collects_full_pages_until_empty_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(DomainBackend { total: 300 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let domains = client
        .domains()
        .search_all(Search::query("name.ends_with: example.com"))
        .await
        .unwrap();

    assert_eq!(domains.len(), 300);
    assert_eq!(domains[0].name.as_deref(), Some("d0.example.com"));
    assert_eq!(domains[299].name.as_deref(), Some("d299.example.com"));

    // Three full pages plus the empty page that ends the walk.
    assert_eq!(requested_offsets(&server).await, [0, 100, 200, 300]);
}

#[tokio::test]
async fn short_page_ends_the_walk_without_another_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(DomainBackend { total: 150 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let domains = client.domains().search_all(Search::default()).await.unwrap();

    assert_eq!(domains.len(), 150);
    assert_eq!(requested_offsets(&server).await, [0, 100]);
}

#[tokio::test]
async fn stops_at_the_hard_cap_against_an_unbounded_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(DomainBackend { total: 1_000_000 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let domains = client.domains().search_all(Search::default()).await.unwrap();

    assert_eq!(domains.len(), 10_000);

    let offsets = requested_offsets(&server).await;
    assert_eq!(offsets.len(), 100);
    assert!(offsets.iter().all(|&o| o < 10_000));
    assert_eq!(*offsets.last().unwrap(), 9_900);
}

#[tokio::test]
async fn empty_result_set_returns_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(DomainBackend { total: 0 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let domains = client.domains().search_all(Search::default()).await.unwrap();

    assert!(domains.is_empty());
    assert_eq!(requested_offsets(&server).await, [0]);
}

#[tokio::test]
async fn failed_page_discards_earlier_pages_and_reports_offset() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(FailingBackend { fail_at: 100 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let err = client.domains().search_all(Search::default()).await.unwrap_err();

    assert!(
        err.to_string()
            .starts_with("failed to search domain records:"),
        "unexpected message: {err}"
    );
    let inner = match err {
        ReconaError::Operation { source, .. } => *source,
        other => panic!("unexpected error: {other}"),
    };
    match inner {
        ReconaError::Search { offset, source } => {
            assert_eq!(offset, 100);
            match *source {
                ReconaError::Api { status, ref body } => {
                    assert_eq!(status, 500);
                    assert_eq!(body, "index shard unavailable");
                }
                other => panic!("unexpected inner error: {other}"),
            }
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn repeated_search_yields_an_identical_ordered_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/domains/search"))
        .respond_with(DomainBackend { total: 250 })
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let query = Search::query("name.ends_with: example.com");

    let first = client.domains().search_all(query.clone()).await.unwrap();
    let second = client.domains().search_all(query).await.unwrap();

    let names =
        |ds: &[recona_core::Domain]| ds.iter().map(|d| d.name.clone()).collect::<Vec<_>>();
    assert_eq!(names(&first), names(&second));
}

#[tokio::test]
async fn single_page_search_passes_pagination_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hosts/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_items": { "value": 1, "relation": "eq" },
            "limit": 25,
            "offset": 50,
            "hosts": [{ "ip": "203.0.113.7", "ports": [{ "port": 443 }] }],
        })))
        .mount(&server)
        .await;

    let client = fast_client(&server);
    let response = client
        .hosts()
        .search(SearchRequest {
            search: Search::query("ports.port: 443"),
            pagination: recona_core::Pagination {
                limit: 25,
                offset: 50,
            },
        })
        .await
        .unwrap();

    assert_eq!(response.page.total_items.value, 1);
    assert_eq!(response.hosts[0].open_ports(), [443]);

    let body: SearchRequest =
        serde_json::from_slice(&server.received_requests().await.unwrap()[0].body).unwrap();
    assert_eq!(body.pagination.limit, 25);
    assert_eq!(body.pagination.offset, 50);
}
