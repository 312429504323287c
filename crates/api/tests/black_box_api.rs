use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{Value, json};

use stockroom_store::{DocumentStore, InMemoryDocumentStore};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        stockroom_observability::init();

        // Same router as prod, in-memory store, bound to an ephemeral port.
        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let app = stockroom_api::app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_bin(client: &reqwest::Client, base_url: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/bins"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn read_bin(client: &reqwest::Client, base_url: &str, id: &str) -> reqwest::Response {
    client
        .get(format!("{base_url}/api/bin/{id}"))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn listing_pages_are_disjoint() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for serial in 1..=5 {
        let res = create_bin(
            &client,
            &srv.base_url,
            json!({"id": format!("BIN{serial:06}"), "slot": serial}),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let page_ids = |query: &'static str| {
        let client = client.clone();
        let base_url = srv.base_url.clone();
        async move {
            let res = client
                .get(format!("{base_url}/api/bins?{query}"))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            let body: Value = res.json().await.unwrap();
            body.as_array()
                .unwrap()
                .iter()
                .map(|doc| {
                    // List elements are document-shaped: exactly id + props.
                    let keys: Vec<&str> =
                        doc.as_object().unwrap().keys().map(String::as_str).collect();
                    let mut sorted = keys.clone();
                    sorted.sort_unstable();
                    assert_eq!(sorted, ["id", "props"]);
                    doc["id"].as_str().unwrap().to_owned()
                })
                .collect::<Vec<String>>()
        }
    };

    let first = page_ids("limit=2&startingFrom=0").await;
    let second = page_ids("limit=2&startingFrom=2").await;

    assert_eq!(first, ["BIN000001", "BIN000002"]);
    assert_eq!(second, ["BIN000003", "BIN000004"]);
    assert!(first.iter().all(|id| !second.contains(id)));
}

#[tokio::test]
async fn default_pagination_lists_everything_up_to_twenty() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for serial in 1..=3 {
        create_bin(&client, &srv.base_url, json!({"id": format!("BIN{serial:06}")})).await;
    }

    let res = client
        .get(format!("{}/api/bins", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_pagination_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for query in ["limit=abc", "startingFrom=abc", "limit=-1"] {
        let res = client
            .get(format!("{}/api/bins?{query}", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "query: {query}");
        assert!(res.text().await.unwrap().starts_with("Malformed Request."));
    }
}

#[tokio::test]
async fn create_is_strict_create_only() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create_bin(&client, &srv.base_url, json!({"id": "BIN000009", "color": "red"})).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(
        first.headers()[reqwest::header::LOCATION],
        "/api/bin/BIN000009"
    );
    assert!(first.text().await.unwrap().is_empty());

    let res = read_bin(&client, &srv.base_url, "BIN000009").await;
    assert_eq!(res.status(), StatusCode::OK);
    let before: Value = res.json().await.unwrap();
    assert_eq!(before, json!({"id": "BIN000009", "color": "red"}));

    // Same id again: conflict, same Location, and no change to the stored
    // document.
    let second =
        create_bin(&client, &srv.base_url, json!({"id": "BIN000009", "color": "blue"})).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(
        second.headers()[reqwest::header::LOCATION],
        "/api/bin/BIN000009"
    );

    let after: Value = read_bin(&client, &srv.base_url, "BIN000009")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn create_rejects_a_body_without_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = create_bin(&client, &srv.base_url, json!({"color": "red"})).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_bins_are_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = read_bin(&client, &srv.base_url, "DOES_NOT_EXIST").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "The bin does not exist");
}

#[tokio::test]
async fn single_bin_responses_are_flattened() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create_bin(
        &client,
        &srv.base_url,
        json!({"id": "BIN000042", "zone": "A", "shelf": {"level": 2}}),
    )
    .await;

    let body: Value = read_bin(&client, &srv.base_url, "BIN000042")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(
        body,
        json!({"id": "BIN000042", "zone": "A", "shelf": {"level": 2}})
    );
}
