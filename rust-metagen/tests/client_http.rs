use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_metagen::types::models::GenerateMetadataConfig;
use rust_metagen::{Client, MediaKind};

fn ok_body() -> serde_json::Value {
    json!({
        "candidates": [{"content": {"parts": [{"text": "Title: ok"}]}}]
    })
}

#[tokio::test]
async fn api_key_is_sent_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .build()
        .unwrap();
    let text = client
        .metadata()
        .request_text(b"x".to_vec(), MediaKind::Image)
        .await
        .unwrap();
    assert_eq!(text, "Title: ok");
}

#[tokio::test]
async fn api_key_is_trimmed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "padded-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("  padded-key\n")
        .base_url(server.uri())
        .build()
        .unwrap();
    client
        .metadata()
        .request_text(b"x".to_vec(), MediaKind::Image)
        .await
        .unwrap();
}

#[tokio::test]
async fn custom_headers_and_api_version_are_applied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/models/gemini-1.5-flash:generateContent"))
        .and(header("x-custom", "yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .api_version("v1")
        .header("x-custom", "yes")
        .build()
        .unwrap();
    client
        .metadata()
        .generate_from_bytes(b"x".to_vec(), MediaKind::Video, GenerateMetadataConfig::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn timeout_surfaces_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .timeout(1)
        .build()
        .unwrap();
    let err = client
        .metadata()
        .request_text(b"x".to_vec(), MediaKind::Image)
        .await
        .unwrap_err();
    assert!(matches!(err, rust_metagen::Error::Network { .. }));
}
