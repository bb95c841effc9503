//! Integration tests against a mock account API server.

use std::time::Duration;

use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zonepull_client::ApiClient;
use zonepull_core::{Credentials, ExportError, ProviderApi, RecordType};

fn creds() -> Credentials {
    Credentials::new("acme", "hunter2")
}

#[tokio::test]
async fn test_list_domains_sends_credentials_and_parses_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .and(body_json(json!({"user": "acme", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "example.com",
                "id": 7,
                "ttl": "3600",
                "ns": "ns1.dns-host.example",
                "mbox": "hostmaster.example.com",
                "serial": 2_024_010_101_u32,
                "refresh": 10800,
                "retry": "3600",
                "expire": 604_800,
                "expires": "2025-12-31 00:00:00"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let domains = assert_ok!(client.list_domains(&creds()).await);
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].name, "example.com");
    assert_eq!(domains[0].id, "7");
    assert_eq!(domains[0].ttl, 3600);
    assert_eq!(domains[0].serial, 2_024_010_101);
}

#[tokio::test]
async fn test_list_records_sends_domain_id_and_parses_aux() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listRRsByDomain"))
        .and(body_json(json!({
            "user": "acme",
            "password": "hunter2",
            "domainid": "7"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "fullname": "example.com",
                "type": "A",
                "ttl": 3600,
                "data": "192.0.2.1",
                "aux": ""
            },
            {
                "fullname": "example.com",
                "type": "MX",
                "ttl": "3600",
                "data": "mail.example.com",
                "aux": "10"
            },
            {
                "fullname": "www.example.com",
                "type": "REDIRECT",
                "ttl": 3600,
                "data": "https://new.example.org/landing"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let records = assert_ok!(client.list_records(&creds(), "7").await);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].record_type, RecordType::A);
    assert_eq!(records[0].aux, None);
    assert_eq!(records[1].record_type, RecordType::Mx);
    assert_eq!(records[1].aux, Some(10));
    assert_eq!(records[2].record_type, RecordType::Redirect);
}

#[tokio::test]
async fn test_rejected_credentials_map_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "bad credentials"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_domains(&creds()).await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_forbidden_also_maps_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listRRsByDomain"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_records(&creds(), "7").await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_api_error_carries_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "backend unavailable"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    match client.list_domains(&creds()).await.unwrap_err() {
        ExportError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "backend unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_bodyless_error_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    match client.list_domains(&creds()).await.unwrap_err() {
        ExportError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<soap:Envelope/>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.list_domains(&creds()).await.unwrap_err();
    assert!(matches!(err, ExportError::Json(_)));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri()));
    let domains = assert_ok!(client.list_domains(&creds()).await);
    assert!(domains.is_empty());
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/listDomains"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = ApiClient::builder(server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let err = client.list_domains(&creds()).await.unwrap_err();
    assert!(matches!(err, ExportError::Http(_)));
}
