//! Integration tests for the GoDaddy DNS client using wiremock
//!
//! These tests verify the exact API contract: method, path, authentication
//! header and replacement body, for both success and error responses.

use pve_acme_hook::challenge;
use pve_acme_hook::config::ApiCredentials;
use pve_acme_hook::dns::{DnsApi, DnsApiError, GoDaddyClient, TxtRecord};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> ApiCredentials {
    ApiCredentials {
        key: "test-key".to_string(),
        secret: "test-secret".to_string(),
    }
}

fn client(base_url: String) -> GoDaddyClient {
    GoDaddyClient::new(&credentials(), base_url).expect("valid client")
}

#[tokio::test]
async fn test_upsert_txt_record_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/TXT/_acme-challenge"))
        .and(header("authorization", "sso-key test-key:test-secret"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!([{"data": "abc123", "ttl": 600}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    let record = TxtRecord {
        name: "_acme-challenge".to_string(),
        data: "abc123".to_string(),
        ttl: 600,
    };

    api.upsert_txt_record("example.com", &record)
        .await
        .expect("should replace record");
}

#[tokio::test]
async fn test_upsert_txt_record_subdomain_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/TXT/_acme-challenge.sub"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    let record = TxtRecord {
        name: "_acme-challenge.sub".to_string(),
        data: "tok".to_string(),
        ttl: 600,
    };

    api.upsert_txt_record("example.com", &record)
        .await
        .expect("should replace record");
}

#[tokio::test]
async fn test_upsert_txt_record_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/TXT/_acme-challenge"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "UNABLE_TO_AUTHENTICATE",
            "message": "Unauthorized : Could not authenticate API key/secret"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    let record = TxtRecord {
        name: "_acme-challenge".to_string(),
        data: "abc123".to_string(),
        ttl: 600,
    };

    let err = api
        .upsert_txt_record("example.com", &record)
        .await
        .unwrap_err();

    assert!(matches!(err, DnsApiError::Api { status: 401, .. }));
    assert!(err.to_string().contains("UNABLE_TO_AUTHENTICATE"));
}

#[tokio::test]
async fn test_challenge_deploy_builds_record_from_domain() {
    let mock_server = MockServer::start().await;

    // The reconciler must derive zone example.com and name _acme-challenge,
    // publish ttl 600 and the token as data
    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/TXT/_acme-challenge"))
        .and(body_json(json!([{"data": "abc123", "ttl": 600}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    challenge::deploy(&api, "example.com", "abc123").await;
}

#[tokio::test]
async fn test_challenge_clean_publishes_placeholder_never_deletes() {
    let mock_server = MockServer::start().await;

    // Cleanup is a PUT with the placeholder value; no DELETE is ever issued
    Mock::given(method("PUT"))
        .and(path("/v1/domains/example.com/records/TXT/_acme-challenge"))
        .and(body_json(json!([{"data": "null", "ttl": 600}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    challenge::clean(&api, "example.com").await;
}

#[tokio::test]
async fn test_challenge_deploy_swallows_provider_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "INTERNAL_SERVER_ERROR",
            "message": "boom"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let api = client(mock_server.uri());
    // Returns normally; the failure is logged, not propagated
    challenge::deploy(&api, "example.com", "abc123").await;
}
