//! GoDaddy DNS API client
//!
//! Uses the GoDaddy domains API v1 to replace TXT records for ACME challenges.
//!
//! # API Endpoint Used
//!
//! - `PUT /v1/domains/{zone}/records/TXT/{name}` - Replace all TXT records at
//!   a name with the supplied set
//!
//! Authentication is a production API key/secret pair sent as
//! `Authorization: sso-key {key}:{secret}`.

use super::{DnsApi, DnsApiError, TxtRecord};
use crate::config::ApiCredentials;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Record type segment in the records URL
const RECORD_TYPE: &str = "TXT";

/// GoDaddy DNS API client
///
/// Replaces TXT records via the GoDaddy REST API for ACME DNS-01 challenges.
#[derive(Debug)]
pub struct GoDaddyClient {
    client: reqwest::Client,
    base_url: String,
    sso_key: String,
}

impl GoDaddyClient {
    /// Create a new client against a specific API base URL.
    ///
    /// The base URL normally comes from [`HookConfig`](crate::config::HookConfig)
    /// (production API unless overridden); tests point it at a mock server.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or if the
    /// credentials contain characters invalid in an HTTP header.
    pub fn new(credentials: &ApiCredentials, base_url: String) -> Result<Self, DnsApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DnsApiError::Config(format!("failed to build HTTP client: {}", e)))?;

        let sso_key = format!("sso-key {}:{}", credentials.key, credentials.secret);

        // Validate credentials can be used in headers (fail early)
        HeaderValue::from_str(&sso_key).map_err(|_| {
            DnsApiError::Config("API credentials contain invalid characters".to_string())
        })?;

        Ok(Self {
            client,
            base_url,
            sso_key,
        })
    }

    /// Build authorization headers for API requests
    ///
    /// Since the credentials are validated in the constructor, this never
    /// drops the header in practice.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.sso_key) {
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl DnsApi for GoDaddyClient {
    async fn upsert_txt_record(&self, zone: &str, record: &TxtRecord) -> Result<(), DnsApiError> {
        debug!(zone = %zone, name = %record.name, "Replacing GoDaddy TXT record");

        let url = format!(
            "{}/v1/domains/{}/records/{}/{}",
            self.base_url, zone, RECORD_TYPE, record.name
        );

        // The PUT body is the full replacement set for this name and type
        let body = [RecordData {
            data: &record.data,
            ttl: record.ttl,
        }];

        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<GoDaddyError>().await {
                Ok(err) if !err.code.is_empty() => format!("{}: {}", err.code, err.message),
                Ok(err) => err.message,
                Err(_) => "unparseable error response".to_string(),
            };
            return Err(DnsApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(zone = %zone, name = %record.name, "Replaced GoDaddy TXT record");
        Ok(())
    }
}

// ============================================================================
// GoDaddy API Types
// ============================================================================

/// Record payload inside the PUT replacement set
#[derive(Debug, Serialize)]
struct RecordData<'a> {
    data: &'a str,
    ttl: u32,
}

/// GoDaddy API error body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GoDaddyError {
    code: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> ApiCredentials {
        ApiCredentials {
            key: "test-key".to_string(),
            secret: "test-secret".to_string(),
        }
    }

    #[test]
    fn test_client_builds_with_valid_credentials() {
        let client = GoDaddyClient::new(&credentials(), "https://api.godaddy.com".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_credentials() {
        let creds = ApiCredentials {
            key: "key\nwith\nnewlines".to_string(),
            secret: "secret".to_string(),
        };
        let result = GoDaddyClient::new(&creds, "https://api.godaddy.com".to_string());
        assert!(matches!(result, Err(DnsApiError::Config(_))));
    }

    #[test]
    fn test_auth_headers_shape() {
        let client =
            GoDaddyClient::new(&credentials(), "https://api.godaddy.com".to_string()).unwrap();
        let headers = client.auth_headers();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "sso-key test-key:test-secret"
        );
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    // Integration tests with a mock server are in tests/godaddy_test.rs
}
