//! DNS record API abstraction
//!
//! The hook only needs one capability from its DNS provider: create-or-replace
//! a TXT record at a name inside a zone. The trait keeps the reconciler
//! decoupled from the GoDaddy client so tests can substitute a recording
//! double.
//!
//! There is deliberately no delete operation. Deleting records against the
//! GoDaddy API can remove unrelated records sharing the challenge name, so
//! cleanup overwrites the record with a placeholder instead
//! (<https://github.com/eXamadeus/godaddypy/issues/13>).

mod godaddy;

pub use godaddy::GoDaddyClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during DNS API operations
#[derive(Debug, Error)]
pub enum DnsApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// DNS API returned an error
    #[error("DNS API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// A TXT record as the provider consumes it
///
/// `name` addresses the record inside its zone (e.g. `_acme-challenge.sub`
/// inside `example.com`); the record type is fixed to TXT by the API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    /// Record name inside the zone
    pub name: String,
    /// Record value
    pub data: String,
    /// Time-to-live in seconds
    pub ttl: u32,
}

/// Trait for DNS APIs that can reconcile TXT records
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Create or replace the TXT record at `{record.name}.{zone}`.
    ///
    /// Replaces every TXT record at that name, which gives the reconciler its
    /// overwrite-not-append semantics.
    async fn upsert_txt_record(&self, zone: &str, record: &TxtRecord) -> Result<(), DnsApiError>;
}
