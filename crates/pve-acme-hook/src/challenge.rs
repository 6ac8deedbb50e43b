//! ACME DNS-01 challenge record reconciliation
//!
//! Publishes the validation token at `_acme-challenge.<domain>` on deploy and
//! overwrites it with a neutral placeholder on cleanup. Cleanup never deletes
//! the record; see the note in [`crate::dns`].
//!
//! A failed provider update is logged and swallowed: the renewal client has no
//! way to consume a failure signal short of a non-zero exit, and aborting here
//! would leave the cleanup path worse off than continuing.

use crate::dns::{DnsApi, TxtRecord};
use crate::domain::split_zone;
use tracing::{info, warn};

/// Reserved label prepended to the domain under challenge; this is the name
/// ACME validators query
pub const CHALLENGE_PREFIX: &str = "_acme-challenge";

/// TTL for challenge TXT records in seconds
pub const CHALLENGE_TTL: u32 = 600;

/// Neutral value the challenge record is reconciled to on cleanup
pub const CLEANUP_PLACEHOLDER: &str = "null";

/// Publish the validation token for a domain under challenge.
pub async fn deploy(api: &dyn DnsApi, domain: &str, token: &str) {
    update_challenge_record(api, domain, token).await;
}

/// Neutralize the challenge record for a domain after validation.
pub async fn clean(api: &dyn DnsApi, domain: &str) {
    update_challenge_record(api, domain, CLEANUP_PLACEHOLDER).await;
}

/// Reconcile the challenge TXT record for `domain` to `value`.
async fn update_challenge_record(api: &dyn DnsApi, domain: &str, value: &str) {
    let challenge_host = format!("{}.{}", CHALLENGE_PREFIX, domain);
    info!(host = %challenge_host, value = %value, "Updating TXT record");

    let (zone, record_name) = split_zone(&challenge_host);
    let record = TxtRecord {
        name: record_name,
        data: value.to_string(),
        ttl: CHALLENGE_TTL,
    };

    if let Err(e) = api.upsert_txt_record(&zone, &record).await {
        warn!(domain = %domain, error = %e, "Error updating TXT record for domain");
    }
}
