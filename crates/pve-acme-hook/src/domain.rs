//! Hostname decomposition for the DNS provider API
//!
//! The GoDaddy record API addresses records as a name inside a zone, while the
//! renewal client hands us fully-qualified hostnames. This module splits a
//! hostname into the two pieces the API wants.
//!
//! The zone is taken to be the last two dot-separated labels of the hostname.
//! This is deliberately naive: it has no public-suffix-list awareness, so
//! multi-label suffixes (e.g. `example.co.uk`) are split incorrectly. All
//! domains this hook manages live under two-label zones, so the simplification
//! holds.

/// Split a hostname into `(zone, record_name)`.
///
/// The zone is the last two labels joined with a dot; the record name is the
/// hostname with the trailing `.{zone}` suffix stripped. For hostnames with
/// at least three labels, `record_name + "." + zone` reconstructs the input
/// exactly.
///
/// Hostnames with fewer than three labels yield an empty record name. No
/// validation of label characters or count is performed.
///
/// # Examples
///
/// ```
/// use pve_acme_hook::domain::split_zone;
///
/// let (zone, name) = split_zone("_acme-challenge.sub.example.com");
/// assert_eq!(zone, "example.com");
/// assert_eq!(name, "_acme-challenge.sub");
/// ```
pub fn split_zone(hostname: &str) -> (String, String) {
    let labels: Vec<&str> = hostname.split('.').collect();
    let zone = labels[labels.len().saturating_sub(2)..].join(".");

    let record_name = if hostname.len() > zone.len() {
        hostname[..hostname.len() - zone.len() - 1].to_string()
    } else {
        String::new()
    };

    (zone, record_name)
}
