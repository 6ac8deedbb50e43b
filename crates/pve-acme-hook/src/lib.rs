//! ACME DNS-01 hook for Proxmox VE clusters backed by GoDaddy DNS
//!
//! dehydrated invokes this binary at four renewal lifecycle points:
//!
//! - `deploy_challenge` - publish the validation token in a TXT record at
//!   `_acme-challenge.<domain>`
//! - `clean_challenge` - overwrite that record with a neutral placeholder
//!   (never delete it)
//! - `deploy_cert` - copy the issued full chain and key to every cluster node
//!   directory and restart pveproxy
//! - `unchanged_cert` - accepted and ignored
//!
//! Each invocation runs exactly one operation and exits; the renewal client
//! serializes calls, so there is no concurrent-invocation handling.

pub mod challenge;
pub mod cli;
pub mod config;
pub mod dns;
pub mod domain;
pub mod fanout;

use anyhow::Result;
use cli::{Cli, Operation};
use config::HookConfig;
use dns::GoDaddyClient;
use fanout::CertificateBundle;
use tracing::info;

/// Dispatch a parsed hook invocation.
///
/// Configuration is loaded from the environment before any operation logic
/// runs; missing credentials abort here even for operations that never touch
/// the DNS API. Exactly one handler runs per call.
pub async fn run(cli: Cli) -> Result<()> {
    let config = HookConfig::from_env()?;
    info!(operation = cli.operation.name(), "Hook executing");

    let api = GoDaddyClient::new(&config.credentials, config.api_url.clone())?;

    match cli.operation {
        Operation::DeployChallenge { domain, token, .. } => {
            challenge::deploy(&api, &domain, &token).await;
        }
        Operation::CleanChallenge { domain, .. } => {
            challenge::clean(&api, &domain).await;
        }
        Operation::DeployCert {
            key_path,
            cert_path,
            fullchain_path,
            chain_path,
            timestamp,
            ..
        } => {
            let bundle = CertificateBundle {
                key_path,
                cert_path,
                fullchain_path,
                chain_path,
                timestamp,
            };
            fanout::deploy_certificates(&config, &bundle).await?;
        }
        Operation::UnchangedCert { .. } => {}
    }

    Ok(())
}
