//! Certificate fan-out across cluster nodes
//!
//! Proxmox keeps one directory per cluster member under a shared node root.
//! Deployment copies the issued full chain and private key into every node
//! directory under the fixed pveproxy filenames, then restarts the cluster
//! proxy once so all nodes pick up the new material.
//!
//! A copy failure on one node does not stop the others and does not suppress
//! the reload; partial propagation is accepted, there is no rollback.

use crate::config::HookConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

/// Certificate filename expected by pveproxy in each node directory
pub const PROXY_CERT_NAME: &str = "pveproxy-ssl.pem";

/// Private key filename expected by pveproxy in each node directory
pub const PROXY_KEY_NAME: &str = "pveproxy-ssl.key";

/// Errors that can occur during certificate fan-out
#[derive(Debug, Error)]
pub enum FanoutError {
    /// The cluster node root could not be enumerated
    #[error("failed to list cluster node root {path}: {source}")]
    NodeRoot {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Certificate material handed over by the renewal client at deployment time
///
/// The cert, chain and timestamp fields are part of the hook contract but are
/// not consumed by the copy step: pveproxy only wants the full chain and the
/// key. They are kept on the struct so the invocation shape stays documented
/// in one place.
#[derive(Debug, Clone)]
pub struct CertificateBundle {
    pub key_path: PathBuf,
    pub cert_path: PathBuf,
    pub fullchain_path: PathBuf,
    pub chain_path: PathBuf,
    pub timestamp: String,
}

/// Copy certificate material to every cluster node and restart the proxy.
///
/// Node membership is re-enumerated from the filesystem on every call; stray
/// files in the node root are skipped. Exactly one reload is triggered after
/// the node loop, regardless of per-node copy outcomes.
pub async fn deploy_certificates(
    config: &HookConfig,
    bundle: &CertificateBundle,
) -> Result<(), FanoutError> {
    info!(path = %bundle.fullchain_path.display(), "ssl_certificate");
    info!(path = %bundle.key_path.display(), "ssl_certificate_key");

    let entries = std::fs::read_dir(&config.node_root).map_err(|e| FanoutError::NodeRoot {
        path: config.node_root.display().to_string(),
        source: e,
    })?;

    for entry in entries {
        let Ok(entry) = entry else { continue };
        let node_dir = entry.path();
        // Only real node directories count; the root can contain stray files
        if !node_dir.is_dir() {
            continue;
        }

        copy_into(&bundle.fullchain_path, &node_dir.join(PROXY_CERT_NAME));
        copy_into(&bundle.key_path, &node_dir.join(PROXY_KEY_NAME));
    }

    reload_proxy(&config.reload_command).await;
    Ok(())
}

/// Copy one file, overwriting the destination; failures are logged and the
/// fan-out continues.
fn copy_into(source: &Path, dest: &Path) {
    if let Err(e) = std::fs::copy(source, dest) {
        warn!(
            source = %source.display(),
            dest = %dest.display(),
            error = %e,
            "Failed to copy certificate file, continuing"
        );
    }
}

/// Run the proxy reload command, fire-and-forget.
async fn reload_proxy(command: &str) {
    info!(command = %command, "Restarting cluster proxy");

    match Command::new("sh").arg("-c").arg(command).status().await {
        Ok(status) if !status.success() => {
            warn!(code = status.code(), "Proxy reload command exited non-zero");
        }
        Ok(_) => {}
        Err(e) => {
            warn!(error = %e, "Failed to run proxy reload command");
        }
    }
}
