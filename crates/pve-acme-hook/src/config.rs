//! Hook configuration from the process environment
//!
//! The renewal client gives us no configuration channel beyond the
//! environment, so everything lives there: GoDaddy credentials are required,
//! the rest has cluster defaults that can be overridden for testing or
//! non-standard layouts.

use std::path::PathBuf;
use thiserror::Error;

/// Default Proxmox cluster filesystem root holding one directory per node
pub const DEFAULT_NODE_ROOT: &str = "/etc/pve/nodes";

/// Default command restarting the cluster proxy after certificate deployment
pub const DEFAULT_RELOAD_COMMAND: &str = "systemctl restart pveproxy";

/// Default GoDaddy API endpoint
pub const DEFAULT_API_URL: &str = "https://api.godaddy.com";

/// Errors that can occur while loading the hook configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential environment variable is absent
    #[error(
        "Missing GoDaddy API {kind} in {var} environment variable! \
         Please register one at https://developer.godaddy.com/keys/"
    )]
    MissingCredential { kind: &'static str, var: &'static str },
}

/// GoDaddy API credential pair
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub key: String,
    pub secret: String,
}

/// Complete hook configuration
///
/// Built once at startup and passed explicitly into the handlers; there is no
/// ambient global state.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// GoDaddy API credentials
    pub credentials: ApiCredentials,
    /// GoDaddy API base URL (override via `GD_API_URL`, e.g. for the OTE endpoint)
    pub api_url: String,
    /// Directory containing one subdirectory per cluster node
    pub node_root: PathBuf,
    /// Shell command that restarts the cluster proxy service
    pub reload_command: String,
}

impl HookConfig {
    /// Load configuration from the process environment.
    ///
    /// `GD_KEY` and `GD_SECRET` are required; their absence is fatal before
    /// any operation logic runs. `GD_API_URL`, `PVE_NODE_DIR` and
    /// `PVE_RELOAD_CMD` override the cluster defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let key = require_env("GD_KEY", "key")?;
        let secret = require_env("GD_SECRET", "secret")?;

        Ok(Self {
            credentials: ApiCredentials { key, secret },
            api_url: std::env::var("GD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            node_root: std::env::var("PVE_NODE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_NODE_ROOT)),
            reload_command: std::env::var("PVE_RELOAD_CMD")
                .unwrap_or_else(|_| DEFAULT_RELOAD_COMMAND.to_string()),
        })
    }
}

fn require_env(var: &'static str, kind: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingCredential { kind, var })
}
