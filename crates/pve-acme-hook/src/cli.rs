//! Hook invocation surface
//!
//! The renewal client (dehydrated) invokes the hook with the operation name as
//! the first argument followed by operation-specific positional arguments.
//! Modeling each operation as a clap subcommand validates the argument shape
//! once at the dispatch boundary: unknown operations and arity mismatches fail
//! with a named usage error before any side effect occurs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pve-acme-hook")]
#[command(about = "dehydrated DNS-01 hook for Proxmox VE clusters using GoDaddy DNS")]
pub struct Cli {
    #[command(subcommand)]
    pub operation: Operation,
}

/// The four hook operations dehydrated invokes, with their positional
/// argument shapes
#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Publish the ACME validation token in a TXT record
    #[command(name = "deploy_challenge")]
    DeployChallenge {
        /// Domain under challenge
        domain: String,
        /// Challenge token filename; unused for DNS-01, supplied by dehydrated
        token_filename: String,
        /// Validation token to publish
        token: String,
    },

    /// Overwrite the challenge TXT record with a neutral placeholder
    #[command(name = "clean_challenge")]
    CleanChallenge {
        /// Domain whose challenge record is neutralized
        domain: String,
        /// Unused, supplied by dehydrated
        token_filename: String,
        /// Unused, supplied by dehydrated
        token: String,
    },

    /// Copy new certificate material to every cluster node and restart pveproxy
    #[command(name = "deploy_cert")]
    DeployCert {
        /// Domain the certificate was issued for
        domain: String,
        /// Path to the private key
        key_path: PathBuf,
        /// Path to the leaf certificate; not consumed by the copy step
        cert_path: PathBuf,
        /// Path to the full chain copied to each node
        fullchain_path: PathBuf,
        /// Path to the intermediate chain; not consumed by the copy step
        chain_path: PathBuf,
        /// Issuance timestamp
        timestamp: String,
    },

    /// No new certificate was issued; accept and ignore
    #[command(name = "unchanged_cert")]
    UnchangedCert {
        /// Arguments dehydrated passes along; all ignored
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

impl Operation {
    /// Operation name as dehydrated spells it, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Operation::DeployChallenge { .. } => "deploy_challenge",
            Operation::CleanChallenge { .. } => "clean_challenge",
            Operation::DeployCert { .. } => "deploy_cert",
            Operation::UnchangedCert { .. } => "unchanged_cert",
        }
    }
}
