//! # CLI Argument Definitions
//!
//! Subcommands, arguments, and flags of the `capgate` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "capgate")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(arg_required_else_help = true)]
#[command(about = "Capability support levels and incompatibility checks for cluster releases")]
pub struct Cli {
    /// Configuration file (TOML, JSON, or YAML); `CAPGATE__*` variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off); overrides the configured one
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// List the support level of every feature for a release
    Features {
        /// OpenShift release, e.g. '4.14' or '4.14.3'
        #[arg(long = "version")]
        openshift_version: String,

        /// CPU architecture (x86_64 by default)
        #[arg(short, long)]
        arch: Option<String>,

        /// Infrastructure platform (baremetal, none, nutanix, vsphere, external)
        #[arg(short, long)]
        platform: Option<String>,

        /// Name of the external platform, e.g. 'oci'
        #[arg(long)]
        external_name: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the support level of every CPU architecture for a release
    Architectures {
        /// OpenShift release, e.g. '4.14'
        #[arg(long = "version")]
        openshift_version: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Check a cluster snapshot and its proposed update for incompatibilities
    Validate {
        /// JSON file with 'cluster', 'infra_env', 'cluster_delta', and 'infra_env_delta'
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Target CPU architecture (the cluster's own by default)
        #[arg(short, long)]
        arch: Option<String>,
    },
}
