//! Command-line arguments shared by signal gateway binaries.
//!
//! Every gateway accepts the same flags so deployments can start any of them
//! the same way.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Standard gateway configuration parsed from the command line.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct GatewayArgs {
    /// Name of the service (used for logging)
    #[arg(short, long, default_value = "signal_gateway")]
    service_name: String,

    /// Port for the signal HTTP endpoint
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the JSON signal → actions configuration
    #[arg(long, default_value = "./config/signals.json")]
    signal_config: PathBuf,
}

impl GatewayArgs {
    /// Parses command-line arguments into a `GatewayArgs` struct.
    ///
    /// `--help` and `--version` are handled by `clap`, which exits the process.
    pub fn parse_args(args: Vec<String>) -> Self {
        GatewayArgs::parse_from(args)
    }

    pub fn get_service_name(&self) -> String {
        self.service_name.clone()
    }

    /// Returns the port the signal endpoint listens on.
    pub fn get_port(&self) -> u16 {
        self.port
    }

    /// Returns the path of the signal configuration file.
    pub fn get_signal_config(&self) -> PathBuf {
        self.signal_config.clone()
    }
}
