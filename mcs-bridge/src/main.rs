//! mcs-bridge - Minecraft server occupancy/fault sensor
//!
//! ```bash
//! # Run continuously, polling every update_interval_ms (minimum one minute)
//! MCS_SERVER_HOST=mc.example.com mcs-bridge
//!
//! # Single poll, JSON to stdout
//! mcs-bridge --once --pretty
//! ```

use mcs_bridge::cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match mcs_bridge::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
