// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{themed, BOLD, RED};
use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // FOLIO_LOG wins over RUST_LOG; logs go to stderr so stdout stays pipeable
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", themed(RED, &[BOLD], "error:"), e);
            ExitCode::FAILURE
        }
    }
}
