// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2026 trendwatch contributors

use clap::Parser;
use std::process::ExitCode;
use trendwatch::cli::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::parse();
    match trendwatch::cli::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
