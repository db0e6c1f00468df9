// ABOUTME: Coaching replay binary - backtests coaching decisions from recorded JSON inputs
// ABOUTME: Thin wrapper parsing arguments, initializing logging, and printing JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use clap::Parser;
use coaching_engine::cli::{run, Cli};
use coaching_engine::logging::{LogFormat, LoggingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env_or_format(LogFormat::Compact);
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let output = run(&cli)?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}
