//! # logvol — per-pod log volume plugin
//!
//! FlexVolume-style executable the kubelet invokes once per operation.
//! The response envelope goes to standard output; diagnostics go to
//! standard error so the kubelet can parse stdout as JSON.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used, clippy::panic))]

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
