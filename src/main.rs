//! # sha512-hex CLI Entry Point
//!
//! Reads a message from stdin until end-of-stream and prints its SHA-512
//! digest as lowercase hex on stdout.

use std::io;

use anyhow::Context;
use clap::Parser;

/// Print the SHA-512 digest of standard input.
///
/// The whole of stdin is read before hashing. Set `RUST_LOG` to enable
/// diagnostics on stderr.
#[derive(Parser, Debug)]
#[command(name = "sha512-hex", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the digest.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    sha512_hex::hash_stream(io::stdin().lock(), io::stdout().lock())
        .context("failed to hash standard input")?;

    Ok(())
}
