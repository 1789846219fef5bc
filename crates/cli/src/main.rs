//! Corner Market CLI - browse the catalog and run an order session.
//!
//! # Usage
//!
//! ```bash
//! # Print the product catalog
//! market-cli catalog
//!
//! # Open an interactive order session
//! market-cli session
//! ```
//!
//! # Commands
//!
//! - `catalog` - Fetch and print the product catalog
//! - `session` - Load the catalog, open an order, and read commands from
//!   stdin (`list`, `add`, `submit`, `remove`, `cart`, `quit`)
//!
//! The catalog API origin comes from `MARKET_API_ORIGIN`
//! (default `http://127.0.0.1:8000`).

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's job
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "market-cli")]
#[command(author, version, about = "Corner Market CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog,
    /// Open an interactive order session
    Session,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog => commands::catalog::run().await?,
        Commands::Session => commands::session::run().await?,
    }
    Ok(())
}
