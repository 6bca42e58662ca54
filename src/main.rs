// src/main.rs
// =============================================================================
// This is the entry point of the projectinfo service.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info")
// 2. Parse command-line arguments / environment using clap
// 3. Build the Config once
// 4. Either serve HTTP or answer a single lookup and print it
// 5. Exit with proper code (0 = success, 2 = error)
//
// A missing PORT for `serve` is a clap error, so the process never starts
// listening without one.
// =============================================================================

mod cli;
mod config;
mod github;
mod server;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::error;

use cli::{Cli, Commands, UpstreamArgs};
use config::Config;

#[actix_web::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            bind,
            upstream,
        } => handle_serve(port, &bind, &upstream).await,
        Commands::Lookup {
            path,
            pretty,
            upstream,
        } => handle_lookup(&path, pretty, &upstream).await,
    }
}

// Handles the 'serve' subcommand
async fn handle_serve(port: u16, bind: &str, upstream: &UpstreamArgs) -> Result<i32> {
    let config = Config::from_args(upstream)?;

    server::serve(config, bind, port)
        .await
        .with_context(|| format!("Server on {}:{} failed", bind, port))?;

    Ok(0)
}

// Handles the 'lookup' subcommand: one request, printed to stdout
async fn handle_lookup(path: &str, pretty: bool, upstream: &UpstreamArgs) -> Result<i32> {
    let config = Config::from_args(upstream)?;

    let response = service::run_service(path, &config)
        .await
        .with_context(|| format!("Lookup of {} failed", path))?;

    let json = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(0)
}
