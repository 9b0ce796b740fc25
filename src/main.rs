mod config;
mod error;
mod matcher;
mod model;
mod platform;
mod plugin;
mod sources;

use anyhow::{Context, Result};
use clap::Parser;
use crate::config::load_config;
use crate::plugin::AppPlugin;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search terms, joined with spaces
    query: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the plugin metadata instead of searching
    #[arg(long)]
    metadata: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let plugin = AppPlugin::new(config);

    if args.metadata {
        return print_json(&plugin.metadata(), args.pretty);
    }

    let query = args.query.join(" ");
    let query = query.trim();
    let response = plugin.execute(query).await;
    print_json(&response, args.pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize response")?;
    println!("{}", json);
    Ok(())
}
