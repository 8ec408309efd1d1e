use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use hoslog_core::HosConfig;
use hoslog_server::{ServeConfig, serve};

#[derive(Debug, Parser)]
#[command(name = "hoslog-server", version)]
#[command(about = "HTTP API for HOS trip feasibility checks and duty-status logbook generation")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Optional JSON file overriding the default HOS constants
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading HOS config from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing HOS config from {}", path.display()))?
        }
        None => HosConfig::default(),
    };
    log::debug!("serving with config: {config:?}");

    serve(
        config,
        ServeConfig {
            bind: args.bind,
            port: args.port,
        },
    )
    .await
}
