use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use empath_services::utils::{bind, init_tracing, serve};
use empath_services::config::{ConfigOverrides, ServiceKind};
use empath_services::{memory_router, MemoryService, ServiceConfig};

/// Character memory service: per-session key lookups
#[derive(Parser)]
#[command(name = "character-memory")]
#[command(version)]
#[command(about = "Serve the character memory HTTP API", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "EMPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level / filter
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        host: cli.host,
        port: cli.port,
        log_level: cli.log_level,
    };
    let config = ServiceConfig::resolve(cli.config.as_deref(), ServiceKind::Memory, overrides)?;

    init_tracing(&config.logging)?;

    let service = MemoryService::with_stub(config.memory.clone());
    info!(placeholder = %config.memory.placeholder_value, "character memory service configured");

    let listener = bind(&config.memory.server()).await?;
    serve(listener, memory_router(service), "character-memory").await?;
    Ok(())
}
