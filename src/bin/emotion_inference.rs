use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use empath_services::utils::{bind, init_tracing, serve};
use empath_services::config::{ConfigOverrides, ServiceKind};
use empath_services::{inference_router, InferenceService, ServiceConfig};

/// Emotion inference service: turns behavioral telemetry into an emotion prediction
#[derive(Parser)]
#[command(name = "emotion-inference")]
#[command(version)]
#[command(about = "Serve the emotion inference HTTP API", long_about = None)]
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
    let config = ServiceConfig::resolve(cli.config.as_deref(), ServiceKind::Inference, overrides)?;

    init_tracing(&config.logging)?;

    let service = InferenceService::with_stub(config.inference.clone());
    info!(predictor = service.predictor_name(), "emotion inference service configured");

    let listener = bind(&config.inference.server()).await?;
    serve(listener, inference_router(service), "emotion-inference").await?;
    Ok(())
}
