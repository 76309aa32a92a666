mod server_config;
use server_config::ServerConfig;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use userprobe::{api, backend::MemoryStore};

#[derive(Parser, Debug)]
#[clap(version, about = "Serve the user endpoint")]
struct Cli {
    /// TOML file with `host` and `port`; 127.0.0.1:3000 when omitted
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    userprobe::init_logging();

    let config = match &args.config {
        Some(path) => ServerConfig::read(path)?,
        None => ServerConfig::default()
    };

    let app = api::router(api::AppState::new(MemoryStore::new()));
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
