use anyhow::Result;
use saldo::commands::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logs replace plain console output in debug mode only.
    if std::env::var("SALDO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu().await
}
