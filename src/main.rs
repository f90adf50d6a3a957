use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use my_sports::cmd::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // stdout carries the tables, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("my_sports=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run().await
}
