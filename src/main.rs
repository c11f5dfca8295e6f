use clap::Parser;
use pipeline_backend::{config::Config, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    http::serve(config).await
}
