mod config;
mod main_lib;

use config::Config;
use main_lib::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    match std::env::args().nth(1).as_deref() {
        None => main_lib::check(&config).await,
        Some("probe") => main_lib::probe(&config).await,
        Some(other) => anyhow::bail!("Unknown command: {} (expected no command, or 'probe')", other),
    }
}
