use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ticket_join::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::from_env();

    if let Err(e) = ticket_join::run(&settings).await {
        tracing::error!("{:#}", anyhow::Error::new(e));
        std::process::exit(1);
    }

    Ok(())
}
