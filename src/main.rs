use anyhow::Context;
use marketpulse_lib::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    marketpulse_lib::init_tracing();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    marketpulse_lib::run(config).await?;

    Ok(())
}
