use bitflip_dns_domain::Config;
use bitflip_dns_infrastructure::dns::JsonQueryLogger;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: &str) -> anyhow::Result<Config> {
    let config = Config::load(path)?;
    Ok(config)
}

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub async fn open_query_log(config: &Config) -> anyhow::Result<Arc<JsonQueryLogger>> {
    let logger = JsonQueryLogger::open(&config.log).await?;
    info!(
        path = %logger.path().display(),
        control = %config.control_display(),
        correct_zones = config.questions.len(),
        "Query log ready"
    );
    Ok(Arc::new(logger))
}
