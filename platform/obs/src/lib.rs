use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

/// Configuration for tracing initialization.
#[derive(Clone, Debug)]
pub struct ObsConfig {
    pub service_name: &'static str,
    pub env_filter: Option<String>,
    /// Emit `target` fields, useful when several crates log at once.
    pub with_target: bool,
}

impl Default for ObsConfig {
    fn default() -> Self {
        Self {
            service_name: "hr-console",
            env_filter: None,
            with_target: false,
        }
    }
}

/// Resolve the filter directive: explicit config, then `RUST_LOG`, then `info`.
pub fn filter_directive(config: &ObsConfig) -> String {
    config
        .env_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|raw| !raw.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

/// Install the fmt subscriber on stderr. Repeated calls are no-ops.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(filter_directive(&config))?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    tracing::debug!(service = config.service_name, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = ObsConfig {
            env_filter: Some("debug,products_hr=trace".into()),
            ..ObsConfig::default()
        };
        assert_eq!(filter_directive(&config), "debug,products_hr=trace");
    }

    #[test]
    fn blank_filter_is_ignored() {
        let config = ObsConfig {
            env_filter: Some("  ".into()),
            ..ObsConfig::default()
        };
        let directive = filter_directive(&config);
        assert!(!directive.trim().is_empty());
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(ObsConfig::default()).unwrap();
        init_tracing(ObsConfig::default()).unwrap();
    }
}
