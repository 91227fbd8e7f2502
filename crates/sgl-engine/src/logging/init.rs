use std::sync::Once;

/// Diagnostics logger configuration.
///
/// This configures the `log` facade backend that carries the engine's own
/// diagnostics (dispatcher start-up, reported sink failures, late entries).
/// It is separate from the [`Logger`](super::Logger) pipeline.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "warn",
/// "sgl_engine=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the diagnostics logger once.
///
/// Subsequent calls are ignored. If another `log` backend is already
/// installed, that backend is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("diagnostics logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig {
            env_filter: Some("sgl_engine=debug".into()),
            ..LoggingConfig::default()
        };
        init_logging(config.clone());
        init_logging(config);
        assert!(INIT.is_completed());
    }
}
