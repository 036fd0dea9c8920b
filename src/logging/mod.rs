pub mod config;
mod filters;
pub mod handle;

pub use config::LoggingConfig;
pub use handle::LoggingHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::error::LoggingError;

/// Инициализация логирования с конфигурацией.
///
/// Возвращённый [`LoggingHandle`] надо держать живым: он владеет guard'ом
/// фонового писателя файлового sink'а.
pub fn init_logging(mut config: LoggingConfig) -> Result<LoggingHandle, LoggingError> {
    config.apply_env_overrides();
    config.validate()?;
    config.ensure_log_dir()?;

    let env_filter = filters::build_filter(&config);
    let mut layers = Vec::new();

    // Console layer
    if config.console_enabled {
        let console_layer = if config.json {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_ansi(config.console_ansi)
                .boxed()
        };
        layers.push(console_layer);
    }

    // File layer
    let file_guard = if config.file_enabled {
        let appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed(),
        );
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        commit = env!("GIT_COMMIT"),
        built = env!("BUILD_TIME"),
        log_level = %config.level,
        console_enabled = config.console_enabled,
        file_enabled = config.file_enabled,
        "Logging system initialized"
    );

    Ok(LoggingHandle::new(file_guard))
}
