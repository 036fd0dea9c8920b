use std::path::PathBuf;

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::{error::SettingsError, logging::LoggingConfig};

/// Настройки процесса, собирающего шины уведомлений.
///
/// Источники, по возрастанию приоритета: значения по умолчанию, затем
/// переменные окружения с префиксом `NOTIQ_` (например `NOTIQ_LOG_LEVEL`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub log_level: String,
    pub log_dir: PathBuf,
    pub console_logging: bool,
    pub file_logging: bool,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        let cfg = Config::builder()
            // Значения по умолчанию
            .set_default("log_level", "info")?
            .set_default("log_dir", "logs")?
            .set_default("console_logging", true)?
            .set_default("file_logging", false)?
            // Переменные окружения с префиксом NOTIQ_
            .add_source(Environment::with_prefix("NOTIQ"))
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.logging()
            .validate()
            .map_err(|_| SettingsError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Переводит настройки в конфигурацию логирования.
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            console_enabled: self.console_logging,
            file_enabled: self.file_logging,
            log_dir: self.log_dir.clone(),
            ..LoggingConfig::default()
        }
    }
}
