use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use crate::error::LoggingError;

/// Конфигурация логирования.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Базовый уровень: trace/debug/info/warn/error или off.
    pub level: String,
    /// Писать ли в консоль.
    pub console_enabled: bool,
    /// ANSI-подсветка консольного вывода.
    pub console_ansi: bool,
    /// JSON-формат консольного вывода вместо текстового.
    pub json: bool,
    /// Писать ли в файл.
    pub file_enabled: bool,
    /// Каталог файловых логов.
    pub log_dir: PathBuf,
    /// Префикс имени файла лога.
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            console_enabled: true,
            console_ansi: true,
            json: false,
            file_enabled: false,
            log_dir: PathBuf::from("logs"),
            file_name: "notiq.log".into(),
        }
    }
}

impl LoggingConfig {
    /// Переменные окружения перекрывают значения из конфигурации:
    /// `NOTIQ_LOG` — уровень, `NOTIQ_LOG_DIR` — каталог логов.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("NOTIQ_LOG") {
            self.level = level;
        }
        if let Ok(dir) = std::env::var("NOTIQ_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
        }
    }

    /// Проверяет конфигурацию до установки subscriber'а.
    pub fn validate(&self) -> Result<(), LoggingError> {
        self.level_filter().map(|_| ())
    }

    /// Разбирает уровень в [`LevelFilter`].
    pub fn level_filter(&self) -> Result<LevelFilter, LoggingError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| LoggingError::InvalidLevel(self.level.clone()))
    }

    /// Создаёт каталог логов, если включён файловый sink.
    pub fn ensure_log_dir(&self) -> Result<(), LoggingError> {
        if self.file_enabled {
            std::fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }
}
