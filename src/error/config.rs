use thiserror::Error;

/// Ошибка загрузки настроек процесса.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        assert_eq!(
            SettingsError::InvalidLogLevel("loud".into()).to_string(),
            "invalid log level `loud`"
        );
    }
}
