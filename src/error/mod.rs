pub mod config;
pub mod logging;

pub use config::SettingsError;
pub use logging::LoggingError;
