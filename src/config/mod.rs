mod loader;
mod types;

pub use loader::{validate_url, ConfigError};
pub use types::{Config, LoaderConfig, LoggingConfig, UiConfig};
