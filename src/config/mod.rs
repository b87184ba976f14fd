mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ShareConfig, SourceConfig, UiConfig, DEFAULT_ENDPOINT};
