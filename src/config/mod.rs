pub mod env;
mod loader;

pub use env::{AnalysisConfig, ConfigError, SummarizerConfig};
pub use loader::load_config;
