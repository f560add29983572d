use std::time::Duration;

use thiserror::Error;

use crate::importance::DomainWeights;

pub const DEFAULT_CHANGE_THRESHOLD: f64 = 0.98;
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 800;

/// Read-only configuration shared by every analysis call. Carrying the
/// domain-weight table here keeps it immutable and explicitly passed
/// rather than process-global.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub summarizer: SummarizerConfig,
    /// Visual similarity below this counts as a change even without a
    /// textual diff.
    pub change_threshold: f64,
    pub domain_weights: DomainWeights,
    pub snippet_max_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summarizer: SummarizerConfig::default(),
            change_threshold: DEFAULT_CHANGE_THRESHOLD,
            domain_weights: DomainWeights::default(),
            snippet_max_chars: DEFAULT_SNIPPET_MAX_CHARS,
        }
    }
}

/// External summarization backend settings. Disabled by default, which
/// keeps the whole pipeline deterministic.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: "gpt-oss-120b".to_string(),
            endpoint: "https://api.cerebras.ai/v1/chat/completions".to_string(),
            timeout: Duration::from_millis(10_000),
            max_retries: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
