use std::{env, str::FromStr, time::Duration};

use super::env::{
    AnalysisConfig, ConfigError, SummarizerConfig, DEFAULT_CHANGE_THRESHOLD,
    DEFAULT_SNIPPET_MAX_CHARS,
};
use crate::importance::DomainWeights;

pub fn load_config() -> Result<AnalysisConfig, ConfigError> {
    dotenvy::dotenv().ok();
    AnalysisConfig::from_env()
}

impl AnalysisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = SummarizerConfig::default();
        let summarizer = SummarizerConfig {
            enabled: env::var("SUMMARY_ENABLED")
                .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            api_key: env::var("SUMMARY_API_KEY").ok().filter(|v| !v.is_empty()),
            model: env::var("SUMMARY_MODEL").unwrap_or(defaults.model),
            endpoint: env::var("SUMMARY_API_URL").unwrap_or(defaults.endpoint),
            timeout: Duration::from_millis(parse_var("SUMMARY_TIMEOUT_MS", 10_000u64)?),
            max_retries: parse_var("SUMMARY_MAX_RETRIES", 1u32)?,
        };

        Ok(Self {
            summarizer,
            change_threshold: parse_var("CHANGE_VISUAL_THRESHOLD", DEFAULT_CHANGE_THRESHOLD)?
                .clamp(0.0, 1.0),
            domain_weights: domain_weights_from_env()?,
            snippet_max_chars: parse_var("SNIPPET_MAX_CHARS", DEFAULT_SNIPPET_MAX_CHARS)?,
        })
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(key, value)),
        Err(_) => Ok(default),
    }
}

fn domain_weights_from_env() -> Result<DomainWeights, ConfigError> {
    match env::var("DOMAIN_WEIGHTS") {
        Ok(raw) => parse_domain_weights(&raw),
        Err(_) => Ok(DomainWeights::default()),
    }
}

/// Parses a `tag=weight,tag=weight` override list. An override replaces
/// the default table entirely.
fn parse_domain_weights(raw: &str) -> Result<DomainWeights, ConfigError> {
    let mut pairs = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let (tag, weight) = part
            .split_once('=')
            .ok_or_else(|| ConfigError::Invalid("DOMAIN_WEIGHTS", part.to_string()))?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid("DOMAIN_WEIGHTS", part.to_string()))?;
        pairs.push((tag.trim().to_string(), weight));
    }
    Ok(DomainWeights::from_pairs(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domain_weight_overrides() {
        let weights = parse_domain_weights("clinical=1.3, Finance=1.05").unwrap();
        assert_eq!(weights.weight_for("clinical"), 1.3);
        assert_eq!(weights.weight_for("finance"), 1.05);
        assert_eq!(weights.weight_for("regulatory"), 1.0);
    }

    #[test]
    fn rejects_malformed_weight_entries() {
        assert!(parse_domain_weights("regulatory").is_err());
        assert!(parse_domain_weights("regulatory=fast").is_err());
    }

    #[test]
    fn empty_override_list_yields_empty_table() {
        let weights = parse_domain_weights("").unwrap();
        assert_eq!(weights.weight_for("regulatory"), 1.0);
    }
}
