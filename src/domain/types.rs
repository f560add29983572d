use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;

/// Importance label derived from the 0..10 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    Critical,
}

impl Severity {
    pub fn alert(self) -> AlertTier {
        match self {
            Severity::Low => AlertTier::Low,
            Severity::Medium => AlertTier::Med,
            Severity::Critical => AlertTier::Crit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::Critical => "critical",
        }
    }
}

/// Coarse routing bucket consumed by the downstream alerting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTier {
    Low,
    Med,
    Crit,
}

impl AlertTier {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertTier::Low => "low",
            AlertTier::Med => "med",
            AlertTier::Crit => "crit",
        }
    }
}

/// Monitoring intent used by the importance scorer: a free-text goal, a
/// categorical domain tag and an optional keyword watch list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringContext {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One analysis request: the snapshot pair plus the monitoring context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeInput {
    pub prev: Snapshot,
    pub cur: Snapshot,
    #[serde(default)]
    pub url: String,
    #[serde(flatten)]
    pub context: ScoringContext,
}

/// Result record assembled once per analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeResult {
    pub has_change: bool,
    pub text_added: usize,
    pub text_removed: usize,
    pub similarity: f64,
    pub total_diff_lines: usize,
    pub summary_change: String,
    pub importance: Severity,
    pub import_score: f64,
    pub alert_criteria: AlertTier,
}
