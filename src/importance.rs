use std::collections::HashMap;

use crate::domain::Severity;
use crate::rounding::round2;

const KEYWORD_BOOST_PER_HIT: f64 = 0.05;
const KEYWORD_BOOST_CAP: f64 = 0.2;

/// Immutable domain weighting table, passed explicitly into scoring so
/// deployments can override it without shared mutable state.
#[derive(Debug, Clone)]
pub struct DomainWeights {
    weights: HashMap<String, f64>,
}

impl Default for DomainWeights {
    fn default() -> Self {
        let weights = [
            ("regulatory", 1.2),
            ("compliance", 1.2),
            ("safety", 1.15),
            ("legal", 1.15),
            ("security", 1.15),
            ("pricing", 1.1),
        ]
        .into_iter()
        .map(|(tag, weight)| (tag.to_string(), weight))
        .collect();
        Self { weights }
    }
}

impl DomainWeights {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            weights: pairs
                .into_iter()
                .map(|(tag, weight)| (tag.to_lowercase(), weight))
                .collect(),
        }
    }

    /// Unknown tags weigh 1.0.
    pub fn weight_for(&self, domain: &str) -> f64 {
        self.weights
            .get(&domain.to_lowercase())
            .copied()
            .unwrap_or(1.0)
    }
}

/// Scorer inputs: diff statistics plus the monitoring context.
#[derive(Debug, Clone, Copy)]
pub struct ImportanceInputs<'a> {
    pub text_added: usize,
    pub text_removed: usize,
    pub sim_text: f64,
    pub sim_visual: f64,
    pub goal: &'a str,
    pub domain: &'a str,
    pub keywords: &'a [String],
}

/// Combines textual and visual dissimilarity, keyword boosts and the
/// domain weight into a 0..10 score plus a human-readable rationale.
///
/// Every intermediate is clamped before the final scaling, so the score
/// stays in bounds for any input.
pub fn compute_importance(
    inputs: &ImportanceInputs<'_>,
    weights: &DomainWeights,
) -> (f64, String) {
    let text_delta = (1.0 - inputs.sim_text).clamp(0.0, 1.0);
    let visual_delta = (1.0 - inputs.sim_visual).clamp(0.0, 1.0);
    let mut base = (text_delta * 0.6 + visual_delta * 0.4).clamp(0.0, 1.0);

    let goal_lower = inputs.goal.to_lowercase();
    let hits = inputs
        .keywords
        .iter()
        .filter(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            !keyword.is_empty() && goal_lower.contains(&keyword)
        })
        .count();
    if hits > 0 {
        base += (KEYWORD_BOOST_PER_HIT * hits as f64).min(KEYWORD_BOOST_CAP);
    }

    let weight = weights.weight_for(inputs.domain);
    let weighted = (base * weight).clamp(0.0, 1.0);
    let score10 = round2(weighted * 10.0);

    let rationale = format!(
        "text_delta={text_delta:.2}, visual_delta={visual_delta:.2}, domain={}, keyword_hits={hits}, weighted={score10}",
        inputs.domain
    );
    (score10, rationale)
}

/// Label thresholds: < 4.5 low, < 7.5 medium, otherwise critical.
pub fn label_from_score(score: f64) -> Severity {
    if score < 4.5 {
        Severity::Low
    } else if score < 7.5 {
        Severity::Medium
    } else {
        Severity::Critical
    }
}
