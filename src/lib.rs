//! Change analysis for monitored page snapshots.
//!
//! Given a previous and a current snapshot (DOM markup plus an optional
//! screenshot), the pipeline extracts visible text, diffs it, compares the
//! screenshots perceptually, scores how important the change is and produces
//! a human-readable summary. Every input combination yields a complete
//! [`ChangeResult`]; degenerate inputs degrade to documented defaults instead
//! of failing.

pub mod config;
pub mod domain;
pub mod importance;
pub mod pipeline;
pub mod summary;
pub mod textdiff;
pub mod visual;

pub use config::{load_config, AnalysisConfig, ConfigError, SummarizerConfig};
pub use domain::{
    AlertTier, ChangeInput, ChangeResult, ScoringContext, ScreenshotSource, Severity, Snapshot,
};
pub use importance::DomainWeights;
pub use pipeline::ChangeAnalyzer;

pub(crate) mod rounding {
    pub(crate) fn round4(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }

    pub(crate) fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn rounds_to_expected_precision() {
            assert_eq!(round4(0.91426), 0.9143);
            assert_eq!(round2(1.62888), 1.63);
            assert_eq!(round4(1.0), 1.0);
            assert_eq!(round2(0.0), 0.0);
        }
    }
}
