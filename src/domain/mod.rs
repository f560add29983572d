pub mod snapshot;
pub mod types;

pub use snapshot::{ScreenshotSource, Snapshot};
pub use types::{AlertTier, ChangeInput, ChangeResult, ScoringContext, Severity};
