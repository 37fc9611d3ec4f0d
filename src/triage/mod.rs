pub mod classifier;
pub mod record;
pub mod severity;
pub mod summary;

// Re-export common types for convenience
pub use classifier::{classify, Verdict};
pub use record::{ClassifiedRecord, DetectionRecord};
pub use severity::{AlertAction, Severity};
pub use summary::{triage_log, TriageResult, TriageSummary};
