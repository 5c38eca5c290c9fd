// copycheck - Asynchronous plagiarism detection for tokenized code
// submissions.
//
// Facade over the workspace crates:
// - copycheck-core: pure similarity algorithms (rolling hashes, pairwise
//   two-tier matching, patchwork accumulation)
// - copycheck-config: layered detection-policy configuration
// - copycheck-engine: ingestion queue, worker thread, detection pipeline,
//   flag notification

pub use copycheck_config::DetectionConfig;
pub use copycheck_core::{is_match, MatchThresholds, PatchworkScan, Token, WindowHasher};
pub use copycheck_engine::{
    Arrival, Checker, EngineError, ProfessorHook, StudentHook, Submission, Tokenizer,
};
