// Submission handles and the records the engine derives from them.
//
// A `Submission` is the caller-owned handle: source text plus optional
// student/professor collaborators. The engine wraps it in a
// `SubmissionRecord` at enqueue time - tokens, arrival timestamp and a
// content fingerprint - and that record is immutable from then on, moved
// (never cloned) from queue to batch to history.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use copycheck_core::Token;

/// External tokenizer seam: source text in, ordered token codes out.
/// Implementations must be deterministic for identical input text.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, source: &str) -> Vec<Token>;
}

/// Student-side collaborator notified when a submission is flagged.
pub trait StudentHook: Send + Sync {
    fn flag_student(&self, submission: &Arc<Submission>);
}

/// Professor-side collaborator notified when a submission is flagged.
pub trait ProfessorHook: Send + Sync {
    fn flag_professor(&self, submission: &Arc<Submission>);
}

/// Caller-owned submission handle.
pub struct Submission {
    pub id: u64,
    pub source: String,
    pub student: Option<Arc<dyn StudentHook>>,
    pub professor: Option<Arc<dyn ProfessorHook>>,
}

impl Submission {
    /// Handle with no collaborators attached; flagging it is a no-op.
    pub fn new(id: u64, source: impl Into<String>) -> Self {
        Self {
            id,
            source: source.into(),
            student: None,
            professor: None,
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("id", &self.id)
            .field("source_len", &self.source.len())
            .field("student", &self.student.is_some())
            .field("professor", &self.professor.is_some())
            .finish()
    }
}

/// When a record entered the system, on a monotonic clock.
///
/// `Ancient` marks base-corpus entries: it sorts before every real arrival
/// and is exempt from the collusion window (no elapsed time is defined
/// against it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Arrival {
    Ancient,
    At(Instant),
}

impl Arrival {
    pub fn now() -> Self {
        Arrival::At(Instant::now())
    }

    /// Absolute time between two real arrivals, or `None` when either side
    /// is `Ancient`. Symmetric: batching can hand records to the worker in
    /// either order, and how close two arrivals are does not depend on
    /// which one is examined first.
    pub fn separation(self, other: Arrival) -> Option<Duration> {
        match (self, other) {
            (Arrival::At(a), Arrival::At(b)) => a
                .checked_duration_since(b)
                .or_else(|| b.checked_duration_since(a)),
            _ => None,
        }
    }
}

/// Immutable per-submission record flowing through the engine.
pub(crate) struct SubmissionRecord {
    pub(crate) submission: Arc<Submission>,
    pub(crate) tokens: Vec<Token>,
    pub(crate) arrival: Arrival,
    pub(crate) fingerprint: blake3::Hash,
}

impl SubmissionRecord {
    pub(crate) fn new(submission: Arc<Submission>, tokens: Vec<Token>, arrival: Arrival) -> Self {
        let fingerprint = blake3::hash(submission.source.as_bytes());
        Self {
            submission,
            tokens,
            arrival,
            fingerprint,
        }
    }
}
