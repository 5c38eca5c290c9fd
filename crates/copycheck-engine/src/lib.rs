// copycheck-engine - Asynchronous plagiarism detection over tokenized
// submissions.
//
// Producers hand submissions to [`Checker::add_submission`] and return
// immediately; a single dedicated worker thread drains the pending queue,
// restores timestamp order, and drives each record through the detection
// pipeline (base corpus, accepted history, patchwork). Flag outcomes are
// delivered through the caller-supplied student/professor hooks.

pub mod checker;
pub mod error;
pub mod submission;

mod notify;
mod pipeline;
mod queue;
mod worker;

pub use checker::Checker;
pub use error::{EngineError, Result};
pub use submission::{Arrival, ProfessorHook, StudentHook, Submission, Tokenizer};
