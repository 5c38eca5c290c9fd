// Shared fixtures for the integration tests: a deterministic tokenizer over
// whitespace-separated integer sources, and recording collaborator hooks.

use std::sync::Arc;

use copycheck::{ProfessorHook, StudentHook, Submission, Token, Tokenizer};
use parking_lot::Mutex;

/// Install a fmt subscriber once so RUST_LOG surfaces engine traces.
pub fn init() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses each whitespace-separated word as one integer token code.
pub struct NumericTokenizer;

impl Tokenizer for NumericTokenizer {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        source
            .split_whitespace()
            .map(|word| word.parse().expect("test sources contain only integers"))
            .collect()
    }
}

/// Renders a token sequence as a source string NumericTokenizer reverses.
pub fn source_of(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `len` consecutive token codes starting at `base`; distinct bases give
/// sequences sharing no window.
pub fn block(base: Token, len: usize) -> Vec<Token> {
    (0..len as Token).map(|i| base + i).collect()
}

/// Records every flag delivery, for both collaborator roles.
#[derive(Default)]
pub struct Recorder {
    pub student_flags: Mutex<Vec<u64>>,
    pub professor_flags: Mutex<Vec<u64>>,
}

impl Recorder {
    pub fn student_ids(&self) -> Vec<u64> {
        let mut ids = self.student_flags.lock().clone();
        ids.sort_unstable();
        ids
    }

    pub fn distinct_student_ids(&self) -> Vec<u64> {
        let mut ids = self.student_ids();
        ids.dedup();
        ids
    }
}

impl StudentHook for Recorder {
    fn flag_student(&self, submission: &Arc<Submission>) {
        self.student_flags.lock().push(submission.id);
    }
}

impl ProfessorHook for Recorder {
    fn flag_professor(&self, submission: &Arc<Submission>) {
        self.professor_flags.lock().push(submission.id);
    }
}

/// Submission wired to the shared recorder on both hooks.
pub fn submission(id: u64, tokens: &[Token], recorder: &Arc<Recorder>) -> Arc<Submission> {
    let mut submission = Submission::new(id, source_of(tokens));
    submission.student = Some(recorder.clone() as Arc<dyn StudentHook>);
    submission.professor = Some(recorder.clone() as Arc<dyn ProfessorHook>);
    Arc::new(submission)
}
