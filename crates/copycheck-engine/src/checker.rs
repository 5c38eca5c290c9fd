// Public engine surface.
//
// One `Checker` owns one worker thread for its whole lifetime: spawned at
// construction, signalled and joined at shutdown (explicitly via
// [`Checker::shutdown`], or from `Drop` on any other exit path). Teardown
// blocks until every queued submission has been processed.

use std::sync::Arc;
use std::thread::JoinHandle;

use copycheck_config::DetectionConfig;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::queue::IngestQueue;
use crate::submission::{Arrival, Submission, SubmissionRecord, Tokenizer};
use crate::worker;

pub struct Checker {
    queue: Arc<IngestQueue>,
    tokenizer: Arc<dyn Tokenizer>,
    worker: Option<JoinHandle<()>>,
}

impl Checker {
    /// Checker with no base corpus and default thresholds.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::with_config(tokenizer, Vec::new(), DetectionConfig::default())
    }

    /// Checker pre-loaded with an instructor-provided base corpus.
    ///
    /// Base entries are tokenized here, on the constructing thread, and
    /// stored with an ancient arrival so the collusion-window rule never
    /// applies to them.
    pub fn with_base_corpus(tokenizer: Arc<dyn Tokenizer>, corpus: Vec<Arc<Submission>>) -> Self {
        Self::with_config(tokenizer, corpus, DetectionConfig::default())
    }

    pub fn with_config(
        tokenizer: Arc<dyn Tokenizer>,
        corpus: Vec<Arc<Submission>>,
        config: DetectionConfig,
    ) -> Self {
        let base: Vec<SubmissionRecord> = corpus
            .into_iter()
            .map(|submission| {
                let tokens = tokenizer.tokenize(&submission.source);
                SubmissionRecord::new(submission, tokens, Arrival::Ancient)
            })
            .collect();

        info!(
            base_entries = base.len(),
            long_window = config.long_window,
            short_window = config.short_window,
            "starting plagiarism checker"
        );

        let pipeline = Pipeline::new(&config, base);
        let queue = Arc::new(IngestQueue::new());
        let worker = {
            let queue = Arc::clone(&queue);
            std::thread::Builder::new()
                .name("copycheck-worker".to_string())
                .spawn(move || worker::run(queue, pipeline))
                .expect("failed to spawn detection worker thread")
        };

        Self {
            queue,
            tokenizer,
            worker: Some(worker),
        }
    }

    /// Fire-and-forget submission: tokenizes on the calling thread, queues
    /// the record, and returns without waiting for detection. Outcomes are
    /// delivered later through the handle's collaborator hooks.
    pub fn add_submission(&self, submission: Arc<Submission>) -> Result<()> {
        let arrival = Arrival::now();
        let tokens = self.tokenizer.tokenize(&submission.source);
        let record = SubmissionRecord::new(submission, tokens, arrival);

        debug!(
            id = record.submission.id,
            tokens = record.tokens.len(),
            fingerprint = %record.fingerprint,
            "submission enqueued"
        );
        self.queue.submit(record)
    }

    /// Signals the worker and blocks until it has drained the queue and
    /// exited. Safe to call without ever having submitted work.
    pub fn shutdown(mut self) {
        self.stop_and_join();
    }

    fn stop_and_join(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.queue.request_stop();
            if handle.join().is_err() {
                error!("detection worker thread panicked");
            }
        }
    }
}

impl Drop for Checker {
    fn drop(&mut self) {
        self.stop_and_join();
    }
}
