// Ingestion queue: the single locked hand-off between producer threads and
// the worker.
//
// Producers push fully-tokenized records under a short-held mutex and signal
// the condvar; the worker swaps the whole pending buffer out in one motion.
// Stop is recorded under the same lock, and the worker keeps draining until
// the buffer is empty, so no accepted record is ever dropped.

use parking_lot::{Condvar, Mutex};

use crate::error::{EngineError, Result};
use crate::submission::SubmissionRecord;

pub(crate) struct IngestQueue {
    state: Mutex<PendingState>,
    available: Condvar,
}

struct PendingState {
    pending: Vec<SubmissionRecord>,
    stop: bool,
}

impl IngestQueue {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(PendingState {
                pending: Vec::new(),
                stop: false,
            }),
            available: Condvar::new(),
        }
    }

    /// O(1) append under the lock; never blocks on processing.
    pub(crate) fn submit(&self, record: SubmissionRecord) -> Result<()> {
        {
            let mut state = self.state.lock();
            if state.stop {
                return Err(EngineError::ShuttingDown {
                    id: record.submission.id,
                });
            }
            state.pending.push(record);
        }
        self.available.notify_one();
        Ok(())
    }

    /// Blocks until work or stop, then swaps out the entire pending buffer.
    ///
    /// Returns `None` only once stop has been requested *and* the buffer is
    /// empty - the worker's signal to exit after a complete drain.
    pub(crate) fn next_batch(&self) -> Option<Vec<SubmissionRecord>> {
        let mut state = self.state.lock();
        loop {
            if !state.pending.is_empty() {
                return Some(std::mem::take(&mut state.pending));
            }
            if state.stop {
                return None;
            }
            self.available.wait(&mut state);
        }
    }

    pub(crate) fn request_stop(&self) {
        {
            let mut state = self.state.lock();
            state.stop = true;
        }
        self.available.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::{Arrival, Submission};
    use std::sync::Arc;

    fn record(id: u64) -> SubmissionRecord {
        SubmissionRecord::new(Arc::new(Submission::new(id, "src")), vec![1, 2, 3], Arrival::now())
    }

    #[test]
    fn test_submitted_records_drain_in_one_batch() {
        let queue = IngestQueue::new();
        queue.submit(record(1)).unwrap();
        queue.submit(record(2)).unwrap();

        let batch = queue.next_batch().unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].submission.id, 1);
        assert_eq!(batch[1].submission.id, 2);
    }

    #[test]
    fn test_stop_rejects_new_submissions() {
        let queue = IngestQueue::new();
        queue.request_stop();

        let err = queue.submit(record(7)).unwrap_err();
        assert!(matches!(err, EngineError::ShuttingDown { id: 7 }));
    }

    #[test]
    fn test_pending_work_survives_stop() {
        let queue = IngestQueue::new();
        queue.submit(record(1)).unwrap();
        queue.request_stop();

        // The queued record is still handed out before the exit signal.
        let batch = queue.next_batch().unwrap();
        assert_eq!(batch.len(), 1);
        assert!(queue.next_batch().is_none());
    }

    #[test]
    fn test_stop_on_empty_queue_exits_immediately() {
        let queue = IngestQueue::new();
        queue.request_stop();
        assert!(queue.next_batch().is_none());
    }

    #[test]
    fn test_waiting_worker_wakes_on_submit() {
        let queue = Arc::new(IngestQueue::new());
        let consumer = {
            let queue = Arc::clone(&queue);
            std::thread::spawn(move || queue.next_batch().map(|batch| batch.len()))
        };

        // Give the consumer a moment to park on the condvar.
        std::thread::sleep(std::time::Duration::from_millis(20));
        queue.submit(record(1)).unwrap();

        assert_eq!(consumer.join().unwrap(), Some(1));
    }
}
