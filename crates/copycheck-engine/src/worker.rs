// Worker loop: drain, reorder, process.
//
// Batches are drained in wake-up order, but each batch is stable-sorted by
// arrival before processing so the collusion heuristic always sees records
// oldest-first. The loop exits only after a stop request *and* an empty
// queue, so every accepted record is processed.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::pipeline::Pipeline;
use crate::queue::IngestQueue;

pub(crate) fn run(queue: Arc<IngestQueue>, mut pipeline: Pipeline) {
    debug!("detection worker started");

    while let Some(mut batch) = queue.next_batch() {
        // Stable sort: ties keep enqueue order.
        batch.sort_by_key(|record| record.arrival);
        trace!(batch_len = batch.len(), "processing drained batch");

        for record in batch {
            pipeline.process(record);
        }
    }

    debug!("detection worker drained and exiting");
}
