// Per-record detection pipeline, run exclusively on the worker thread.
//
// Check order: base corpus first (a match there is always the new
// submission's fault alone), then accepted history pairwise (with the
// collusion-window rule deciding whether the earlier party is flagged too),
// then the pooled patchwork scan. Every record is appended to history
// afterwards regardless of verdict - flagged work remains comparison
// material for later submissions.

use std::time::Duration;

use copycheck_config::DetectionConfig;
use copycheck_core::{is_match, MatchThresholds, PatchworkScan};
use tracing::{debug, info};

use crate::notify;
use crate::submission::SubmissionRecord;

pub(crate) struct Pipeline {
    thresholds: MatchThresholds,
    collusion_window: Duration,
    base: Vec<SubmissionRecord>,
    history: Vec<SubmissionRecord>,
}

enum Verdict {
    Clean,
    BaseMatch { base_id: u64 },
    HistoryMatch { prior: usize, colluding: bool },
    Patchwork,
}

impl Pipeline {
    pub(crate) fn new(config: &DetectionConfig, base: Vec<SubmissionRecord>) -> Self {
        Self {
            thresholds: MatchThresholds {
                long_window: config.long_window,
                short_window: config.short_window,
                short_match_count: config.short_match_count,
                patchwork_count: config.patchwork_count,
            },
            collusion_window: config.collusion_window(),
            base,
            history: Vec::new(),
        }
    }

    pub(crate) fn process(&mut self, record: SubmissionRecord) {
        let id = record.submission.id;

        match self.evaluate(&record) {
            Verdict::Clean => {
                debug!(id, fingerprint = %record.fingerprint, "submission stored clean");
            }
            Verdict::BaseMatch { base_id } => {
                info!(id, base_id, "submission matches base corpus; flagging");
                notify::flag(&record.submission);
            }
            Verdict::HistoryMatch { prior, colluding } => {
                let prior_record = &self.history[prior];
                if colluding {
                    info!(
                        id,
                        prior_id = prior_record.submission.id,
                        "near-simultaneous match; flagging both parties"
                    );
                    notify::flag(&prior_record.submission);
                } else {
                    info!(
                        id,
                        prior_id = prior_record.submission.id,
                        "submission matches earlier work; flagging"
                    );
                }
                notify::flag(&record.submission);
            }
            Verdict::Patchwork => {
                info!(id, "patchwork overlap across prior submissions; flagging");
                notify::flag(&record.submission);
            }
        }

        self.history.push(record);
    }

    fn evaluate(&self, record: &SubmissionRecord) -> Verdict {
        for base in &self.base {
            if is_match(&record.tokens, &base.tokens, &self.thresholds) {
                return Verdict::BaseMatch {
                    base_id: base.submission.id,
                };
            }
        }

        for (idx, prior) in self.history.iter().enumerate() {
            if is_match(&record.tokens, &prior.tokens, &self.thresholds) {
                let colluding = record
                    .arrival
                    .separation(prior.arrival)
                    .is_some_and(|gap| gap < self.collusion_window);
                return Verdict::HistoryMatch {
                    prior: idx,
                    colluding,
                };
            }
        }

        let mut scan = PatchworkScan::new(&record.tokens, &self.thresholds);
        for prior in &self.history {
            if scan.absorb(&prior.tokens) {
                return Verdict::Patchwork;
            }
        }

        Verdict::Clean
    }

    #[cfg(test)]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }
}
