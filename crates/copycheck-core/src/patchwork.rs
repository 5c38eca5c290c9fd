// Patchwork (mosaic) detection: short-window matches pooled across many
// prior sequences.
//
// A submission stitched together from fragments of several sources can stay
// under the pairwise short-run threshold against every single prior. This
// scan pools the *distinct* matching window hashes across all priors seen so
// far and reports once the pooled count crosses its own threshold.

use std::collections::HashSet;

use crate::rolling::WindowHasher;
use crate::{MatchThresholds, Token};

/// Accumulating scan of one new sequence against a stream of priors.
#[derive(Debug)]
pub struct PatchworkScan {
    hasher: WindowHasher,
    new_hashes: HashSet<u64>,
    pooled: HashSet<u64>,
    required: usize,
}

impl PatchworkScan {
    /// Hashes the new sequence's short windows once up front; each prior is
    /// then absorbed with a single pass of its own.
    pub fn new(new_tokens: &[Token], thresholds: &MatchThresholds) -> Self {
        let hasher = WindowHasher::new(thresholds.short_window);
        let new_hashes = hasher.hash_set(new_tokens);
        Self {
            hasher,
            new_hashes,
            pooled: HashSet::new(),
            required: thresholds.patchwork_count,
        }
    }

    /// Folds one prior sequence into the pool. Returns `true` as soon as the
    /// pooled distinct-match count reaches the threshold; the same fragment
    /// found in two priors counts once.
    pub fn absorb(&mut self, prior_tokens: &[Token]) -> bool {
        if self.new_hashes.is_empty() {
            return false;
        }

        for hash in self.hasher.scan(prior_tokens) {
            if self.new_hashes.contains(&hash) {
                self.pooled.insert(hash);
                if self.pooled.len() >= self.required {
                    return true;
                }
            }
        }

        false
    }

    /// Distinct matching hashes pooled so far.
    pub fn pooled_count(&self) -> usize {
        self.pooled.len()
    }
}
