// Pairwise two-tier similarity check between token sequences.
//
// Long tier: one verbatim run of `long_window` tokens is decisive.
// Short tier: `short_match_count` windows of `short_window` tokens must
// match before the comparison reports.

use crate::rolling::WindowHasher;
use crate::{MatchThresholds, Token};

/// Reports whether `new_tokens` duplicates enough of `old_tokens` to count
/// as copied work.
///
/// Membership is decided purely by window-hash collision; token equality is
/// not re-verified. That admits a small false-positive probability in
/// exchange for a single linear pass per tier.
pub fn is_match(new_tokens: &[Token], old_tokens: &[Token], thresholds: &MatchThresholds) -> bool {
    // Long tier: any single shared window ends the comparison.
    let long = WindowHasher::new(thresholds.long_window);
    let old_long = long.hash_set(old_tokens);
    if !old_long.is_empty() && long.scan(new_tokens).any(|hash| old_long.contains(&hash)) {
        return true;
    }

    // Short tier: count matching windows until the threshold is reached.
    let short = WindowHasher::new(thresholds.short_window);
    let old_short = short.hash_set(old_tokens);
    if old_short.is_empty() {
        return false;
    }

    let mut matches = 0usize;
    for hash in short.scan(new_tokens) {
        if old_short.contains(&hash) {
            matches += 1;
            if matches >= thresholds.short_match_count {
                return true;
            }
        }
    }

    false
}
