// copycheck-core - Pure token-sequence similarity logic
//
// This crate contains the PURE detection algorithms for comparing tokenized
// code submissions. No threads, no I/O, no runtime dependencies: token
// sequences in, verdicts out, deterministic for the same input.

pub mod patchwork;
pub mod rolling;
pub mod similarity;

pub use patchwork::PatchworkScan;
pub use rolling::WindowHasher;
pub use similarity::is_match;

/// Integer token code emitted by an external tokenizer, order-preserving.
pub type Token = i32;

/// Policy thresholds for the similarity tiers.
///
/// These are tuning knobs, not derived quantities; callers load them from
/// configuration rather than hard-coding them at comparison sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    /// Window length whose single verbatim match is decisive.
    pub long_window: usize,
    /// Window length for the accumulating short tier.
    pub short_window: usize,
    /// Short-window matches required before a pairwise comparison reports.
    pub short_match_count: usize,
    /// Distinct short-window matches, pooled across many priors, required
    /// before a patchwork scan reports.
    pub patchwork_count: usize,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            long_window: 75,
            short_window: 15,
            short_match_count: 10,
            patchwork_count: 20,
        }
    }
}
