// Synthetic token-stream generators for the similarity benches.
//
// A simple LCG keeps the streams deterministic without pulling in an RNG
// dependency; token codes stay in a small range so hash sets see realistic
// repetition.

use copycheck::Token;

#[derive(Debug, Clone, Copy)]
pub enum WorkloadSize {
    Small,
    Medium,
    Large,
}

impl WorkloadSize {
    pub fn token_count(self) -> usize {
        match self {
            WorkloadSize::Small => 500,
            WorkloadSize::Medium => 5_000,
            WorkloadSize::Large => 50_000,
        }
    }
}

pub fn token_stream(seed: u64, size: WorkloadSize) -> Vec<Token> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (0..size.token_count())
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 512) as Token
        })
        .collect()
}

/// A copy of `original` with a verbatim run of `run_len` tokens surviving in
/// the middle of fresh noise.
pub fn partial_copy(original: &[Token], run_len: usize, seed: u64) -> Vec<Token> {
    let mut copied = token_stream(seed, WorkloadSize::Small);
    let start = original.len() / 3;
    copied.extend_from_slice(&original[start..start + run_len]);
    copied.extend(token_stream(seed + 1, WorkloadSize::Small));
    copied
}
