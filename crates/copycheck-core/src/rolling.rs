// Rolling polynomial window hashes over token sequences.
//
// Base-31 polynomial hash in wrapping u64 arithmetic. Each shift of the
// window reuses the previous value instead of rehashing from scratch, so
// hashing every window of a sequence is linear in its length.

use std::collections::HashSet;

use crate::Token;

const BASE: u64 = 31;

/// Hashes every fixed-length window of a token sequence.
#[derive(Debug, Clone, Copy)]
pub struct WindowHasher {
    len: usize,
    // BASE^(len-1), the weight of the outgoing token on each shift.
    scale: u64,
}

impl WindowHasher {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "window length must be positive");
        let mut scale = 1u64;
        for _ in 1..len {
            scale = scale.wrapping_mul(BASE);
        }
        Self { len, scale }
    }

    pub fn window_len(&self) -> usize {
        self.len
    }

    /// Iterator over the hash of each window, front to back.
    ///
    /// Empty when the sequence is shorter than the window.
    pub fn scan<'a>(&self, tokens: &'a [Token]) -> WindowHashes<'a> {
        WindowHashes {
            tokens,
            len: self.len,
            scale: self.scale,
            pos: 0,
            hash: 0,
        }
    }

    /// Collects the hashes of all windows into a lookup set.
    pub fn hash_set(&self, tokens: &[Token]) -> HashSet<u64> {
        self.scan(tokens).collect()
    }
}

/// See [`WindowHasher::scan`].
#[derive(Debug)]
pub struct WindowHashes<'a> {
    tokens: &'a [Token],
    len: usize,
    scale: u64,
    pos: usize,
    hash: u64,
}

impl Iterator for WindowHashes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.pos + self.len > self.tokens.len() {
            return None;
        }

        if self.pos == 0 {
            let mut hash = 0u64;
            for &token in &self.tokens[..self.len] {
                hash = hash.wrapping_mul(BASE).wrapping_add(token as u64);
            }
            self.hash = hash;
        } else {
            let outgoing = self.tokens[self.pos - 1] as u64;
            let incoming = self.tokens[self.pos + self.len - 1] as u64;
            self.hash = self
                .hash
                .wrapping_sub(outgoing.wrapping_mul(self.scale))
                .wrapping_mul(BASE)
                .wrapping_add(incoming);
        }

        self.pos += 1;
        Some(self.hash)
    }
}
