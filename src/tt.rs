//! Transposition table for caching search results.
//!
//! Keyed by the 64-bit position hash. A table lives for one search call;
//! nothing is shared between searches or threads. Equal hashes are treated
//! as equal positions.

use std::collections::HashMap;

use crate::board::Move;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    /// Score is the exact value
    Exact,
    /// Score is at least this value (the node failed high)
    LowerBound,
    /// Score is at most this value (the node failed low)
    UpperBound,
}

impl BoundType {
    /// Bound implied by a score searched with the window `(alpha, beta)`.
    #[must_use]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    pub best_move: Option<Move>,
}

impl TtEntry {
    /// The stored score, if it settles a node searched to `depth` with the
    /// window `(alpha, beta)`.
    #[must_use]
    pub fn cutoff(&self, depth: u32, alpha: i32, beta: i32) -> Option<i32> {
        if self.depth < depth {
            return None;
        }
        match self.bound {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    hits: u64,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a position, counting the hit.
    pub fn probe(&mut self, hash: u64) -> Option<TtEntry> {
        let entry = self.entries.get(&hash).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Remembered best move of a position, without counting a hit.
    #[must_use]
    pub fn best_move(&self, hash: u64) -> Option<Move> {
        self.entries.get(&hash).and_then(|e| e.best_move)
    }

    /// Store an entry. An existing entry is only replaced by one searched
    /// at least as deep.
    pub fn store(&mut self, hash: u64, entry: TtEntry) {
        match self.entries.get_mut(&hash) {
            Some(existing) if existing.depth > entry.depth => {}
            Some(existing) => *existing = entry,
            None => {
                self.entries.insert(hash, entry);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful probes so far
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }
}
