//! Per-game transposition table.
//!
//! One table per [`crate::controller::AiController`], accessed through
//! `&mut` — games never share search state, so no atomics are needed.

use hnefi_core::Move;

use super::negamax::WIN_THRESHOLD;

/// How the stored score relates to the true value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    None,
    /// Exact score from a full window search.
    Exact,
    /// Score is at least this (failed high).
    LowerBound,
    /// Score is at most this (failed low).
    UpperBound,
}

#[derive(Clone, Copy)]
struct Entry {
    key: u64,
    mv: Move,
    score: i16,
    depth: u8,
    bound: Bound,
    generation: u8,
}

impl Entry {
    const EMPTY: Entry = Entry {
        key: 0,
        mv: Move::NULL,
        score: 0,
        depth: 0,
        bound: Bound::None,
        generation: 0,
    };
}

/// A successful probe.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub mv: Move,
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

pub struct TranspositionTable {
    entries: Vec<Entry>,
    mask: usize,
    generation: u8,
}

impl TranspositionTable {
    /// Default table size; entries, rounded up to a power of two.
    pub const DEFAULT_ENTRIES: usize = 1 << 18;

    pub fn new(requested_entries: usize) -> TranspositionTable {
        let capacity = requested_entries.next_power_of_two().max(1024);
        TranspositionTable {
            entries: vec![Entry::EMPTY; capacity],
            mask: capacity - 1,
            generation: 0,
        }
    }

    /// Forget everything, e.g. between games.
    pub fn clear(&mut self) {
        self.entries.fill(Entry::EMPTY);
        self.generation = 0;
    }

    /// Advance the generation counter; called once per search so stale
    /// entries become preferred replacement victims.
    pub fn new_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        key as usize & self.mask
    }

    /// Look up a position. `ply` rebases any win-distance score from
    /// root-relative to node-relative.
    pub fn probe(&self, key: u64, ply: i32) -> Option<Probe> {
        let entry = &self.entries[self.index(key)];
        if entry.bound == Bound::None || entry.key != key {
            return None;
        }
        Some(Probe {
            mv: entry.mv,
            score: score_from_tt(entry.score as i32, ply),
            depth: entry.depth,
            bound: entry.bound,
        })
    }

    /// Store a search result. Replacement: empty slots, entries from
    /// earlier searches, and shallower-or-equal entries give way; exact
    /// bounds also displace inexact ones of the same depth class.
    pub fn store(&mut self, key: u64, mv: Move, score: i32, depth: u8, bound: Bound, ply: i32) {
        let generation = self.generation;
        let index = self.index(key);
        let entry = &mut self.entries[index];

        let replace = entry.bound == Bound::None
            || entry.generation != generation
            || depth >= entry.depth
            || bound == Bound::Exact;
        if !replace {
            return;
        }

        // keep a known best move if the new result has none
        let stored_mv = if mv.is_null() && entry.key == key {
            entry.mv
        } else {
            mv
        };

        *entry = Entry {
            key,
            mv: stored_mv,
            score: score_to_tt(score, ply) as i16,
            depth,
            bound,
            generation,
        };
    }
}

impl Default for TranspositionTable {
    fn default() -> TranspositionTable {
        TranspositionTable::new(TranspositionTable::DEFAULT_ENTRIES)
    }
}

/// Convert a node-relative score to the ply-independent form stored in
/// the table: win scores become distance-from-this-node.
fn score_to_tt(score: i32, ply: i32) -> i32 {
    if score > WIN_THRESHOLD {
        score + ply
    } else if score < -WIN_THRESHOLD {
        score - ply
    } else {
        score
    }
}

/// Inverse of [`score_to_tt`] at probe time.
fn score_from_tt(score: i32, ply: i32) -> i32 {
    if score > WIN_THRESHOLD {
        score - ply
    } else if score < -WIN_THRESHOLD {
        score + ply
    } else {
        score
    }
}
