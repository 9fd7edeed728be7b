//! Killer-move and history-move ordering heuristics.

use hnefi_core::{Move, Piece, Square};

use super::negamax::MAX_PLY;

/// Two quiet beta-cutoff moves remembered per ply.
pub struct KillerTable {
    slots: [[Move; 2]; MAX_PLY],
}

impl KillerTable {
    pub fn new() -> KillerTable {
        KillerTable {
            slots: [[Move::NULL; 2]; MAX_PLY],
        }
    }

    /// Record a quiet move that caused a beta cutoff. The previous first
    /// killer shifts into the second slot.
    pub fn store(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY || self.slots[ply][0] == mv {
            return;
        }
        self.slots[ply][1] = self.slots[ply][0];
        self.slots[ply][0] = mv;
    }

    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        ply < MAX_PLY && (self.slots[ply][0] == mv || self.slots[ply][1] == mv)
    }
}

impl Default for KillerTable {
    fn default() -> KillerTable {
        KillerTable::new()
    }
}

/// Quiet-move success statistics indexed by (piece kind, destination).
pub struct HistoryTable {
    scores: [[i32; Square::COUNT]; Piece::COUNT],
}

/// Clamp bound keeping history scores well below the capture band.
const HISTORY_MAX: i32 = 16_384;

impl HistoryTable {
    pub fn new() -> HistoryTable {
        HistoryTable {
            scores: [[0; Square::COUNT]; Piece::COUNT],
        }
    }

    #[inline]
    pub fn score(&self, piece: Piece, to: Square) -> i32 {
        self.scores[piece.index()][to.index()]
    }

    /// Reward a quiet move that caused a beta cutoff at `depth`.
    pub fn update_good(&mut self, piece: Piece, to: Square, depth: u8) {
        let bonus = (depth as i32) * (depth as i32);
        let entry = &mut self.scores[piece.index()][to.index()];
        *entry = (*entry + bonus).min(HISTORY_MAX);
    }

    /// Penalize a quiet move that was searched before the cutoff move.
    pub fn update_bad(&mut self, piece: Piece, to: Square, depth: u8) {
        let malus = (depth as i32) * (depth as i32);
        let entry = &mut self.scores[piece.index()][to.index()];
        *entry = (*entry - malus).max(-HISTORY_MAX);
    }
}

impl Default for HistoryTable {
    fn default() -> HistoryTable {
        HistoryTable::new()
    }
}
