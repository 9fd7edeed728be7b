//! Compile-time zobrist keys for incremental position hashing.

use crate::board::Board;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::Square;

const SEED: u64 = 0x9e37_79b9_7f4a_7c15;

const fn xorshift64(mut state: u64) -> u64 {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    state
}

/// One key per (piece kind, square) pair.
pub(crate) static PIECE_SQUARE: [[u64; Square::COUNT]; Piece::COUNT] = {
    let mut keys = [[0u64; Square::COUNT]; Piece::COUNT];
    let mut state = SEED;
    let mut piece = 0;
    while piece < Piece::COUNT {
        let mut sq = 0;
        while sq < Square::COUNT {
            state = xorshift64(state);
            keys[piece][sq] = state;
            sq += 1;
        }
        piece += 1;
    }
    keys
};

/// Key xored in when the Defenders are to move.
pub(crate) static DEFENDERS_TO_MOVE: u64 = {
    let mut state = SEED;
    let mut i = 0;
    while i < Piece::COUNT * Square::COUNT + 1 {
        state = xorshift64(state);
        i += 1;
    }
    state
};

/// Recompute the hash of a board from nothing. Incremental updates in
/// move application must always agree with this.
pub(crate) fn hash_from_scratch(board: &Board) -> u64 {
    let mut hash = 0u64;
    for sq in Square::all() {
        if let Some(piece) = board.piece_on(sq) {
            hash ^= PIECE_SQUARE[piece.index()][sq.index()];
        }
    }
    if board.side_to_move() == Side::Defenders {
        hash ^= DEFENDERS_TO_MOVE;
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::{DEFENDERS_TO_MOVE, PIECE_SQUARE};
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for table in &PIECE_SQUARE {
            for &key in table {
                assert!(seen.insert(key), "duplicate zobrist key {key:#x}");
            }
        }
        assert!(seen.insert(DEFENDERS_TO_MOVE));
    }

    #[test]
    fn keys_are_nonzero() {
        for table in &PIECE_SQUARE {
            for &key in table {
                assert_ne!(key, 0);
            }
        }
        assert_ne!(DEFENDERS_TO_MOVE, 0);
    }
}
