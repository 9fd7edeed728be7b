//! Mobility: legal-move-count difference between the sides.

use hnefi_core::{Board, Side, generate_moves_for};

const MOBILITY_WEIGHT: i32 = 2;

/// Defender-positive move-count difference, independent of whose turn it is.
pub fn mobility(board: &Board) -> i32 {
    let defenders = generate_moves_for(board, Side::Defenders).len() as i32;
    let attackers = generate_moves_for(board, Side::Attackers).len() as i32;
    (defenders - attackers) * MOBILITY_WEIGHT
}
