//! Material balance and central-zone occupation.

use hnefi_core::{Board, Square};

/// Value of one soldier.
pub const PIECE_VALUE: i32 = 35;

/// Weight per central square held, scaled by proximity to the throne.
const CENTER_WEIGHT: i32 = 8;

/// Chebyshev radius of the central zone around the throne.
const CENTER_RADIUS: u32 = 2;

/// Soldier-count difference, defender-positive. The king is not counted;
/// his life is priced by the terminal scores, not by material.
pub fn material(board: &Board) -> i32 {
    let defenders = board.defenders().count() as i32;
    let attackers = board.attackers().count() as i32;
    (defenders - attackers) * PIECE_VALUE
}

/// Occupation of the 5×5 zone around the throne, weighted by closeness.
/// Defenders and the king score positive, attackers negative.
pub fn center_control(board: &Board) -> i32 {
    let mut total = 0;
    for sq in Square::all() {
        let distance = sq.chebyshev(Square::THRONE);
        if distance > CENTER_RADIUS {
            continue;
        }
        let weight = (CENTER_RADIUS as i32 + 1 - distance as i32) * CENTER_WEIGHT;
        if board.attackers().contains(sq) {
            total -= weight;
        } else if board.is_occupied(sq) {
            total += weight;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::{PIECE_VALUE, center_control, material};
    use hnefi_core::Board;

    #[test]
    fn starting_material_favors_attackers() {
        let board = Board::starting_position();
        assert_eq!(material(&board), (8 - 24) * PIECE_VALUE);
    }

    #[test]
    fn starting_center_favors_defenders() {
        // The defender cross plus the king own the middle at game start.
        assert!(center_control(&Board::starting_position()) > 0);
    }

    #[test]
    fn attacker_in_the_zone_reduces_center_score() {
        let with_intruder: Board = "11/11/11/11/11/4ak5/11/11/11/11/11 d".parse().unwrap();
        let without: Board = "11/11/11/11/11/5k5/11/11/11/11/11 d".parse().unwrap();
        assert!(center_control(&with_intruder) < center_control(&without));
    }
}
