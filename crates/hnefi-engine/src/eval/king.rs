//! King safety and escape-path evaluation.

use hnefi_core::{Bitboard, Board, ORTHOGONAL, Square};

/// Penalty per attacker orthogonally adjacent to the king.
const ATTACKER_ADJACENT: i32 = -60;

/// Bonus per shielding defender orthogonally adjacent to the king.
const DEFENDER_ADJACENT: i32 = 25;

/// Bonus for the king still sitting on the throne.
const KING_ON_THRONE: i32 = 20;

/// Base bonus for an open corner run, divided by distance.
const ESCAPE_OPEN: i32 = 120;

/// An escape quadrant with this many attackers or fewer counts as open.
const OPEN_QUADRANT_ATTACKERS: u32 = 2;

/// Defender-positive safety of the king's immediate surroundings.
pub fn king_safety(board: &Board) -> i32 {
    let Some(king) = board.king_square() else {
        // no king means the game is over; searched nodes catch this first
        return 0;
    };

    let mut score = 0;
    for (dr, dc) in ORTHOGONAL {
        let Some(neighbor) = king.offset(dr, dc) else {
            continue;
        };
        if board.attackers().contains(neighbor) {
            score += ATTACKER_ADJACENT;
        } else if board.defenders().contains(neighbor) {
            score += DEFENDER_ADJACENT;
        }
    }
    if king.is_throne() {
        score += KING_ON_THRONE;
    }
    score
}

/// Bonus for corners the king can plausibly run to: for each corner whose
/// bounding-box quadrant holds few attackers, score inversely with the
/// Manhattan distance.
pub fn escape_paths(board: &Board) -> i32 {
    let Some(king) = board.king_square() else {
        return 0;
    };

    let mut score = 0;
    for corner in Square::CORNERS {
        let quadrant = bounding_box(king, corner);
        let attackers = (board.attackers() & quadrant).count();
        if attackers <= OPEN_QUADRANT_ATTACKERS {
            let distance = king.manhattan(corner) as i32;
            score += ESCAPE_OPEN / (1 + distance);
        }
    }
    score
}

/// All squares in the axis-aligned rectangle spanned by two squares,
/// both corners included.
fn bounding_box(a: Square, b: Square) -> Bitboard {
    let (row_lo, row_hi) = (a.row().min(b.row()), a.row().max(b.row()));
    let (col_lo, col_hi) = (a.col().min(b.col()), a.col().max(b.col()));
    let mut bb = Bitboard::EMPTY;
    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if let Some(sq) = Square::from_coords(row, col) {
                bb = bb.with(sq);
            }
        }
    }
    bb
}

#[cfg(test)]
mod tests {
    use super::{bounding_box, escape_paths, king_safety};
    use hnefi_core::{Board, Square};

    #[test]
    fn bounding_box_spans_both_squares() {
        let bb = bounding_box(Square::THRONE, Square::CORNERS[0]);
        assert_eq!(bb.count(), 36);
        assert!(bb.contains(Square::THRONE));
        assert!(bb.contains(Square::CORNERS[0]));
    }

    #[test]
    fn adjacent_attackers_hurt() {
        let surrounded: Board = "11/11/11/11/11/4ak5/11/11/11/11/11 d".parse().unwrap();
        let free: Board = "11/11/11/11/11/5k5/11/11/11/11/11 d".parse().unwrap();
        assert!(king_safety(&surrounded) < king_safety(&free));
    }

    #[test]
    fn shielding_defenders_help() {
        let shielded: Board = "11/11/11/11/11/4dk5/11/11/11/11/11 d".parse().unwrap();
        let bare: Board = "11/11/11/11/11/5k5/11/11/11/11/11 d".parse().unwrap();
        assert!(king_safety(&shielded) > king_safety(&bare));
    }

    #[test]
    fn open_corners_reward_a_nearby_king() {
        // King one step from a corner on an empty board.
        let close: Board = "1k9/11/11/11/11/11/11/11/11/11/11 d".parse().unwrap();
        let far: Board = "11/11/11/11/11/5k5/11/11/11/11/11 d".parse().unwrap();
        assert!(escape_paths(&close) > escape_paths(&far));
    }

    #[test]
    fn crowded_quadrants_close_escapes() {
        let open: Board = "1k9/11/11/11/11/11/11/11/11/11/11 d".parse().unwrap();
        // A wall of attackers on rank 10 crowds the downward quadrants.
        let blocked: Board = "1k9/aaaaa6/11/11/11/11/11/11/11/11/11 d".parse().unwrap();
        assert!(escape_paths(&blocked) < escape_paths(&open));
    }
}
