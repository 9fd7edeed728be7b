//! Copy-make move application and the sandwich capture rule.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::error::MoveError;
use crate::movegen::check_move;
use crate::moves::Move;
use crate::piece::Piece;
use crate::square::{ORTHOGONAL, Square};
use crate::zobrist;

/// The full record of an applied move, handed back to callers that need to
/// animate, log, or persist what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    /// Squares whose pieces were removed by this move.
    pub captured: Vec<Square>,
    pub timestamp: SystemTime,
}

impl Board {
    /// Squares captured by the piece that just landed on `landed`.
    ///
    /// Sandwich rule: an enemy soldier orthogonally adjacent to the landed
    /// piece is captured when the square directly beyond it is off-board,
    /// held by the mover's side, or is the throne or a corner (occupied or
    /// not). The king is never captured this way; his fate is decided by
    /// [`Board::outcome`].
    pub fn captures_from(&self, landed: Square) -> Vec<Square> {
        let Some(mover) = self.piece_on(landed) else {
            return Vec::new();
        };
        let mover_side = mover.owner();

        let mut captured = Vec::new();
        for (dr, dc) in ORTHOGONAL {
            let Some(adjacent) = landed.offset(dr, dc) else {
                continue;
            };
            match self.piece_on(adjacent) {
                Some(piece) if piece != Piece::King && piece.owner() != mover_side => {}
                _ => continue,
            }

            let hostile_beyond = match adjacent.offset(dr, dc) {
                None => true,
                Some(beyond) => {
                    beyond.is_restricted()
                        || self
                            .piece_on(beyond)
                            .is_some_and(|p| p.owner() == mover_side)
                }
            };
            if hostile_beyond {
                captured.push(adjacent);
            }
        }
        captured
    }

    /// Captures that the given move would produce, without committing it.
    pub fn captures_for(&self, mv: Move) -> Vec<Square> {
        let Some(piece) = self.piece_on(mv.source()) else {
            return Vec::new();
        };
        let mut shifted = *self;
        shifted.toggle(piece, mv.source());
        shifted.toggle(piece, mv.dest());
        shifted.captures_from(mv.dest())
    }

    /// Apply a move assumed legal and return the child position. The
    /// receiver is untouched; the zobrist hash is updated incrementally.
    pub fn make_move(&self, mv: Move) -> Board {
        self.apply(mv.source(), mv.dest()).0
    }

    /// Validate an externally requested move, then apply it.
    ///
    /// This is the surface for human moves: any rule violation comes back
    /// as a [`MoveError`] and the board is unchanged. On success the child
    /// board and a [`PlayedMove`] record are returned.
    pub fn try_move(&self, from: Square, to: Square) -> Result<(Board, PlayedMove), MoveError> {
        if self.outcome().is_some() {
            return Err(MoveError::GameOver);
        }
        check_move(self, from, to)?;

        let piece = self.piece_on(from).ok_or(MoveError::EmptySquare(from))?;
        let (next, captured) = self.apply(from, to);
        debug!(%from, %to, %piece, captures = captured.len(), "move applied");

        let record = PlayedMove {
            from,
            to,
            piece,
            captured,
            timestamp: SystemTime::now(),
        };
        Ok((next, record))
    }

    fn apply(&self, from: Square, to: Square) -> (Board, Vec<Square>) {
        let mut next = *self;
        let Some(piece) = self.piece_on(from) else {
            return (next, Vec::new());
        };

        next.toggle(piece, from);
        next.toggle(piece, to);
        next.xor_hash(zobrist::PIECE_SQUARE[piece.index()][from.index()]);
        next.xor_hash(zobrist::PIECE_SQUARE[piece.index()][to.index()]);

        let captured = next.captures_from(to);
        for &sq in &captured {
            if let Some(victim) = next.piece_on(sq) {
                next.toggle(victim, sq);
                next.xor_hash(zobrist::PIECE_SQUARE[victim.index()][sq.index()]);
            }
        }

        next.flip_side_to_move();
        next.xor_hash(zobrist::DEFENDERS_TO_MOVE);
        (next, captured)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::error::MoveError;
    use crate::moves::Move;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;
    use crate::zobrist;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn make_move_leaves_parent_untouched() {
        let board = Board::starting_position();
        let snapshot = board;
        let mv = Move::new(sq("d1"), sq("d3"));
        let child = board.make_move(mv);
        assert_eq!(board, snapshot);
        assert_ne!(child, board);
        assert_eq!(child.side_to_move(), Side::Defenders);
    }

    #[test]
    fn incremental_hash_matches_scratch() {
        let mut board = Board::starting_position();
        let line = [("d1", "d3"), ("f5", "e5"), ("e1", "e4")];
        for (from, to) in line {
            let (next, _) = board.try_move(sq(from), sq(to)).unwrap();
            assert_eq!(next.hash(), zobrist::hash_from_scratch(&next));
            board = next;
        }
    }

    #[test]
    fn simple_sandwich_capture() {
        // Defender on d3 pinched between attackers on c3 and e3.
        let board: Board = "11/11/11/11/11/11/11/11/2ada6/11/5k5 a".parse().unwrap();
        assert_eq!(board.captures_from(sq("c3")), vec![sq("d3")]);
    }

    #[test]
    fn capture_applies_on_landing() {
        // Attacker on c9 slides down to c3, pinching the defender on d3
        // against the attacker on e3.
        let board: Board = "11/11/2a8/11/11/11/11/11/3da6/11/5k5 a".parse().unwrap();
        let (next, record) = board.try_move(sq("c9"), sq("c3")).unwrap();
        assert_eq!(record.captured, vec![sq("d3")]);
        assert!(next.piece_on(sq("d3")).is_none());
        assert_eq!(record.piece, Piece::Attacker);
        assert_eq!(next.hash(), zobrist::hash_from_scratch(&next));
    }

    #[test]
    fn landing_without_support_does_not_capture() {
        // Attacker lands on d4 next to the defender on d3, but the square
        // beyond (d2) is empty.
        let board: Board = "11/11/3a7/11/11/11/11/11/3da6/11/5k5 a".parse().unwrap();
        let (_, record) = board.try_move(sq("d9"), sq("d4")).unwrap();
        assert!(record.captured.is_empty());
    }

    #[test]
    fn board_edge_pins() {
        // Defender on a5 with an attacker on b5: beyond is off the board.
        let board: Board = "11/11/11/11/11/11/da9/11/11/11/5k5 a".parse().unwrap();
        assert_eq!(board.captures_from(sq("b5")), vec![sq("a5")]);
    }

    #[test]
    fn empty_throne_is_hostile() {
        // Defender on e6 between the attacker on d6 and the empty throne.
        let board: Board = "11/11/11/11/11/3ad6/11/11/11/11/5k5 a".parse().unwrap();
        assert_eq!(board.captures_from(sq("d6")), vec![sq("e6")]);
    }

    #[test]
    fn corner_is_hostile() {
        // Attacker on b11 pinched between the defender on c11 and the
        // corner a11.
        let board: Board = "1ad8/11/11/11/11/11/11/11/11/11/5k5 d".parse().unwrap();
        assert_eq!(board.captures_from(sq("c11")), vec![sq("b11")]);
    }

    #[test]
    fn king_is_never_sandwich_captured() {
        let board: Board = "11/11/11/11/11/11/11/2aka6/11/11/11 a".parse().unwrap();
        assert!(board.captures_from(sq("c4")).is_empty());
        assert!(board.king_square().is_some());
    }

    #[test]
    fn king_participates_in_captures() {
        // The king counts as a defender-side piece when pinching.
        let board: Board = "11/11/11/11/11/11/11/2kad6/11/11/11 d".parse().unwrap();
        assert_eq!(board.captures_from(sq("c4")), vec![sq("d4")]);
    }

    #[test]
    fn double_capture() {
        // Defender on c6 pinches the attackers on c5 and c7 against the
        // defenders on c4 and c8 in one landing.
        let board: Board = "11/11/11/2d8/2a8/2d8/2a8/2d8/11/11/5k5 d".parse().unwrap();
        let mut caps = board.captures_from(sq("c6"));
        caps.sort_by_key(|s| s.index());
        assert_eq!(caps, vec![sq("c5"), sq("c7")]);
    }

    #[test]
    fn captures_for_previews_without_committing() {
        let board: Board = "11/11/2a8/11/11/11/11/11/3da6/11/5k5 a".parse().unwrap();
        let snapshot = board;
        let caps = board.captures_for(Move::new(sq("c9"), sq("c3")));
        assert_eq!(caps, vec![sq("d3")]);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn try_move_rejects_after_game_over() {
        // King already escaped to a corner.
        let board: Board = "k10/11/11/11/11/11/11/11/11/11/3a7 a".parse().unwrap();
        assert_eq!(
            board.try_move(sq("d1"), sq("d2")),
            Err(MoveError::GameOver)
        );
    }
}
