//! Board state: piece bitboards, side to move, and the zobrist hash.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::{BOARD_SIZE, Square};
use crate::zobrist;

/// Starting squares (row, col) of the 24 attackers: a T-shape on each edge.
const ATTACKER_START: [(u8, u8); 24] = [
    (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 5),
    (10, 3), (10, 4), (10, 5), (10, 6), (10, 7), (9, 5),
    (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (5, 1),
    (3, 10), (4, 10), (5, 10), (6, 10), (7, 10), (5, 9),
];

/// Starting squares of the 8 defenders: a cross around the throne.
const DEFENDER_START: [(u8, u8); 8] = [
    (3, 5), (4, 5), (6, 5), (7, 5), (5, 3), (5, 4), (5, 6), (5, 7),
];

/// A full position. `Copy`, so move application builds a child board and
/// leaves the parent untouched.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    attackers: Bitboard,
    defenders: Bitboard,
    king: Bitboard,
    occupied: Bitboard,
    side_to_move: Side,
    hash: u64,
}

impl Board {
    /// The canonical Copenhagen starting position: 24 attackers on the
    /// edges, 8 defenders around the king on the throne, Attackers to move.
    pub fn starting_position() -> Board {
        let mut attackers = Bitboard::EMPTY;
        for (row, col) in ATTACKER_START {
            if let Some(sq) = Square::from_coords(row, col) {
                attackers = attackers.with(sq);
            }
        }
        let mut defenders = Bitboard::EMPTY;
        for (row, col) in DEFENDER_START {
            if let Some(sq) = Square::from_coords(row, col) {
                defenders = defenders.with(sq);
            }
        }
        let king = Bitboard::EMPTY.with(Square::THRONE);

        let mut board = Board {
            attackers,
            defenders,
            king,
            occupied: attackers | defenders | king,
            side_to_move: Side::Attackers,
            hash: 0,
        };
        board.hash = zobrist::hash_from_scratch(&board);
        board
    }

    /// Assemble a board from raw bitboards without validation. The caller
    /// is expected to run [`Board::validate`] afterwards.
    pub(crate) fn from_raw(
        attackers: Bitboard,
        defenders: Bitboard,
        king: Bitboard,
        side_to_move: Side,
    ) -> Board {
        let mut board = Board {
            attackers,
            defenders,
            king,
            occupied: attackers | defenders | king,
            side_to_move,
            hash: 0,
        };
        board.hash = zobrist::hash_from_scratch(&board);
        board
    }

    #[inline]
    pub const fn attackers(&self) -> Bitboard {
        self.attackers
    }

    #[inline]
    pub const fn defenders(&self) -> Bitboard {
        self.defenders
    }

    #[inline]
    pub const fn king(&self) -> Bitboard {
        self.king
    }

    /// All pieces of one side; the king counts as a defender.
    #[inline]
    pub fn side(&self, side: Side) -> Bitboard {
        match side {
            Side::Attackers => self.attackers,
            Side::Defenders => self.defenders | self.king,
        }
    }

    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        self.occupied
    }

    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        if !self.occupied.contains(sq) {
            None
        } else if self.attackers.contains(sq) {
            Some(Piece::Attacker)
        } else if self.defenders.contains(sq) {
            Some(Piece::Defender)
        } else {
            Some(Piece::King)
        }
    }

    /// The king's square, or `None` once he has been captured.
    #[inline]
    pub fn king_square(&self) -> Option<Square> {
        self.king.lsb()
    }

    #[inline]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub const fn hash(&self) -> u64 {
        self.hash
    }

    /// Add or remove a piece on a square, keeping the occupancy cache in
    /// sync. Hash maintenance is the caller's job.
    pub(crate) fn toggle(&mut self, piece: Piece, sq: Square) {
        let bit = sq.bitboard();
        match piece {
            Piece::Attacker => self.attackers ^= bit,
            Piece::Defender => self.defenders ^= bit,
            Piece::King => self.king ^= bit,
        }
        self.occupied ^= bit;
    }

    pub(crate) fn xor_hash(&mut self, key: u64) {
        self.hash ^= key;
    }

    pub(crate) fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.flip();
    }

    /// Check the structural invariants: disjoint bitboards, consistent
    /// occupancy, at most one king, restricted squares held only by the king.
    pub fn validate(&self) -> Result<(), BoardError> {
        let overlap =
            (self.attackers & self.defenders) | (self.attackers & self.king) | (self.defenders & self.king);
        if let Some(sq) = overlap.lsb() {
            return Err(BoardError::OverlappingPieces(sq));
        }
        if self.occupied != (self.attackers | self.defenders | self.king) {
            return Err(BoardError::InconsistentOccupancy);
        }
        if self.king.count() > 1 {
            return Err(BoardError::TooManyKings(self.king.count()));
        }
        let soldiers_on_restricted = (self.attackers | self.defenders) & Bitboard::RESTRICTED;
        if let Some(sq) = soldiers_on_restricted.lsb() {
            return Err(BoardError::PieceOnRestrictedSquare(sq));
        }
        Ok(())
    }

    /// Wrap the board for human-readable grid printing.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display is the text serialization, implemented in the fen module.
        write!(f, "Board(\"{}\")", self)
    }
}

/// Renders ranks 11 down to 1 with file letters, `.` for empty squares,
/// `+` for the empty throne, and `x` for empty corners.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..BOARD_SIZE {
                let sq = match Square::from_coords(row, col) {
                    Some(sq) => sq,
                    None => continue,
                };
                let c = match self.0.piece_on(sq) {
                    Some(piece) => piece.glyph(),
                    None if sq.is_throne() => '+',
                    None if sq.is_corner() => 'x',
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h i j k")?;
        writeln!(f)?;
        write!(f, "   {} to move", self.0.side_to_move())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::bitboard::Bitboard;
    use crate::piece::Piece;
    use crate::side::Side;
    use crate::square::Square;
    use crate::zobrist;

    #[test]
    fn starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(board.attackers().count(), 24);
        assert_eq!(board.defenders().count(), 8);
        assert_eq!(board.king().count(), 1);
        assert_eq!(board.occupied().count(), 33);
        assert_eq!(board.side_to_move(), Side::Attackers);
        assert_eq!(board.king_square(), Some(Square::THRONE));
    }

    #[test]
    fn starting_position_is_valid() {
        assert!(Board::starting_position().validate().is_ok());
    }

    #[test]
    fn starting_position_hash_matches_scratch() {
        let board = Board::starting_position();
        assert_eq!(board.hash(), zobrist::hash_from_scratch(&board));
        assert_ne!(board.hash(), 0);
    }

    #[test]
    fn piece_lookup() {
        let board = Board::starting_position();
        assert_eq!(board.piece_on(Square::THRONE), Some(Piece::King));
        assert_eq!(
            board.piece_on(Square::from_algebraic("f5").unwrap()),
            Some(Piece::Defender)
        );
        assert_eq!(
            board.piece_on(Square::from_algebraic("d1").unwrap()),
            Some(Piece::Attacker)
        );
        assert_eq!(board.piece_on(Square::from_algebraic("b2").unwrap()), None);
    }

    #[test]
    fn side_bitboards_include_king() {
        let board = Board::starting_position();
        assert_eq!(board.side(Side::Defenders).count(), 9);
        assert_eq!(board.side(Side::Attackers).count(), 24);
        assert!(board.side(Side::Defenders).contains(Square::THRONE));
    }

    #[test]
    fn validate_rejects_soldier_on_corner() {
        let corner = Square::CORNERS[0];
        let board = Board::from_raw(
            Bitboard::EMPTY.with(corner),
            Bitboard::EMPTY,
            Bitboard::EMPTY.with(Square::THRONE),
            Side::Attackers,
        );
        assert!(board.validate().is_err());
    }

    #[test]
    fn validate_rejects_overlap() {
        let sq = Square::from_algebraic("c3").unwrap();
        let board = Board::from_raw(
            Bitboard::EMPTY.with(sq),
            Bitboard::EMPTY.with(sq),
            Bitboard::EMPTY,
            Side::Attackers,
        );
        assert!(board.validate().is_err());
    }

    #[test]
    fn pretty_print_contains_king() {
        let rendered = format!("{}", Board::starting_position().pretty());
        assert!(rendered.contains('k'));
        assert!(rendered.contains("attackers to move"));
    }
}
