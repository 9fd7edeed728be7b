//! Board squares for the 11×11 hnefatafl board, encoded row-major.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bitboard::Bitboard;

/// Number of ranks/files on the board.
pub const BOARD_SIZE: u8 = 11;

/// The four orthogonal step directions as (row, col) deltas.
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A square on the board, encoded as a `u8` index.
///
/// Index = row * 11 + col, with row 0 = rank 1 (bottom) and col 0 = file a.
/// So a1 = 0, k1 = 10, f6 = 60 (the throne), k11 = 120.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 121;

    /// The throne — the center square f6.
    pub const THRONE: Square = Square(60);

    /// The four corner squares, the king's escape destinations.
    pub const CORNERS: [Square; 4] = [Square(0), Square(10), Square(110), Square(120)];

    /// Create a square from a row and column, returning `None` if out of range.
    #[inline]
    pub const fn from_coords(row: u8, col: u8) -> Option<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row * BOARD_SIZE + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < Square::COUNT as u8 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 121`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < Square::COUNT as u8);
        Square(index)
    }

    /// Parse an algebraic notation string (e.g. "f6") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if !(2..=3).contains(&bytes.len()) {
            return None;
        }

        let file_byte = bytes[0];
        if !(b'a'..=b'k').contains(&file_byte) {
            return None;
        }
        let col = file_byte - b'a';

        let rank: u8 = s[1..].parse().ok()?;
        if !(1..=BOARD_SIZE).contains(&rank) {
            return None;
        }

        Square::from_coords(rank - 1, col)
    }

    /// Return the zero-based index (0..121).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (rank index, 0 = bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Return the column (file index, 0 = file a).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u128 << self.0)
    }

    /// Step by the given row/col deltas, returning `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square(row as u8 * BOARD_SIZE + col as u8))
        } else {
            None
        }
    }

    /// Return `true` if this is the throne square.
    #[inline]
    pub const fn is_throne(self) -> bool {
        self.0 == Square::THRONE.0
    }

    /// Return `true` if this is one of the four corner squares.
    #[inline]
    pub const fn is_corner(self) -> bool {
        matches!(self.0, 0 | 10 | 110 | 120)
    }

    /// Return `true` if only the king may occupy or cross this square.
    #[inline]
    pub const fn is_restricted(self) -> bool {
        self.is_throne() || self.is_corner()
    }

    /// Manhattan distance to another square.
    #[inline]
    pub fn manhattan(self, other: Square) -> u32 {
        let dr = (self.row() as i32 - other.row() as i32).unsigned_abs();
        let dc = (self.col() as i32 - other.col() as i32).unsigned_abs();
        dr + dc
    }

    /// Chebyshev (king-walk) distance to another square.
    #[inline]
    pub fn chebyshev(self, other: Square) -> u32 {
        let dr = (self.row() as i32 - other.row() as i32).unsigned_abs();
        let dc = (self.col() as i32 - other.col() as i32).unsigned_abs();
        dr.max(dc)
    }

    /// Iterate over all 121 squares in index order (a1, b1, ..., k11).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Square::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, self.row() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let index = u8::deserialize(deserializer)?;
        Square::from_index(index)
            .ok_or_else(|| D::Error::custom(format!("square index {index} out of range")))
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn coords_roundtrip() {
        for sq in Square::all() {
            let reconstructed = Square::from_coords(sq.row(), sq.col()).unwrap();
            assert_eq!(sq, reconstructed);
        }
    }

    #[test]
    fn from_index_bounds() {
        assert!(Square::from_index(0).is_some());
        assert!(Square::from_index(120).is_some());
        assert!(Square::from_index(121).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn from_coords_bounds() {
        assert!(Square::from_coords(0, 0).is_some());
        assert!(Square::from_coords(10, 10).is_some());
        assert!(Square::from_coords(11, 0).is_none());
        assert!(Square::from_coords(0, 11).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::CORNERS[0]));
        assert_eq!(Square::from_algebraic("f6"), Some(Square::THRONE));
        assert_eq!(Square::from_algebraic("k11"), Some(Square::CORNERS[3]));
        assert_eq!(format!("{}", Square::THRONE), "f6");
        assert_eq!(format!("{}", Square::CORNERS[3]), "k11");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("l1").is_none());
        assert!(Square::from_algebraic("a12").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("f").is_none());
    }

    #[test]
    fn throne_and_corners() {
        assert!(Square::THRONE.is_throne());
        assert!(!Square::THRONE.is_corner());
        for corner in Square::CORNERS {
            assert!(corner.is_corner());
            assert!(corner.is_restricted());
        }
        assert!(!Square::from_algebraic("b2").unwrap().is_restricted());
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::from_algebraic("a1").unwrap();
        assert!(a1.offset(-1, 0).is_none());
        assert!(a1.offset(0, -1).is_none());
        assert_eq!(a1.offset(1, 0), Square::from_algebraic("a2"));
        assert_eq!(a1.offset(0, 1), Square::from_algebraic("b1"));

        let k11 = Square::from_algebraic("k11").unwrap();
        assert!(k11.offset(1, 0).is_none());
        assert!(k11.offset(0, 1).is_none());
    }

    #[test]
    fn distances() {
        let a1 = Square::from_algebraic("a1").unwrap();
        let throne = Square::THRONE;
        assert_eq!(a1.manhattan(throne), 10);
        assert_eq!(a1.chebyshev(throne), 5);
        assert_eq!(throne.manhattan(throne), 0);
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 121);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: Result<Square, _> = serde_json::from_str("60");
        assert_eq!(ok.unwrap(), Square::THRONE);
        let bad: Result<Square, _> = serde_json::from_str("121");
        assert!(bad.is_err());
    }
}
