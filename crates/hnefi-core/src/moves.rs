use std::fmt;

use crate::square::Square;

/// A move, bit-packed into a `u16`: bits 0-6 hold the origin square index,
/// bits 7-13 the destination. `Move::NULL` (origin == destination == a1) is
/// never a legal move and serves as the absent-move sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Sentinel for "no move".
    pub const NULL: Move = Move(0);

    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move((from.index() as u16) | ((to.index() as u16) << 7))
    }

    #[inline]
    pub const fn source(self) -> Square {
        Square::from_index_unchecked((self.0 & 0x7f) as u8)
    }

    #[inline]
    pub const fn dest(self) -> Square {
        Square::from_index_unchecked(((self.0 >> 7) & 0x7f) as u8)
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "0000")
        } else {
            write!(f, "{}-{}", self.source(), self.dest())
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
