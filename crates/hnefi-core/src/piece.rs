use std::fmt;

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// The three piece kinds. The king belongs to the defending side but has
/// its own movement and capture rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Attacker = 0,
    Defender = 1,
    King = 2,
}

impl Piece {
    pub const COUNT: usize = 3;
    pub const ALL: [Piece; Piece::COUNT] = [Piece::Attacker, Piece::Defender, Piece::King];

    /// Index for zobrist and history tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The side this piece fights for.
    #[inline]
    pub const fn owner(self) -> Side {
        match self {
            Piece::Attacker => Side::Attackers,
            Piece::Defender | Piece::King => Side::Defenders,
        }
    }

    /// Placement character used by the board text format.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Piece::Attacker => 'a',
            Piece::Defender => 'd',
            Piece::King => 'k',
        }
    }

    /// Inverse of [`Piece::glyph`].
    #[inline]
    pub const fn from_glyph(c: char) -> Option<Piece> {
        match c {
            'a' => Some(Piece::Attacker),
            'd' => Some(Piece::Defender),
            'k' => Some(Piece::King),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Attacker => write!(f, "attacker"),
            Piece::Defender => write!(f, "defender"),
            Piece::King => write!(f, "king"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::side::Side;

    #[test]
    fn owners() {
        assert_eq!(Piece::Attacker.owner(), Side::Attackers);
        assert_eq!(Piece::Defender.owner(), Side::Defenders);
        assert_eq!(Piece::King.owner(), Side::Defenders);
    }

    #[test]
    fn glyph_roundtrip() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_glyph(piece.glyph()), Some(piece));
        }
        assert_eq!(Piece::from_glyph('x'), None);
    }
}
