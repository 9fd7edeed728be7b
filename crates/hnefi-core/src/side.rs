use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// The two players. Attackers move first and win by capturing the king;
/// Defenders win by walking the king to a corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attackers = 0,
    Defenders = 1,
}

impl Side {
    pub const COUNT: usize = 2;
    pub const ALL: [Side; Side::COUNT] = [Side::Attackers, Side::Defenders];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Attackers => Side::Defenders,
            Side::Defenders => Side::Attackers,
        }
    }
}

impl Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.flip()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attackers => write!(f, "attackers"),
            Side::Defenders => write!(f, "defenders"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Side;

    #[test]
    fn flip_is_involutive() {
        for side in Side::ALL {
            assert_eq!(side.flip().flip(), side);
            assert_eq!(!side, side.flip());
        }
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(Side::Attackers.index(), 0);
        assert_eq!(Side::Defenders.index(), 1);
    }
}
