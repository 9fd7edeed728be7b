//! Terminal-state detection: king capture and king escape.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::side::Side;
use crate::square::{ORTHOGONAL, Square};

/// How a finished game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinCondition {
    KingCaptured,
    KingEscaped,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub condition: WinCondition,
}

impl Board {
    /// Decide whether the position is terminal.
    ///
    /// Checked after every applied move; `None` means play continues.
    /// King capture needs four hostile orthogonal sides in the open field,
    /// where an attacker, the board edge, and the empty throne or a corner
    /// all count as hostile. On the throne all four neighbors must be
    /// attackers; beside the throne, the three open neighbors must be
    /// attackers while the throne stands empty.
    pub fn outcome(&self) -> Option<Outcome> {
        let Some(king) = self.king_square() else {
            return Some(Outcome {
                winner: Side::Attackers,
                condition: WinCondition::KingCaptured,
            });
        };

        if king.is_corner() {
            return Some(Outcome {
                winner: Side::Defenders,
                condition: WinCondition::KingEscaped,
            });
        }

        let captured = if king.is_throne() {
            self.throne_fully_encircled(king)
        } else if king.manhattan(Square::THRONE) == 1 {
            self.beside_throne_encircled(king)
        } else {
            self.open_field_surrounded(king)
        };

        captured.then_some(Outcome {
            winner: Side::Attackers,
            condition: WinCondition::KingCaptured,
        })
    }

    /// King on the throne: captured only with attackers on all four sides.
    fn throne_fully_encircled(&self, king: Square) -> bool {
        ORTHOGONAL.iter().all(|&(dr, dc)| {
            king.offset(dr, dc)
                .is_some_and(|n| self.attackers().contains(n))
        })
    }

    /// King adjacent to the throne: the throne must be empty and the three
    /// remaining neighbors all attackers.
    fn beside_throne_encircled(&self, king: Square) -> bool {
        if self.is_occupied(Square::THRONE) {
            return false;
        }
        ORTHOGONAL.iter().all(|&(dr, dc)| {
            match king.offset(dr, dc) {
                Some(n) if n.is_throne() => true,
                Some(n) => self.attackers().contains(n),
                // adjacent-to-throne squares never touch the edge
                None => false,
            }
        })
    }

    /// King anywhere else: every direction must be hostile — an attacker,
    /// the board edge, or an empty restricted square.
    fn open_field_surrounded(&self, king: Square) -> bool {
        ORTHOGONAL.iter().all(|&(dr, dc)| match king.offset(dr, dc) {
            None => true,
            Some(n) => {
                self.attackers().contains(n) || (n.is_restricted() && !self.is_occupied(n))
            }
        })
    }
}
