//! Text serialization of positions, shaped like chess FEN.
//!
//! Eleven `/`-separated ranks from rank 11 down to rank 1, runs of empty
//! squares as decimal numbers (up to `11`), pieces as `a`/`d`/`k`, then a
//! side-to-move field (`a` or `d`). Example: the starting position is
//! [`STARTING_FEN`].

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::{BOARD_SIZE, Square};

/// The canonical Copenhagen starting position.
pub const STARTING_FEN: &str =
    "3aaaaa3/5a5/11/a4d4a/a4d4a/aa1ddkdd1aa/a4d4a/a4d4a/11/5a5/3aaaaa3 a";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            let mut run = 0u32;
            for col in 0..BOARD_SIZE {
                let Some(sq) = Square::from_coords(row, col) else {
                    continue;
                };
                match self.piece_on(sq) {
                    Some(piece) => {
                        if run > 0 {
                            write!(f, "{run}")?;
                            run = 0;
                        }
                        write!(f, "{}", piece.glyph())?;
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                write!(f, "{run}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        let side = match self.side_to_move() {
            Side::Attackers => 'a',
            Side::Defenders => 'd',
        };
        write!(f, " {side}")
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(FenError::WrongFieldCount(fields.len()));
        }

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != BOARD_SIZE as usize {
            return Err(FenError::WrongRankCount(ranks.len()));
        }

        let mut attackers = Bitboard::EMPTY;
        let mut defenders = Bitboard::EMPTY;
        let mut king = Bitboard::EMPTY;

        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - 1 - i as u8;
            let rank_no = row + 1;
            let mut col = 0u32;
            let mut run = 0u32;
            for c in rank.chars() {
                if let Some(digit) = c.to_digit(10) {
                    run = run * 10 + digit;
                    // reject runaway counts before they overflow
                    if run > BOARD_SIZE as u32 {
                        return Err(FenError::BadRankWidth { rank: rank_no, width: col + run });
                    }
                    continue;
                }
                col += run;
                run = 0;
                let piece =
                    Piece::from_glyph(c).ok_or(FenError::InvalidPieceChar(c))?;
                let sq = Square::from_coords(row, col as u8)
                    .ok_or(FenError::BadRankWidth { rank: rank_no, width: col + 1 })?;
                match piece {
                    Piece::Attacker => attackers = attackers.with(sq),
                    Piece::Defender => defenders = defenders.with(sq),
                    Piece::King => king = king.with(sq),
                }
                col += 1;
            }
            col += run;
            if col != BOARD_SIZE as u32 {
                return Err(FenError::BadRankWidth { rank: rank_no, width: col });
            }
        }

        let side_to_move = match fields[1] {
            "a" => Side::Attackers,
            "d" => Side::Defenders,
            other => return Err(FenError::InvalidSide(other.to_string())),
        };

        let board = Board::from_raw(attackers, defenders, king, side_to_move);
        board.validate()?;
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Board, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
