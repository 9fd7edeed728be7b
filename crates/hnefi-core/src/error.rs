//! Error types for board construction, parsing, and move requests.

use thiserror::Error;

use crate::square::Square;

/// Rejection reasons for an externally requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("the piece on {0} does not belong to the side to move")]
    WrongSide(Square),
    #[error("origin and destination are both {0}")]
    SamePosition(Square),
    #[error("destination {0} is occupied")]
    DestinationOccupied(Square),
    #[error("{from} to {to} is not a straight orthogonal line")]
    NotOrthogonal { from: Square, to: Square },
    #[error("path is blocked at {0}")]
    PathBlocked(Square),
    #[error("only the king may enter or cross {0}")]
    RestrictedSquare(Square),
}

/// Structural problems with a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("piece bitboards overlap on {0}")]
    OverlappingPieces(Square),
    #[error("occupancy bitboard is out of sync with the piece bitboards")]
    InconsistentOccupancy,
    #[error("board has {0} kings, at most one is allowed")]
    TooManyKings(u32),
    #[error("non-king piece on restricted square {0}")]
    PieceOnRestrictedSquare(Square),
}

/// Failures while parsing the FEN-style board text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected 2 fields (placement and side to move), found {0}")]
    WrongFieldCount(usize),
    #[error("expected 11 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("rank {rank} describes {width} files, expected 11")]
    BadRankWidth { rank: u8, width: u32 },
    #[error("invalid character {0:?} in piece placement")]
    InvalidPieceChar(char),
    #[error("invalid side to move {0:?}, expected \"a\" or \"d\"")]
    InvalidSide(String),
    #[error("position is structurally invalid: {0}")]
    InvalidBoard(#[from] BoardError),
}
