//! Move generation and the single move-validity oracle.

use crate::board::Board;
use crate::error::MoveError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::side::Side;
use crate::square::{ORTHOGONAL, Square};

/// Generate every legal move for the side to move.
///
/// Pure function of the board; the board is never mutated and the result
/// can be regenerated at will.
pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    generate_moves_for(board, board.side_to_move())
}

/// Generate every legal move for the given side, regardless of whose turn
/// it is. The mobility evaluation needs both sides from one position.
pub fn generate_moves_for(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(96);
    for from in board.side(side) {
        let is_king = board.piece_on(from) == Some(Piece::King);
        for (dr, dc) in ORTHOGONAL {
            let mut cursor = from;
            while let Some(next) = cursor.offset(dr, dc) {
                if board.is_occupied(next) {
                    break;
                }
                if !is_king && next.is_restricted() {
                    // soldiers may neither land on nor slide across it
                    break;
                }
                moves.push(Move::new(from, next));
                cursor = next;
            }
        }
    }
    moves
}

/// Validate a requested move against the current position.
///
/// Both generation and [`Board::try_move`] agree with this oracle: every
/// generated move passes, and every passing (from, to) pair is generated.
pub fn check_move(board: &Board, from: Square, to: Square) -> Result<(), MoveError> {
    if from == to {
        return Err(MoveError::SamePosition(from));
    }
    let piece = board.piece_on(from).ok_or(MoveError::EmptySquare(from))?;
    if piece.owner() != board.side_to_move() {
        return Err(MoveError::WrongSide(from));
    }
    if board.is_occupied(to) {
        return Err(MoveError::DestinationOccupied(to));
    }

    let (dr, dc) = if from.row() == to.row() {
        (0i8, if to.col() > from.col() { 1i8 } else { -1i8 })
    } else if from.col() == to.col() {
        (if to.row() > from.row() { 1i8 } else { -1i8 }, 0i8)
    } else {
        return Err(MoveError::NotOrthogonal { from, to });
    };

    let mut cursor = from;
    loop {
        let Some(next) = cursor.offset(dr, dc) else {
            // unreachable for a validated orthogonal pair, but stay total
            return Err(MoveError::NotOrthogonal { from, to });
        };
        if board.is_occupied(next) {
            return Err(MoveError::PathBlocked(next));
        }
        if piece != Piece::King && next.is_restricted() {
            return Err(MoveError::RestrictedSquare(next));
        }
        if next == to {
            return Ok(());
        }
        cursor = next;
    }
}
