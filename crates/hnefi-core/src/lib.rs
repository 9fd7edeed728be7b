//! Board model and rules engine for 11×11 Copenhagen-style hnefatafl.
//!
//! The crate is the single source of truth for legality: sliding
//! orthogonal movement, restricted throne/corner squares, sandwich
//! captures, king capture, and corner escape. Positions are small `Copy`
//! values built around `u128` bitboards; move application is copy-make, so
//! a search can fan out from one parent board without undo logic.

mod bitboard;
mod board;
mod error;
mod fen;
mod make_move;
mod movegen;
mod moves;
mod outcome;
mod piece;
mod side;
mod square;
mod zobrist;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{Board, PrettyBoard};
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use make_move::PlayedMove;
pub use movegen::{check_move, generate_legal_moves, generate_moves_for};
pub use moves::Move;
pub use outcome::{Outcome, WinCondition};
pub use piece::Piece;
pub use side::Side;
pub use square::{BOARD_SIZE, ORTHOGONAL, Square};
