//! Move ordering: score bands plus a lazy selection-sort picker.

use hnefi_core::{Board, Move};

use super::heuristics::{HistoryTable, KillerTable};

/// Score bands. The hash move first, then captures by how much they take,
/// then killers, then quiets by history. History is clamped well below the
/// killer band so the bands never interleave.
const TT_MOVE_SCORE: i32 = 100_000;
const CAPTURE_BASE: i32 = 10_000;
const CAPTURE_PER_PIECE: i32 = 1_000;
const KILLER_SCORE: i32 = 9_000;

/// Yields moves best-first without sorting the whole list: each call
/// selects the highest-scored remaining move.
pub struct MovePicker {
    moves: Vec<Move>,
    scores: Vec<i32>,
    cursor: usize,
}

impl MovePicker {
    pub fn new(
        board: &Board,
        moves: Vec<Move>,
        tt_move: Move,
        killers: &KillerTable,
        history: &HistoryTable,
        ply: usize,
    ) -> MovePicker {
        let scores = moves
            .iter()
            .map(|&mv| score_move(board, mv, tt_move, killers, history, ply))
            .collect();
        MovePicker {
            moves,
            scores,
            cursor: 0,
        }
    }

    pub fn next(&mut self) -> Option<Move> {
        if self.cursor >= self.moves.len() {
            return None;
        }
        let mut best = self.cursor;
        for i in self.cursor + 1..self.moves.len() {
            if self.scores[i] > self.scores[best] {
                best = i;
            }
        }
        self.moves.swap(self.cursor, best);
        self.scores.swap(self.cursor, best);
        let mv = self.moves[self.cursor];
        self.cursor += 1;
        Some(mv)
    }
}

fn score_move(
    board: &Board,
    mv: Move,
    tt_move: Move,
    killers: &KillerTable,
    history: &HistoryTable,
    ply: usize,
) -> i32 {
    if mv == tt_move {
        return TT_MOVE_SCORE;
    }
    let captures = board.captures_for(mv).len() as i32;
    if captures > 0 {
        return CAPTURE_BASE + CAPTURE_PER_PIECE * captures;
    }
    if killers.is_killer(ply, mv) {
        return KILLER_SCORE;
    }
    match board.piece_on(mv.source()) {
        Some(piece) => history.score(piece, mv.dest()),
        None => 0,
    }
}
