//! The negamax alpha-beta tree walk.

use hnefi_core::{Board, Move, Side, generate_legal_moves};

use super::control::SearchControl;
use super::heuristics::{HistoryTable, KillerTable};
use super::ordering::MovePicker;
use super::tt::{Bound, TranspositionTable};
use crate::eval::Eval;

/// Window bound; no real score ever reaches it.
pub const INF: i32 = 30_000;

/// Score of a win at the root; wins deeper in the tree score lower by
/// their ply so the search prefers the shortest forced win.
pub const WIN_SCORE: i32 = 29_000;

/// Scores beyond this magnitude are forced wins, above every heuristic
/// evaluation.
pub const WIN_THRESHOLD: i32 = 28_000;

/// Maximum search depth the tables are sized for.
pub const MAX_PLY: usize = 64;

/// Mutable state threaded through one search.
pub(super) struct SearchContext<'a, 'r> {
    pub nodes: u64,
    pub tt: &'a mut TranspositionTable,
    pub control: &'a SearchControl,
    pub killers: KillerTable,
    pub history: HistoryTable,
    pub eval: &'a mut Eval<'r>,
    /// Best root move of the iteration in progress.
    pub root_best: Move,
}

/// Alpha-beta negamax. Scores are from the side to move's point of view.
/// Returns 0 on abort; the iterative-deepening driver discards the
/// aborted iteration.
pub(super) fn negamax(
    board: &Board,
    depth: u8,
    ply: i32,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_, '_>,
) -> i32 {
    ctx.nodes += 1;
    if ctx.control.should_stop(ctx.nodes) {
        return 0;
    }

    if let Some(outcome) = board.outcome() {
        return if outcome.winner == board.side_to_move() {
            WIN_SCORE - ply
        } else {
            -(WIN_SCORE - ply)
        };
    }

    if depth == 0 || ply as usize >= MAX_PLY {
        return side_relative(ctx.eval.score(board), board.side_to_move());
    }

    let mut tt_move = Move::NULL;
    if let Some(probe) = ctx.tt.probe(board.hash(), ply) {
        tt_move = probe.mv;
        if ply > 0 && probe.depth >= depth {
            match probe.bound {
                Bound::Exact => return probe.score,
                Bound::LowerBound if probe.score >= beta => return probe.score,
                Bound::UpperBound if probe.score <= alpha => return probe.score,
                _ => {}
            }
        }
    }

    let moves = generate_legal_moves(board);
    if moves.is_empty() {
        // a side with no legal move loses
        return -(WIN_SCORE - ply);
    }

    let original_alpha = alpha;
    let mut best_score = -INF;
    let mut best_move = Move::NULL;
    let mut searched_quiets: Vec<Move> = Vec::new();

    let mut picker = MovePicker::new(
        board,
        moves,
        tt_move,
        &ctx.killers,
        &ctx.history,
        ply as usize,
    );
    while let Some(mv) = picker.next() {
        let child = board.make_move(mv);
        let score = -negamax(&child, depth - 1, ply + 1, -beta, -alpha, ctx);

        if ctx.control.is_stopped() {
            return 0;
        }

        if score > best_score {
            best_score = score;
            best_move = mv;
            if ply == 0 {
                ctx.root_best = mv;
            }
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            // cutoff: reward the quiet refutation, punish the quiets
            // searched before it
            if board.captures_for(mv).is_empty() {
                ctx.killers.store(ply as usize, mv);
                if let Some(piece) = board.piece_on(mv.source()) {
                    ctx.history.update_good(piece, mv.dest(), depth);
                }
                for quiet in &searched_quiets {
                    if let Some(piece) = board.piece_on(quiet.source()) {
                        ctx.history.update_bad(piece, quiet.dest(), depth);
                    }
                }
            }
            break;
        }

        if board.captures_for(mv).is_empty() {
            searched_quiets.push(mv);
        }
    }

    let bound = if best_score >= beta {
        Bound::LowerBound
    } else if best_score > original_alpha {
        Bound::Exact
    } else {
        Bound::UpperBound
    };
    ctx.tt
        .store(board.hash(), best_move, best_score, depth, bound, ply);

    best_score
}

#[inline]
fn side_relative(defender_score: i32, side_to_move: Side) -> i32 {
    match side_to_move {
        Side::Defenders => defender_score,
        Side::Attackers => -defender_score,
    }
}
