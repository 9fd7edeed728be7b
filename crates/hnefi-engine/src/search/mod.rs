//! Iterative-deepening search driver.

pub mod control;
pub mod heuristics;
pub mod negamax;
pub mod ordering;
pub mod tt;

use hnefi_core::{Board, Move};
use tracing::debug;

use crate::eval::Eval;
use control::SearchControl;
use heuristics::{HistoryTable, KillerTable};
use negamax::{INF, SearchContext, WIN_SCORE, negamax};
use tt::TranspositionTable;

/// Outcome of one search: the best move of the deepest completed
/// iteration, its score (side-to-move relative), the depth reached, and
/// the node count.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Move,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Owns the transposition table and drives iterative deepening. Killer
/// and history tables are rebuilt per search; the TT persists across
/// searches within one game.
pub struct Searcher {
    tt: TranspositionTable,
}

impl Searcher {
    pub fn new() -> Searcher {
        Searcher {
            tt: TranspositionTable::default(),
        }
    }

    /// Drop all accumulated table state, e.g. between games.
    pub fn clear_tables(&mut self) {
        self.tt.clear();
    }

    /// Search the position, deepening until `max_depth` or until the
    /// control calls time. Aborted iterations are discarded: the returned
    /// move always comes from a fully completed depth.
    pub fn search(
        &mut self,
        board: &Board,
        max_depth: u8,
        control: &SearchControl,
        eval: &mut Eval<'_>,
    ) -> SearchResult {
        self.tt.new_generation();

        let mut ctx = SearchContext {
            nodes: 0,
            tt: &mut self.tt,
            control,
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            eval,
            root_best: Move::NULL,
        };

        let mut result = SearchResult {
            best_move: Move::NULL,
            score: 0,
            depth: 0,
            nodes: 0,
        };

        for depth in 1..=max_depth.max(1) {
            if control.should_stop_iterating() {
                break;
            }

            ctx.root_best = Move::NULL;
            let score = negamax(board, depth, 0, -INF, INF, &mut ctx);

            if control.is_stopped() {
                // partial iteration, keep the previous depth's answer
                break;
            }

            result = SearchResult {
                best_move: ctx.root_best,
                score,
                depth,
                nodes: ctx.nodes,
            };
            debug!(
                depth,
                score,
                nodes = ctx.nodes,
                best = %result.best_move,
                elapsed_ms = control.elapsed().as_millis() as u64,
                "iteration complete"
            );

            if score.abs() > WIN_SCORE / 2 {
                // forced win found, deeper search cannot improve it
                break;
            }
        }

        result.nodes = ctx.nodes;
        result
    }
}

impl Default for Searcher {
    fn default() -> Searcher {
        Searcher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchControl, Searcher};
    use crate::eval::{Difficulty, Eval, Personality};
    use hnefi_core::{Board, Move, Square, check_move, generate_legal_moves};
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    fn infinite() -> SearchControl {
        SearchControl::new_infinite(Arc::new(AtomicBool::new(false)))
    }

    fn eval() -> Eval<'static> {
        Eval::new(Personality::balanced(), Difficulty::MAX, None)
    }

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn finds_a_legal_move_from_the_start() {
        let board = Board::starting_position();
        let mut searcher = Searcher::new();
        let mut eval = eval();
        let result = searcher.search(&board, 3, &infinite(), &mut eval);
        assert!(!result.best_move.is_null());
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 0);
        assert!(
            check_move(&board, result.best_move.source(), result.best_move.dest()).is_ok()
        );
    }

    #[test]
    fn takes_a_corner_escape_in_one() {
        // Defenders to move, king on b11 one step from a11.
        let board: Board = "1k9/11/11/11/11/11/5a5/11/11/11/11 d".parse().unwrap();
        let mut searcher = Searcher::new();
        let mut eval = eval();
        let result = searcher.search(&board, 3, &infinite(), &mut eval);
        // both a11 and k11 are one step away; either corner wins
        assert_eq!(result.best_move.source(), sq("b11"));
        assert!(result.best_move.dest().is_corner());
        assert!(result.score > super::WIN_SCORE / 2);
    }

    #[test]
    fn prefers_the_immediate_king_capture() {
        // Attackers to move; the king on c4 has attackers on three sides
        // and an attacker on c8 can drop to c5 for the kill.
        let board: Board = "11/11/11/2a8/11/11/11/1aka7/2a8/11/11 a".parse().unwrap();
        let mut searcher = Searcher::new();
        let mut eval = eval();
        let result = searcher.search(&board, 3, &infinite(), &mut eval);
        assert_eq!(result.best_move, Move::new(sq("c8"), sq("c5")));
        assert!(result.score > super::WIN_SCORE / 2);
    }

    #[test]
    fn zero_budget_yields_no_completed_iteration() {
        let board = Board::starting_position();
        let mut searcher = Searcher::new();
        let mut eval = eval();
        let control =
            SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        let result = searcher.search(&board, 5, &control, &mut eval);
        assert_eq!(result.depth, 0);
        assert!(result.best_move.is_null());
    }

    #[test]
    fn deeper_search_never_abandons_a_found_win() {
        // Same kill-in-one position as above: whatever the depth cap, the
        // chosen move and score must never get worse as the search deepens.
        let board: Board = "11/11/11/2a8/11/11/11/1aka7/2a8/11/11 a".parse().unwrap();
        let kill = Move::new(sq("c8"), sq("c5"));

        let mut results = Vec::new();
        for depth in [1u8, 2, 4] {
            let mut searcher = Searcher::new();
            let mut eval = eval();
            results.push(searcher.search(&board, depth, &infinite(), &mut eval));
        }
        for result in &results {
            assert_eq!(result.best_move, kill);
            assert!(result.score > super::WIN_SCORE / 2);
        }
        for pair in results.windows(2) {
            assert!(pair[1].score >= pair[0].score);
        }
    }

    #[test]
    fn search_results_are_reproducible() {
        let board = Board::starting_position();
        let run = || {
            let mut searcher = Searcher::new();
            let mut eval = eval();
            searcher.search(&board, 3, &infinite(), &mut eval).best_move
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn best_move_is_always_generated_legal() {
        // A sparse middlegame position, defenders to move.
        let board: Board = "11/11/3a7/11/2d8/4k6/11/5a5/11/11/11 d".parse().unwrap();
        let mut searcher = Searcher::new();
        let mut eval = eval();
        let result = searcher.search(&board, 4, &infinite(), &mut eval);
        assert!(generate_legal_moves(&board).contains(&result.best_move));
    }
}
