//! Per-game AI driver tying together evaluation, search, and time control.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use hnefi_core::{Board, Move, generate_legal_moves};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::eval::{Difficulty, Eval, Personality};
use crate::search::control::SearchControl;
use crate::search::{SearchResult, Searcher};

/// Everything that shapes one AI opponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiConfig {
    pub personality: Personality,
    pub difficulty: Difficulty,
    /// Cap on iterative-deepening depth; the clock usually stops earlier.
    pub max_depth: u8,
    /// Seed for the low-difficulty evaluation noise; fixed seed, fixed play.
    pub seed: u64,
}

impl Default for AiConfig {
    fn default() -> AiConfig {
        AiConfig {
            personality: Personality::balanced(),
            difficulty: Difficulty::MAX,
            max_depth: 32,
            seed: 0x5eed_1e55,
        }
    }
}

/// One AI opponent for one game.
///
/// Owns its searcher, transposition table, and noise RNG; nothing is
/// shared between controllers, so concurrent games cannot interfere.
pub struct AiController {
    config: AiConfig,
    searcher: Searcher,
    rng: StdRng,
}

impl AiController {
    pub fn new(config: AiConfig) -> AiController {
        AiController {
            config,
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Forget all game state: transposition table and noise stream start
    /// over. Call between games when reusing a controller.
    pub fn reset(&mut self) {
        self.searcher.clear_tables();
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    /// Pick a move for the side to move, spending at most `budget`.
    ///
    /// Returns `None` when the game is over or the side to move has no
    /// legal move. Otherwise the move is always legal: it comes from the
    /// deepest completed iteration, or from the legal move list when even
    /// depth 1 did not finish in time.
    pub fn best_move(&mut self, board: &Board, budget: Duration) -> Option<Move> {
        if board.outcome().is_some() {
            return None;
        }
        let moves = generate_legal_moves(board);
        if moves.is_empty() {
            return None;
        }

        let result = self.run_search(board, budget);

        let chosen = if result.best_move.is_null() {
            // budget expired before depth 1 completed
            moves[0]
        } else {
            result.best_move
        };
        info!(
            side = %board.side_to_move(),
            mv = %chosen,
            depth = result.depth,
            score = result.score,
            nodes = result.nodes,
            "move selected"
        );
        Some(chosen)
    }

    fn run_search(&mut self, board: &Board, budget: Duration) -> SearchResult {
        let stopped = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_timed(stopped, budget);

        let noise = if self.config.difficulty.noise_amplitude() > 0 {
            Some(&mut self.rng)
        } else {
            None
        };
        let mut eval = Eval::new(self.config.personality, self.config.difficulty, noise);

        debug!(budget_ms = budget.as_millis() as u64, "search starting");
        self.searcher
            .search(board, self.config.max_depth, &control, &mut eval)
    }
}
