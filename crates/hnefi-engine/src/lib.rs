//! Adversarial search AI for hnefatafl: personality-shaped evaluation,
//! negamax alpha-beta with iterative deepening, a per-game transposition
//! table, and killer/history move ordering.
//!
//! The entry point is [`AiController`]: one per active game, owning all
//! search state, so any number of games can run their own AI without
//! contention.

pub mod controller;
pub mod eval;
pub mod search;

pub use controller::{AiConfig, AiController};
pub use eval::{Difficulty, Eval, Personality};
pub use search::control::SearchControl;
pub use search::{SearchResult, Searcher};
