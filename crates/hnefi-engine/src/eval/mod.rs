//! Static evaluation, defender-positive, shaped by personality and
//! difficulty.

pub mod king;
pub mod material;
pub mod mobility;
pub mod personality;

use hnefi_core::Board;
use rand::Rng;
use rand::rngs::StdRng;

pub use personality::{Difficulty, Personality};

/// Evaluator for one search: personality weights, difficulty scaling, and
/// an optional seeded noise source for the weak difficulty levels.
///
/// Positive scores favor the Defenders; the search applies the
/// side-to-move sign. With a fixed seed the evaluator is fully
/// deterministic.
pub struct Eval<'r> {
    weights: Personality,
    difficulty: Difficulty,
    noise: Option<&'r mut StdRng>,
}

impl<'r> Eval<'r> {
    pub fn new(
        weights: Personality,
        difficulty: Difficulty,
        noise: Option<&'r mut StdRng>,
    ) -> Eval<'r> {
        Eval {
            weights,
            difficulty,
            noise,
        }
    }

    /// Score a position from the Defenders' point of view.
    pub fn score(&mut self, board: &Board) -> i32 {
        let w = self.weights;
        let mut total = 0i32;
        total += scale(material::material(board), w.aggressiveness);
        total += scale(mobility::mobility(board), w.aggressiveness);
        total += scale(king::king_safety(board), w.king_protection);
        total += scale(king::escape_paths(board), w.risk_tolerance);
        total += scale(material::center_control(board), w.center_control);

        let mut score = total * self.difficulty.level() as i32 / 10;

        let amplitude = self.difficulty.noise_amplitude();
        if amplitude > 0
            && let Some(rng) = self.noise.as_deref_mut()
        {
            score += rng.gen_range(-amplitude..=amplitude);
        }
        score
    }
}

fn scale(term: i32, weight: f32) -> i32 {
    (term as f32 * weight).round() as i32
}
