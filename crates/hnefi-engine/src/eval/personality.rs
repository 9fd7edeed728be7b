//! Tunable playing style and strength.

/// Style weights in `[0, 1]`, each scaling one evaluation term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    /// Scales material and mobility: how hard the engine trades and pushes.
    pub aggressiveness: f32,
    /// Scales the king's escape-path bonus: how eagerly he runs for a corner.
    pub risk_tolerance: f32,
    /// Scales king-safety terms: shielding defenders, throne bonus.
    pub king_protection: f32,
    /// Scales the central-zone occupation term.
    pub center_control: f32,
}

impl Personality {
    /// Build a personality, clamping every weight into `[0, 1]`.
    pub fn new(
        aggressiveness: f32,
        risk_tolerance: f32,
        king_protection: f32,
        center_control: f32,
    ) -> Personality {
        Personality {
            aggressiveness: aggressiveness.clamp(0.0, 1.0),
            risk_tolerance: risk_tolerance.clamp(0.0, 1.0),
            king_protection: king_protection.clamp(0.0, 1.0),
            center_control: center_control.clamp(0.0, 1.0),
        }
    }

    /// Even weights across the board.
    pub const fn balanced() -> Personality {
        Personality {
            aggressiveness: 0.5,
            risk_tolerance: 0.5,
            king_protection: 0.5,
            center_control: 0.5,
        }
    }

    /// Trades and mobility above all.
    pub const fn aggressive() -> Personality {
        Personality {
            aggressiveness: 0.9,
            risk_tolerance: 0.7,
            king_protection: 0.3,
            center_control: 0.5,
        }
    }

    /// Keeps the king shielded and the center held.
    pub const fn defensive() -> Personality {
        Personality {
            aggressiveness: 0.3,
            risk_tolerance: 0.2,
            king_protection: 0.9,
            center_control: 0.7,
        }
    }
}

impl Default for Personality {
    fn default() -> Personality {
        Personality::balanced()
    }
}

/// Playing strength on a 1..=10 scale. Scales the whole evaluation and,
/// below [`Difficulty::NOISE_THRESHOLD`], mixes in bounded random noise so
/// weak settings genuinely blunder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(10);

    /// Levels below this one get evaluation noise.
    pub const NOISE_THRESHOLD: u8 = 4;

    /// Noise amplitude added per level below the threshold.
    pub const NOISE_STEP: i32 = 30;

    /// Build a difficulty, clamping into 1..=10.
    pub fn new(level: u8) -> Difficulty {
        Difficulty(level.clamp(1, 10))
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Noise amplitude for this level; zero at or above the threshold.
    pub fn noise_amplitude(self) -> i32 {
        let below = Difficulty::NOISE_THRESHOLD.saturating_sub(self.0);
        Difficulty::NOISE_STEP * below as i32
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, Personality};

    #[test]
    fn weights_are_clamped() {
        let p = Personality::new(1.5, -0.2, 0.5, 2.0);
        assert_eq!(p.aggressiveness, 1.0);
        assert_eq!(p.risk_tolerance, 0.0);
        assert_eq!(p.king_protection, 0.5);
        assert_eq!(p.center_control, 1.0);
    }

    #[test]
    fn difficulty_is_clamped() {
        assert_eq!(Difficulty::new(0), Difficulty::MIN);
        assert_eq!(Difficulty::new(11), Difficulty::MAX);
        assert_eq!(Difficulty::new(7).level(), 7);
    }

    #[test]
    fn noise_only_below_threshold() {
        assert_eq!(Difficulty::new(10).noise_amplitude(), 0);
        assert_eq!(Difficulty::new(4).noise_amplitude(), 0);
        assert_eq!(Difficulty::new(3).noise_amplitude(), 30);
        assert_eq!(Difficulty::new(1).noise_amplitude(), 90);
    }
}
