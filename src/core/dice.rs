//! A single die with a configurable face count.

use super::error::ConfigError;
use super::rng::GameRng;

/// Faces on the die every factory-built game uses.
pub const STANDARD_FACES: u32 = 6;

/// Uniform die over `1..=faces`.
///
/// The die owns its random stream, handed to it at construction and never
/// reseeded afterwards.
#[derive(Clone, Debug)]
pub struct Dice {
    faces: u32,
    rng: GameRng,
}

impl Dice {
    /// Create a die with `faces` faces drawing from `rng`.
    pub fn new(faces: u32, rng: GameRng) -> Result<Self, ConfigError> {
        if faces == 0 {
            return Err(ConfigError::InvalidFaceCount { faces });
        }
        Ok(Self { faces, rng })
    }

    /// A six-faced die.
    #[must_use]
    pub fn standard(rng: GameRng) -> Self {
        Self {
            faces: STANDARD_FACES,
            rng,
        }
    }

    /// Number of faces.
    #[must_use]
    pub const fn faces(&self) -> u32 {
        self.faces
    }

    /// Whether `value` can be rolled on this die.
    #[must_use]
    pub fn can_show(&self, value: u32) -> bool {
        (1..=self.faces).contains(&value)
    }

    /// Roll once.
    pub fn roll(&mut self) -> u32 {
        self.rng.gen_inclusive(1..=self.faces)
    }
}
