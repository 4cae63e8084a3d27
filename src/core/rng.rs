//! Dice: the roll value and the injected random source.
//!
//! The engine never draws randomness on its own. Collaborators hand it a
//! `RollSource` (or a finished `Roll`), which keeps every transition
//! deterministic and lets tests script exact sequences.
//!
//! ## Sources
//!
//! - **`DiceRng`**: seeded ChaCha8, uniform over 6 numbers x 2 colors,
//!   with O(1) state capture and restore
//! - **`ScriptedRolls`**: a canned queue for tests and replays
//!
//! ```
//! use diicii_knockout::core::{DiceRng, RollSource};
//!
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::error::EngineError;
use crate::cards::{Color, MAX_NUMBER, MIN_NUMBER};

/// One die result: a number in 1..=6 and a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRoll")]
pub struct Roll {
    number: u8,
    color: Color,
}

#[derive(Deserialize)]
struct RawRoll {
    number: u8,
    color: Color,
}

impl TryFrom<RawRoll> for Roll {
    type Error = EngineError;

    fn try_from(raw: RawRoll) -> Result<Self, Self::Error> {
        Roll::new(raw.number, raw.color)
    }
}

impl Roll {
    /// Build a roll, rejecting numbers off the die.
    pub fn new(number: u8, color: Color) -> Result<Self, EngineError> {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&number) {
            return Err(EngineError::InvalidRoll(number));
        }
        Ok(Self { number, color })
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Every possible face, green first, numbers ascending.
    pub fn all() -> impl Iterator<Item = Roll> {
        Color::ALL.into_iter().flat_map(|color| {
            (MIN_NUMBER..=MAX_NUMBER).map(move |number| Roll { number, color })
        })
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number, self.color)
    }
}

/// The `roll()` capability.
pub trait RollSource {
    /// Produce the next roll.
    fn roll(&mut self) -> Roll;
}

/// Deterministic die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current position for later replay.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RollSource for DiceRng {
    fn roll(&mut self) -> Roll {
        let number = self.inner.gen_range(MIN_NUMBER..=MAX_NUMBER);
        let color = if self.inner.gen_bool(0.5) {
            Color::Green
        } else {
            Color::Red
        };
        Roll { number, color }
    }
}

/// Serializable die position.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many rolls were made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    pub seed: u64,
    pub word_pos: u128,
}

/// A fixed sequence of rolls.
///
/// Falls back to `fallback` once the script runs dry, so a test driving a
/// long match only has to script the rolls it cares about.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    queue: VecDeque<Roll>,
    fallback: Roll,
}

impl ScriptedRolls {
    /// Script `rolls`, then repeat `fallback` forever.
    pub fn new(rolls: impl IntoIterator<Item = Roll>, fallback: Roll) -> Self {
        Self {
            queue: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Rolls still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> Roll {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
