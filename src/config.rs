//! Game configuration for starting a session.
//!
//! Illegal in-game intents are silently dropped by the engine, but a bad
//! configuration is a programming error at the boundary and fails loudly.

use crate::selector::Difficulty;
use serde::{Deserialize, Serialize};

/// Game mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Mode {
    /// Two humans sharing the board.
    PvP,
    /// Human versus the computer opponent.
    PvC,
}

/// Validated configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    mode: Mode,
    difficulty: Option<Difficulty>,
}

impl GameConfig {
    /// Creates a configuration, validating the mode/difficulty pairing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDifficulty`] for single-player games
    /// without a tier, and [`ConfigError::DifficultyNotApplicable`] when a
    /// tier is supplied for a two-player game.
    pub fn new(mode: Mode, difficulty: Option<Difficulty>) -> Result<Self, ConfigError> {
        match (mode, difficulty) {
            (Mode::PvC, None) => Err(ConfigError::MissingDifficulty),
            (Mode::PvP, Some(difficulty)) => Err(ConfigError::DifficultyNotApplicable(difficulty)),
            _ => Ok(Self { mode, difficulty }),
        }
    }

    /// Two-player configuration.
    pub fn two_player() -> Self {
        Self {
            mode: Mode::PvP,
            difficulty: None,
        }
    }

    /// Single-player configuration at the given tier.
    pub fn single_player(difficulty: Difficulty) -> Self {
        Self {
            mode: Mode::PvC,
            difficulty: Some(difficulty),
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the difficulty tier (single-player only).
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }
}

/// Error raised for an invalid mode/difficulty pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Single-player mode requires a difficulty tier.
    #[display("Single-player mode requires a difficulty tier")]
    MissingDifficulty,

    /// Two-player mode takes no difficulty tier.
    #[display("Difficulty {_0} does not apply to two-player mode")]
    DifficultyNotApplicable(Difficulty),
}

impl std::error::Error for ConfigError {}
