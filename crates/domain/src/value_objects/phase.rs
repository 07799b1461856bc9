//! Game phase value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse lifecycle phase of a play session
///
/// `Paused` is a declared value with no engine-level transition: the outer
/// layer may park the session there, but the engine never produces it and is
/// not time-driven, so nothing freezes or thaws on its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    LevelComplete,
}

impl GamePhase {
    /// Whether gameplay intents (collect/activate/complete) are meaningful
    pub fn is_in_level(self) -> bool {
        matches!(self, GamePhase::Playing | GamePhase::Paused)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::LevelComplete => "levelComplete",
        };
        f.write_str(name)
    }
}
