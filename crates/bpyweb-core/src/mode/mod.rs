//! Game mode types.
//!
//! - `GameMode` - composite mode, discriminant is the backend's bpy mode
//! - `RelaxMode` - vanilla / relax / autopilot
//! - `ModeFilter` - a mode or the "all modes" sentinel used by search

mod game_mode;

pub use game_mode::*;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModeFilter {
    #[default]
    All,
    Mode(GameMode),
}

impl ModeFilter {
    pub fn mode(&self) -> Option<GameMode> {
        match self {
            Self::All => None,
            Self::Mode(mode) => Some(*mode),
        }
    }
}

impl From<GameMode> for ModeFilter {
    fn from(mode: GameMode) -> Self {
        Self::Mode(mode)
    }
}

impl std::str::FromStr for ModeFilter {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Mode)
        }
    }
}
