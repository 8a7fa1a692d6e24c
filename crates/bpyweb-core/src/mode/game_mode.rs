use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

use crate::error::{Error, Result};

/// Composite game mode as understood by the bancho.py backend.
///
/// The discriminant is the backend's "bpy mode" integer. Mode 7 (autopilot
/// taiko) does not exist.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    FromRepr,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum GameMode {
    #[default]
    #[strum(serialize = "osu")]
    Standard = 0,
    #[strum(serialize = "taiko")]
    Taiko = 1,
    #[strum(serialize = "catch")]
    Catch = 2,
    #[strum(serialize = "mania")]
    Mania = 3,
    #[strum(serialize = "rx!osu")]
    RelaxStandard = 4,
    #[strum(serialize = "rx!taiko")]
    RelaxTaiko = 5,
    #[strum(serialize = "rx!catch")]
    RelaxCatch = 6,
    #[strum(serialize = "ap!osu")]
    AutopilotStandard = 8,
}

/// Assist ruleset layered on top of a base game mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
pub enum RelaxMode {
    #[default]
    #[strum(serialize = "vanilla")]
    Vanilla,
    #[strum(serialize = "relax")]
    Relax,
    #[strum(serialize = "autopilot")]
    Autopilot,
}

impl GameMode {
    pub const BASE_MODES: [GameMode; 4] = [
        GameMode::Standard,
        GameMode::Taiko,
        GameMode::Catch,
        GameMode::Mania,
    ];

    pub fn from_bpy_mode(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn bpy_mode(&self) -> u8 {
        *self as u8
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Human readable name of the ruleset (e.g. "osu!catch").
    pub fn display_name(&self) -> &'static str {
        match self.original() {
            Self::Taiko => "osu!taiko",
            Self::Catch => "osu!catch",
            Self::Mania => "osu!mania",
            _ => "osu!",
        }
    }

    pub fn is_base(&self) -> bool {
        matches!(
            self,
            Self::Standard | Self::Taiko | Self::Catch | Self::Mania
        )
    }

    /// Strip the relax/autopilot variant, returning the underlying ruleset.
    pub fn original(&self) -> Self {
        match self {
            Self::Standard | Self::RelaxStandard | Self::AutopilotStandard => Self::Standard,
            Self::Taiko | Self::RelaxTaiko => Self::Taiko,
            Self::Catch | Self::RelaxCatch => Self::Catch,
            Self::Mania => Self::Mania,
        }
    }

    pub fn relax_mode(&self) -> RelaxMode {
        match self {
            Self::Standard | Self::Taiko | Self::Catch | Self::Mania => RelaxMode::Vanilla,
            Self::RelaxStandard | Self::RelaxTaiko | Self::RelaxCatch => RelaxMode::Relax,
            Self::AutopilotStandard => RelaxMode::Autopilot,
        }
    }

    /// Combine a base mode with a relax mode.
    ///
    /// Only base modes are accepted; passing an already relaxed mode is an
    /// invalid combination even with [`RelaxMode::Vanilla`].
    pub fn compose(self, relax: RelaxMode) -> Result<Self> {
        let composed = match (self, relax) {
            (Self::Standard, RelaxMode::Vanilla) => Some(Self::Standard),
            (Self::Taiko, RelaxMode::Vanilla) => Some(Self::Taiko),
            (Self::Catch, RelaxMode::Vanilla) => Some(Self::Catch),
            (Self::Mania, RelaxMode::Vanilla) => Some(Self::Mania),
            (Self::Standard, RelaxMode::Relax) => Some(Self::RelaxStandard),
            (Self::Taiko, RelaxMode::Relax) => Some(Self::RelaxTaiko),
            (Self::Catch, RelaxMode::Relax) => Some(Self::RelaxCatch),
            (Self::Standard, RelaxMode::Autopilot) => Some(Self::AutopilotStandard),
            _ => None,
        };

        composed.ok_or(Error::InvalidModeCombination { mode: self, relax })
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl TryFrom<i64> for GameMode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_bpy_mode)
            .ok_or(Error::UnknownGameMode(value))
    }
}

impl FromStr for GameMode {
    type Err = Error;

    /// Accepts route names (`osu`, `rx!taiko`, ...) and bpy mode numbers.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "osu" | "std" | "standard" => Ok(Self::Standard),
            "taiko" => Ok(Self::Taiko),
            "catch" | "fruits" | "ctb" => Ok(Self::Catch),
            "mania" => Ok(Self::Mania),
            "rx!osu" | "rx!std" => Ok(Self::RelaxStandard),
            "rx!taiko" => Ok(Self::RelaxTaiko),
            "rx!catch" | "rx!fruits" => Ok(Self::RelaxCatch),
            "ap!osu" | "ap!std" => Ok(Self::AutopilotStandard),
            other => match other.parse::<i64>() {
                Ok(value) => Self::try_from(value),
                Err(_) => Err(Error::UnknownGameModeName(s.to_string())),
            },
        }
    }
}

impl RelaxMode {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for RelaxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for RelaxMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vanilla" | "vn" | "0" => Ok(Self::Vanilla),
            "relax" | "rx" | "1" => Ok(Self::Relax),
            "autopilot" | "ap" | "2" => Ok(Self::Autopilot),
            _ => Err(Error::UnknownRelaxMode(s.to_string())),
        }
    }
}

/// Whether `mode` may be played under `relax`.
pub fn is_real_game_mode(mode: GameMode, relax: RelaxMode) -> bool {
    mode.compose(relax).is_ok()
}

/// Backend integer for a (mode, relax) pair.
pub fn map_to_bpy_mode(mode: GameMode, relax: RelaxMode) -> Result<u8> {
    mode.compose(relax).map(|m| m.bpy_mode())
}

pub fn game_mode_type(mode: GameMode) -> RelaxMode {
    mode.relax_mode()
}

pub fn original_game_mode(mode: GameMode) -> GameMode {
    mode.original()
}
