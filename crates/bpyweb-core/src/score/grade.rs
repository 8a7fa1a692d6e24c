use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::mode::GameMode;
use crate::mods::Mods;
use crate::score::HitCounts;

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
    EnumString,
    IntoStaticStr,
)]
pub enum Grade {
    XH,
    X,
    SH,
    S,
    A,
    B,
    C,
    D,
    /// Failed or ungradable score
    #[default]
    F,
}

impl Grade {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Label shown on score rows: both X grades read "SS".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::XH | Self::X => "SS",
            Self::SH | Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::XH => "#D9D9D9",
            Self::X => "#FFD700",
            Self::SH => "#C0C0C0",
            Self::S => "#FFA500",
            Self::A => "#7ED321",
            Self::B => "#4A90E2",
            Self::C => "#BD10E0",
            Self::D => "#D0021B",
            Self::F => "#808080",
        }
    }

    pub fn is_silver(&self) -> bool {
        matches!(self, Self::XH | Self::SH)
    }

    /// Resolve an absent grade (unmapped mode) to `F`.
    pub fn or_unknown(grade: Option<Grade>) -> Grade {
        grade.unwrap_or(Grade::F)
    }

    fn ss(silver: bool) -> Self {
        if silver { Self::XH } else { Self::X }
    }

    fn s(silver: bool) -> Self {
        if silver { Self::SH } else { Self::S }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Derive the letter grade of a score.
///
/// `accuracy` is a percentage (0-100) and only used by catch and mania.
/// Returns `None` only for modes without grading rules; every current
/// `GameMode` is mapped.
pub fn calculate_grade(
    mode: GameMode,
    mods: Mods,
    accuracy: f64,
    hits: &HitCounts,
) -> Option<Grade> {
    let silver = mods.intersects(Mods::SILVER);

    let grade = match mode {
        GameMode::Standard
        | GameMode::RelaxStandard
        | GameMode::AutopilotStandard
        | GameMode::Taiko
        | GameMode::RelaxTaiko => ratio_grade(hits, silver),
        GameMode::Catch | GameMode::RelaxCatch => {
            accuracy_grade(accuracy, silver, [98.0, 94.0, 90.0, 85.0])
        }
        GameMode::Mania => accuracy_grade(accuracy, silver, [95.0, 90.0, 80.0, 70.0]),
    };

    Some(grade)
}

fn ratio_grade(hits: &HitCounts, silver: bool) -> Grade {
    let total = hits.total_objects();
    if total == 0 {
        return Grade::D;
    }

    let total = total as f64;
    let ratio300 = f64::from(hits.n300) / total;
    let ratio50 = f64::from(hits.n50) / total;
    let no_miss = hits.miss == 0;

    if ratio300 == 1.0 {
        Grade::ss(silver)
    } else if ratio300 > 0.9 && ratio50 <= 0.01 && no_miss {
        Grade::s(silver)
    } else if (ratio300 > 0.8 && no_miss) || ratio300 > 0.9 {
        Grade::A
    } else if (ratio300 > 0.7 && no_miss) || ratio300 > 0.8 {
        Grade::B
    } else if ratio300 > 0.6 {
        Grade::C
    } else {
        Grade::D
    }
}

/// Thresholds are the exclusive lower bounds for S, A, B and C.
fn accuracy_grade(accuracy: f64, silver: bool, thresholds: [f64; 4]) -> Grade {
    let [s, a, b, c] = thresholds;

    if accuracy >= 100.0 {
        Grade::ss(silver)
    } else if accuracy > s {
        Grade::s(silver)
    } else if accuracy > a {
        Grade::A
    } else if accuracy > b {
        Grade::B
    } else if accuracy > c {
        Grade::C
    } else {
        Grade::D
    }
}
