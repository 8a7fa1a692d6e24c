use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

/// Client-facing ranked status of a beatmapset.
///
/// Values follow the osu! API; `All` is a filter sentinel that expands to
/// every native code of the backend being queried.
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
#[repr(i16)]
pub enum MapStatus {
    #[strum(serialize = "graveyard")]
    Graveyard = -2,
    #[strum(serialize = "wip")]
    Wip = -1,
    #[default]
    #[strum(serialize = "pending")]
    Pending = 0,
    #[strum(serialize = "ranked")]
    Ranked = 1,
    #[strum(serialize = "approved")]
    Approved = 2,
    #[strum(serialize = "qualified")]
    Qualified = 3,
    #[strum(serialize = "loved")]
    Loved = 4,
    #[strum(serialize = "all")]
    All = 727,
}

/// bancho.py `RankedStatus` codes
const PRIVATE_PENDING: i64 = 0;
const PRIVATE_RANKED: i64 = 2;
const PRIVATE_APPROVED: i64 = 3;
const PRIVATE_QUALIFIED: i64 = 4;
const PRIVATE_LOVED: i64 = 5;

impl MapStatus {
    pub fn from_i64(value: i64) -> Option<Self> {
        i16::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Every concrete status (excludes `All`).
    pub fn concrete() -> impl Iterator<Item = MapStatus> {
        Self::iter().filter(|s| *s != Self::All)
    }

    /// Native status codes of the private server for this filter.
    pub fn private_codes(&self) -> Vec<i64> {
        match self {
            Self::Graveyard | Self::Wip | Self::Pending => vec![PRIVATE_PENDING],
            Self::Ranked => vec![PRIVATE_RANKED],
            Self::Approved => vec![PRIVATE_APPROVED],
            Self::Qualified => vec![PRIVATE_QUALIFIED],
            Self::Loved => vec![PRIVATE_LOVED],
            Self::All => vec![
                PRIVATE_PENDING,
                PRIVATE_RANKED,
                PRIVATE_APPROVED,
                PRIVATE_QUALIFIED,
                PRIVATE_LOVED,
            ],
        }
    }

    /// Native status codes of the mirror (osu! API values) for this filter.
    pub fn mirror_codes(&self) -> Vec<i64> {
        match self {
            Self::All => Self::concrete().map(|s| s as i64).collect(),
            status => vec![*status as i64],
        }
    }

    /// Client status for a private server code. Unknown codes and
    /// "update available" (1) read as pending.
    pub fn from_private_code(code: i64) -> Self {
        match code {
            PRIVATE_RANKED => Self::Ranked,
            PRIVATE_APPROVED => Self::Approved,
            PRIVATE_QUALIFIED => Self::Qualified,
            PRIVATE_LOVED => Self::Loved,
            _ => Self::Pending,
        }
    }

    pub fn from_mirror_code(code: i64) -> Self {
        match Self::from_i64(code) {
            Some(Self::All) | None => Self::Pending,
            Some(status) => status,
        }
    }
}

impl std::fmt::Display for MapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for MapStatus {
    type Err = Error;

    /// Accepts names (`ranked`) and numeric codes (`1`, `727`).
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Some(status) = Self::iter().find(|st| st.short_name() == normalized) {
            return Ok(status);
        }

        normalized
            .parse::<i64>()
            .ok()
            .and_then(Self::from_i64)
            .ok_or_else(|| Error::UnknownMapStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_i64() {
        assert_eq!(MapStatus::from_i64(-2), Some(MapStatus::Graveyard));
        assert_eq!(MapStatus::from_i64(727), Some(MapStatus::All));
        assert_eq!(MapStatus::from_i64(5), None);
        assert_eq!(MapStatus::from_i64(100_000), None);
    }

    #[test]
    fn test_all_expands_to_every_native_code() {
        assert_eq!(MapStatus::All.private_codes(), vec![0, 2, 3, 4, 5]);
        assert_eq!(MapStatus::All.mirror_codes(), vec![-2, -1, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_single_status_is_single_code() {
        for status in MapStatus::concrete() {
            assert_eq!(status.private_codes().len(), 1);
            assert_eq!(status.mirror_codes(), vec![status as i64]);
        }
        assert_eq!(MapStatus::Loved.private_codes(), vec![5]);
        assert_eq!(MapStatus::Graveyard.private_codes(), vec![0]);
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(MapStatus::from_private_code(2), MapStatus::Ranked);
        assert_eq!(MapStatus::from_private_code(1), MapStatus::Pending);
        assert_eq!(MapStatus::from_private_code(-1), MapStatus::Pending);
        assert_eq!(MapStatus::from_mirror_code(4), MapStatus::Loved);
        assert_eq!(MapStatus::from_mirror_code(727), MapStatus::Pending);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Ranked".parse::<MapStatus>().unwrap(), MapStatus::Ranked);
        assert_eq!("-2".parse::<MapStatus>().unwrap(), MapStatus::Graveyard);
        assert_eq!("727".parse::<MapStatus>().unwrap(), MapStatus::All);
        assert!(matches!(
            "9".parse::<MapStatus>(),
            Err(Error::UnknownMapStatus(ref s)) if s == "9"
        ));
        assert!("shiny".parse::<MapStatus>().is_err());
    }
}
