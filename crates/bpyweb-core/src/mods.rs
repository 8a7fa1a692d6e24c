//! osu! mod flags.
//!
//! Scores store their mods as a 32-bit mask. `Mod` names each defined bit and
//! `Mods` wraps a raw mask.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[repr(u32)]
pub enum Mod {
    #[strum(serialize = "NM")]
    NoMod = 0,
    #[strum(serialize = "NF")]
    NoFail = 1 << 0,
    #[strum(serialize = "EZ")]
    Easy = 1 << 1,
    #[strum(serialize = "TD")]
    TouchDevice = 1 << 2,
    #[strum(serialize = "HD")]
    Hidden = 1 << 3,
    #[strum(serialize = "HR")]
    HardRock = 1 << 4,
    #[strum(serialize = "SD")]
    SuddenDeath = 1 << 5,
    #[strum(serialize = "DT")]
    DoubleTime = 1 << 6,
    #[strum(serialize = "RX")]
    Relax = 1 << 7,
    #[strum(serialize = "HT")]
    HalfTime = 1 << 8,
    #[strum(serialize = "NC")]
    Nightcore = 1 << 9,
    #[strum(serialize = "FL")]
    Flashlight = 1 << 10,
    #[strum(serialize = "AT")]
    Autoplay = 1 << 11,
    #[strum(serialize = "SO")]
    SpunOut = 1 << 12,
    #[strum(serialize = "AP")]
    Autopilot = 1 << 13,
    #[strum(serialize = "PF")]
    Perfect = 1 << 14,
    #[strum(serialize = "4K")]
    Key4 = 1 << 15,
    #[strum(serialize = "5K")]
    Key5 = 1 << 16,
    #[strum(serialize = "6K")]
    Key6 = 1 << 17,
    #[strum(serialize = "7K")]
    Key7 = 1 << 18,
    #[strum(serialize = "8K")]
    Key8 = 1 << 19,
    #[strum(serialize = "FI")]
    FadeIn = 1 << 20,
    #[strum(serialize = "RD")]
    Random = 1 << 21,
    #[strum(serialize = "CN")]
    Cinema = 1 << 22,
    #[strum(serialize = "TP")]
    Target = 1 << 23,
    #[strum(serialize = "9K")]
    Key9 = 1 << 24,
    #[strum(serialize = "CO")]
    KeyCoop = 1 << 25,
    #[strum(serialize = "1K")]
    Key1 = 1 << 26,
    #[strum(serialize = "3K")]
    Key3 = 1 << 27,
    #[strum(serialize = "2K")]
    Key2 = 1 << 28,
    #[strum(serialize = "V2")]
    ScoreV2 = 1 << 29,
    #[strum(serialize = "MR")]
    Mirror = 1 << 30,
}

impl Mod {
    pub fn bits(&self) -> u32 {
        *self as u32
    }

    /// Two-letter acronym (e.g. "HD").
    pub fn acronym(&self) -> &'static str {
        self.into()
    }

    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::iter().find(|m| m.acronym().eq_ignore_ascii_case(acronym))
    }
}

impl std::fmt::Display for Mod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.acronym())
    }
}

/// Raw mod mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mods(pub u32);

impl Mods {
    pub const NONE: Mods = Mods(0);

    /// Mods that turn X/S grades into their silver variants.
    pub const SILVER: Mods = Mods(Mod::Hidden as u32 | Mod::Flashlight as u32 | Mod::FadeIn as u32);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, m: Mod) -> bool {
        let bits = m.bits();
        bits != 0 && self.0 & bits == bits
    }

    pub fn intersects(&self, other: Mods) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, m: Mod) {
        self.0 |= m.bits();
    }

    pub fn remove(&mut self, m: Mod) {
        self.0 &= !m.bits();
    }

    pub fn toggle(&mut self, m: Mod) {
        self.0 ^= m.bits();
    }

    /// Every defined mod set in the mask, in declaration order.
    ///
    /// `NoMod` and undefined bits never appear.
    pub fn iter(&self) -> impl Iterator<Item = Mod> + '_ {
        Mod::iter().filter(move |m| self.contains(*m))
    }

    /// Parse a concatenated acronym string such as "HDDT".
    pub fn from_acronyms(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() % 2 != 0 || !s.is_ascii() {
            return Err(Error::UnknownMod(s.to_string()));
        }

        let mut mods = Mods::NONE;
        for i in (0..s.len()).step_by(2) {
            let acronym = &s[i..i + 2];
            match Mod::from_acronym(acronym) {
                Some(Mod::NoMod) => {}
                Some(m) => mods.insert(m),
                None => return Err(Error::UnknownMod(acronym.to_string())),
            }
        }
        Ok(mods)
    }
}

impl From<u32> for Mods {
    fn from(bits: u32) -> Self {
        Mods(bits)
    }
}

impl From<Mod> for Mods {
    fn from(m: Mod) -> Self {
        Mods(m.bits())
    }
}

impl BitOr for Mod {
    type Output = Mods;

    fn bitor(self, rhs: Mod) -> Mods {
        Mods(self.bits() | rhs.bits())
    }
}

impl BitOr<Mod> for Mods {
    type Output = Mods;

    fn bitor(self, rhs: Mod) -> Mods {
        Mods(self.0 | rhs.bits())
    }
}

impl BitOrAssign<Mod> for Mods {
    fn bitor_assign(&mut self, rhs: Mod) {
        self.insert(rhs);
    }
}

impl std::fmt::Display for Mods {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in self.iter() {
            f.write_str(m.acronym())?;
        }
        Ok(())
    }
}

pub fn individual_mods(mask: impl Into<Mods>) -> Vec<Mod> {
    mask.into().iter().collect()
}

pub fn format_mods(mask: impl Into<Mods>) -> String {
    mask.into().to_string()
}
