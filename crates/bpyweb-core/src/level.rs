//! User level curve.
//!
//! Levels 1-100 follow the osu! cumulative score curve; every level past 100
//! costs a flat [`POST_CAP_INCREMENT`].

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub const LEVEL_CAP: u32 = 100;

/// Score needed for each level after 100.
pub const POST_CAP_INCREMENT: u64 = 99_999_999_999;

/// Cumulative score required for levels 1..=100 (index 0 is level 1).
static LEVEL_TABLE: LazyLock<Vec<u64>> =
    LazyLock::new(|| (1..=LEVEL_CAP).map(curve_score).collect());

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    /// Position between this level and the next, in [0, 1)
    pub progress: f64,
}

impl LevelInfo {
    /// Level with progress as a fraction, e.g. 42.37
    pub fn fractional(&self) -> f64 {
        f64::from(self.level) + self.progress
    }
}

fn curve_score(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }

    let n = u64::from(level);
    // n(4n+1)(n-1) is always divisible by 3
    let cubic = 5000 * (n * (4 * n + 1) * (n - 1) / 3);
    let exponential = (1.25 * 1.8f64.powi(level as i32 - 60)).round() as u64;
    cubic + exponential
}

/// Cumulative score required to reach `level`.
pub fn required_score(level: u32) -> u64 {
    match level {
        0 | 1 => 0,
        l if l <= LEVEL_CAP => LEVEL_TABLE[(l - 1) as usize],
        l => LEVEL_TABLE[(LEVEL_CAP - 1) as usize]
            .saturating_add(POST_CAP_INCREMENT.saturating_mul(u64::from(l - LEVEL_CAP))),
    }
}

pub fn user_level(score: u64) -> LevelInfo {
    let cap_score = LEVEL_TABLE[(LEVEL_CAP - 1) as usize];

    if score >= cap_score {
        let over = score - cap_score;
        let extra = over / POST_CAP_INCREMENT;
        let remainder = over % POST_CAP_INCREMENT;
        return LevelInfo {
            level: LEVEL_CAP.saturating_add(u32::try_from(extra).unwrap_or(u32::MAX)),
            progress: remainder as f64 / POST_CAP_INCREMENT as f64,
        };
    }

    // Entries at or below the score; level 1 (0 score) always qualifies.
    let level = LEVEL_TABLE.partition_point(|&required| required <= score);
    let current = LEVEL_TABLE[level - 1];
    let next = LEVEL_TABLE[level];

    LevelInfo {
        level: level as u32,
        progress: (score - current) as f64 / (next - current) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score() {
        let info = user_level(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.progress, 0.0);
    }

    #[test]
    fn test_exact_threshold() {
        let info = user_level(30_000);
        assert_eq!(info.level, 2);
        assert_eq!(info.progress, 0.0);

        let info = user_level(29_999);
        assert_eq!(info.level, 1);
        assert!(info.progress > 0.99 && info.progress < 1.0);
    }

    #[test]
    fn test_progress_midpoint() {
        // Level 2 -> 3 spans 30,000 -> 130,000
        let info = user_level(80_000);
        assert_eq!(info.level, 2);
        assert!((info.progress - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_table_is_monotonic() {
        assert_eq!(LEVEL_TABLE.len(), LEVEL_CAP as usize);
        assert!(LEVEL_TABLE.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(required_score(3), 130_000);
        assert_eq!(required_score(10), 6_150_000);
    }

    #[test]
    fn test_beyond_cap() {
        let cap = required_score(LEVEL_CAP);
        assert_eq!(user_level(cap).level, 100);

        let info = user_level(cap + POST_CAP_INCREMENT * 2 + POST_CAP_INCREMENT / 4);
        assert_eq!(info.level, 102);
        assert!((info.progress - 0.25).abs() < 1e-9);

        assert_eq!(required_score(101), cap + POST_CAP_INCREMENT);
    }

    #[test]
    fn test_huge_score_does_not_panic() {
        let info = user_level(u64::MAX);
        assert!(info.level > 100);
        assert!(info.progress < 1.0);
    }
}
