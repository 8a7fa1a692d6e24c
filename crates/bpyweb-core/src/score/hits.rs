use serde::{Deserialize, Serialize};

use crate::mode::GameMode;

/// Hit statistics of a single score.
///
/// `geki` and `katu` carry mode specific meaning (MAX/200 in mania, missed
/// droplets in catch) and are ignored by the standard family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitCounts {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub miss: u32,
    #[serde(default)]
    pub geki: u32,
    #[serde(default)]
    pub katu: u32,
}

impl HitCounts {
    pub fn new(n300: u32, n100: u32, n50: u32, miss: u32) -> Self {
        Self {
            n300,
            n100,
            n50,
            miss,
            ..Default::default()
        }
    }

    /// Object count used by the standard grade thresholds
    pub fn total_objects(&self) -> u64 {
        [self.n300, self.n100, self.n50, self.miss]
            .into_iter()
            .map(u64::from)
            .sum()
    }

    /// Accuracy percentage (0-100) for the given mode.
    ///
    /// Scores with no judged objects have 0% accuracy.
    pub fn accuracy(&self, mode: GameMode) -> f64 {
        let n300 = f64::from(self.n300);
        let n100 = f64::from(self.n100);
        let n50 = f64::from(self.n50);
        let miss = f64::from(self.miss);
        let geki = f64::from(self.geki);
        let katu = f64::from(self.katu);

        let (hit, total) = match mode.original() {
            GameMode::Taiko => (n300 + n100 * 0.5, n300 + n100 + miss),
            GameMode::Catch => (n300 + n100 + n50, n300 + n100 + n50 + katu + miss),
            GameMode::Mania => (
                (geki + n300) * 300.0 + katu * 200.0 + n100 * 100.0 + n50 * 50.0,
                (geki + n300 + katu + n100 + n50 + miss) * 300.0,
            ),
            _ => (
                n300 * 300.0 + n100 * 100.0 + n50 * 50.0,
                (n300 + n100 + n50 + miss) * 300.0,
            ),
        };

        if total <= 0.0 {
            0.0
        } else {
            hit / total * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_accuracy() {
        let hits = HitCounts::new(100, 0, 0, 0);
        assert_eq!(hits.accuracy(GameMode::Standard), 100.0);

        let hits = HitCounts::new(2, 1, 0, 1);
        let acc = hits.accuracy(GameMode::RelaxStandard);
        assert!((acc - 700.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_taiko_accuracy() {
        let hits = HitCounts::new(1, 2, 0, 1);
        assert!((hits.accuracy(GameMode::Taiko) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_mania_accuracy_counts_geki() {
        let hits = HitCounts {
            geki: 10,
            ..HitCounts::new(10, 0, 0, 0)
        };
        assert_eq!(hits.accuracy(GameMode::Mania), 100.0);
    }

    #[test]
    fn test_zero_objects() {
        let hits = HitCounts::default();
        assert_eq!(hits.accuracy(GameMode::Standard), 0.0);
        assert_eq!(hits.accuracy(GameMode::Catch), 0.0);
        assert_eq!(hits.total_objects(), 0);
    }

    #[test]
    fn test_total_objects_past_u32() {
        let hits = HitCounts::new(u32::MAX, 1, 0, 0);
        assert_eq!(hits.total_objects(), u64::from(u32::MAX) + 1);

        let hits = HitCounts::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(hits.total_objects(), u64::from(u32::MAX) * 4);
    }
}
