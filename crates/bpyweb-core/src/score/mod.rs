//! Score-related types.
//!
//! - `Grade` - letter grades (XH, X, SH, S, A, B, C, D, F)
//! - `HitCounts` - hit statistics and accuracy
//! - `calculate_grade` - grade from mode, mods and hits

mod grade;
mod hits;

pub use grade::*;
pub use hits::*;
