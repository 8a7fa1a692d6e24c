use anyhow::Result;
use bpyweb_core::color::Rgb;
use bpyweb_core::format::format_accuracy;
use bpyweb_core::{GameMode, Grade, HitCounts, calculate_grade};

use super::{paint, parse_mods};

pub fn run(mode: GameMode, mods: &str, hits: HitCounts, accuracy: Option<f64>) -> Result<()> {
    let mods = parse_mods(mods)?;
    let accuracy = accuracy.unwrap_or_else(|| hits.accuracy(mode));
    let grade = Grade::or_unknown(calculate_grade(mode, mods, accuracy, &hits));

    let label = grade.display_name();
    let label = match Rgb::from_hex(grade.color()) {
        Ok(color) => paint(label, color),
        Err(_) => label.to_string(),
    };

    println!("{} ({}) at {} on {}", label, grade, format_accuracy(accuracy), mode);
    if !mods.is_empty() {
        println!("Mods: {}", mods);
    }
    Ok(())
}
