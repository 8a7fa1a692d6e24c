use anyhow::Result;
use bpyweb_core::difficulty_color;

use super::paint;

/// Print a truecolor swatch per star rating
pub fn run(stars: &[f64]) -> Result<()> {
    for &rating in stars {
        let color = difficulty_color(rating);
        println!("{} {:>5.2}* {}", paint("████", color), rating, color);
    }
    Ok(())
}
