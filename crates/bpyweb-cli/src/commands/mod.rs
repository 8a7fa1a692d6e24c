//! Subcommand implementations.

pub mod color;
pub mod grade;
pub mod level;
pub mod mode;
pub mod mods;
pub mod search;

use anyhow::{Context, Result};
use bpyweb_core::Mods;
use bpyweb_core::color::Rgb;
use owo_colors::OwoColorize;

/// Parse a mod mask given as a number (`72`) or acronyms (`HDDT`).
pub fn parse_mods(input: &str) -> Result<Mods> {
    let input = input.trim();
    if let Ok(mask) = input.parse::<u32>() {
        return Ok(Mods(mask));
    }
    Mods::from_acronyms(input).with_context(|| format!("Invalid mods: {:?}", input))
}

/// Render `text` in `color`.
pub fn paint(text: &str, color: Rgb) -> String {
    text.truecolor(color.r, color.g, color.b).to_string()
}
