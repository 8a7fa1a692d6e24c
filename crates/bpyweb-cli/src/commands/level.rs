use anyhow::Result;
use bpyweb_core::format::format_number;
use bpyweb_core::{required_score, user_level};

pub fn run(score: u64) -> Result<()> {
    let info = user_level(score);
    let next = required_score(info.level.saturating_add(1));

    println!("Level {:.2}", info.fractional());
    println!(
        "{} / {} to level {} ({:.1}%)",
        format_number(score),
        format_number(next),
        info.level.saturating_add(1),
        info.progress * 100.0
    );
    Ok(())
}
