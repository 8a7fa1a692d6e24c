use anyhow::Result;
use bpyweb_core::{format_mods, individual_mods};

use super::parse_mods;

pub fn run(input: &str) -> Result<()> {
    let mods = parse_mods(input)?;

    if mods.is_empty() {
        println!("NM (mask 0)");
        return Ok(());
    }

    println!("{} (mask {})", format_mods(mods), mods.bits());
    for m in individual_mods(mods) {
        println!("  {:<2}  {:?}", m.acronym(), m);
    }
    Ok(())
}
