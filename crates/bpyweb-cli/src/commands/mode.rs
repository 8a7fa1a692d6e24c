use anyhow::{Result, bail};
use bpyweb_core::mode::{GameMode, RelaxMode, game_mode_type, map_to_bpy_mode, original_game_mode};

pub fn run(mode: GameMode, relax: Option<RelaxMode>) -> Result<()> {
    let (base, relax) = resolve(mode, relax)?;

    let bpy_mode = map_to_bpy_mode(base, relax)?;
    let composed = GameMode::from_bpy_mode(bpy_mode).unwrap_or(base);

    println!("{} + {} = {} (bpy mode {})", base, relax, composed, bpy_mode);
    println!("Ruleset: {}", composed.display_name());
    Ok(())
}

/// Split `mode` into its base mode and relax mode.
///
/// A composite name already carries its relax mode, so `--relax` may only
/// repeat it.
fn resolve(mode: GameMode, relax: Option<RelaxMode>) -> Result<(GameMode, RelaxMode)> {
    if mode.is_base() {
        return Ok((mode, relax.unwrap_or_default()));
    }

    let implied = game_mode_type(mode);
    match relax {
        Some(relax) if relax != implied => bail!(
            "{} is already a {} mode; drop --relax {} or pass the base mode",
            mode, implied, relax
        ),
        _ => Ok((original_game_mode(mode), implied)),
    }
}
