//! CLI argument definitions for bpyweb.

use std::path::PathBuf;

use bpyweb_core::mode::{GameMode, ModeFilter, RelaxMode};
use bpyweb_core::search::{MapStatus, Server};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bpyweb")]
#[command(about = "osu! private server beatmap search and score tools", version)]
pub struct Args {
    /// Load API settings from a TOML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Private server API base URL
    #[arg(long, env = "BPYWEB_API_URL")]
    pub api_url: Option<String>,

    /// Beatmap mirror base URL
    #[arg(long, env = "BPYWEB_MIRROR_URL")]
    pub mirror_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search beatmapsets on the private server, the mirror, or both
    Search {
        /// Free text query
        query: Option<String>,
        /// Mode filter (osu, taiko, catch, mania, rx!osu, ..., or all)
        #[arg(short, long, default_value = "all")]
        mode: ModeFilter,
        /// Ranked status filter (ranked, loved, ..., or all)
        #[arg(short, long)]
        status: Option<MapStatus>,
        /// Catalog to search (private, osu!, all)
        #[arg(long, default_value = "private")]
        server: Server,
        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Results per page
        #[arg(long, default_value = "50")]
        page_size: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve the backend mode number for a mode and relax combination
    Mode {
        /// Base mode (osu, taiko, catch, mania) or a composite mode name
        mode: GameMode,
        /// vanilla, relax or autopilot (defaults to vanilla, or to the
        /// relax mode a composite name implies)
        #[arg(short, long)]
        relax: Option<RelaxMode>,
    },
    /// Decode a mod mask or parse mod acronyms
    Mods {
        /// Mask (e.g. 72) or acronyms (e.g. HDDT)
        input: String,
    },
    /// Calculate the grade of a score
    Grade {
        #[arg(short, long, default_value = "osu")]
        mode: GameMode,
        /// Mod mask or acronyms
        #[arg(long, default_value = "")]
        mods: String,
        #[arg(long, default_value = "0")]
        n300: u32,
        #[arg(long, default_value = "0")]
        n100: u32,
        #[arg(long, default_value = "0")]
        n50: u32,
        #[arg(long, default_value = "0")]
        miss: u32,
        #[arg(long, default_value = "0")]
        geki: u32,
        #[arg(long, default_value = "0")]
        katu: u32,
        /// Accuracy percentage (computed from hits if omitted)
        #[arg(long)]
        accuracy: Option<f64>,
    },
    /// Show the level reached with a total score
    Level {
        score: u64,
    },
    /// Show the difficulty color of star ratings
    Color {
        #[arg(required = true)]
        stars: Vec<f64>,
    },
}
