//! Domain core for a bancho.py community site: osu! mode and mod mapping,
//! grades, levels, difficulty colors, formatting and beatmap search across
//! the private server and a public mirror.

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod mode;
pub mod mods;
pub mod network;
pub mod score;
pub mod search;

pub use color::{Rgb, difficulty_color};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use level::{LevelInfo, required_score, user_level};
pub use mode::{
    GameMode, ModeFilter, RelaxMode, game_mode_type, is_real_game_mode, map_to_bpy_mode,
    original_game_mode,
};
pub use mods::{Mod, Mods, format_mods, individual_mods};
pub use network::HttpClient;
pub use score::{Grade, HitCounts, calculate_grade};
pub use search::{
    BeatmapDetails, BeatmapSearch, BeatmapSource, Difficulty, MapStatus, SearchQuery,
    SearchResult, SearchSession, SearchSource, SearchTicket, Server, SourcePage,
};
