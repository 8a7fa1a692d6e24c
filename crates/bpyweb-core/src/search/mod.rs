//! Beatmap search.
//!
//! This module unifies beatmap discovery across two upstreams:
//! - `PrivateApi` - the private server catalog (`/v2/maps/search`)
//! - `MirrorApi` - a public mirror of the official catalog (`/api/search`)
//!
//! `BeatmapSearch` queries one or both, normalizes their responses into
//! `BeatmapDetails`, deduplicates by set id and paginates. `SearchSession`
//! adds stale-response suppression on top.

mod aggregator;
mod lenient;
pub mod mirror;
mod model;
pub mod private;
mod session;
mod status;

pub use aggregator::*;
pub use mirror::MirrorApi;
pub use model::*;
pub use private::PrivateApi;
pub use session::*;
pub use status::*;
