use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::search::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::mode::{GameMode, ModeFilter};
use crate::search::MapStatus;

const COVER_URL_BASE: &str = "https://assets.ppy.sh/beatmaps";
const PREVIEW_URL_BASE: &str = "https://b.ppy.sh/preview";

/// One playable chart of a beatmapset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    pub id: i64,
    pub name: String,
    pub star_rating: f64,
    pub creator: String,
    pub bpm: f64,
    pub cs: f64,
    pub ar: f64,
    pub od: f64,
    pub hp: f64,
    pub circles: u64,
    pub sliders: u64,
    pub spinners: u64,
    pub mode: GameMode,
    /// Seconds
    pub total_length: u64,
    pub max_combo: u64,
    pub plays: u64,
    pub passes: u64,
}

/// A beatmapset with its difficulties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeatmapDetails {
    pub set_id: i64,
    pub artist: String,
    pub title: String,
    pub creator: String,
    pub source: String,
    pub cover_url: String,
    pub audio_url: String,
    pub play_count: u64,
    pub favourite_count: u64,
    pub pass_count: u64,
    pub status: MapStatus,
    pub last_update: Option<DateTime<Utc>>,
    pub difficulties: Vec<Difficulty>,
}

impl BeatmapDetails {
    /// Empty set with the standard asset URLs filled in.
    pub fn new(set_id: i64) -> Self {
        Self {
            set_id,
            cover_url: format!("{}/{}/covers/cover.jpg", COVER_URL_BASE, set_id),
            audio_url: format!("{}/{}.mp3", PREVIEW_URL_BASE, set_id),
            ..Default::default()
        }
    }

    /// Highest star rating among the difficulties.
    pub fn max_star_rating(&self) -> f64 {
        self.difficulties
            .iter()
            .map(|d| d.star_rating)
            .fold(0.0, f64::max)
    }

    /// Difficulties sorted by mode, then star rating.
    pub fn sort_difficulties(&mut self) {
        self.difficulties.sort_by(|a, b| {
            a.mode
                .bpy_mode()
                .cmp(&b.mode.bpy_mode())
                .then(a.star_rating.total_cmp(&b.star_rating))
        });
    }
}

/// Which catalog to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Server {
    #[default]
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "osu!")]
    Osu,
    #[serde(rename = "all")]
    All,
}

impl Server {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Osu => "osu!",
            Self::All => "all",
        }
    }
}

impl std::fmt::Display for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Server {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "private" => Ok(Self::Private),
            "osu!" | "osu" | "bancho" => Ok(Self::Osu),
            "all" => Ok(Self::All),
            _ => Err(Error::UnknownServer(s.to_string())),
        }
    }
}

/// Origin of a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchSource {
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "osu!")]
    Osu,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "error")]
    Error,
}

impl From<Server> for SearchSource {
    fn from(server: Server) -> Self {
        match server {
            Server::Private => Self::Private,
            Server::Osu => Self::Osu,
            Server::All => Self::All,
        }
    }
}

impl std::fmt::Display for SearchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Private => "private",
            Self::Osu => "osu!",
            Self::All => "all",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text, may be empty
    pub query: String,
    pub mode: ModeFilter,
    pub status: Option<MapStatus>,
    pub server: Server,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: ModeFilter::All,
            status: None,
            server: Server::Private,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn mode(mut self, mode: impl Into<ModeFilter>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn status(mut self, status: MapStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn server(mut self, server: Server) -> Self {
        self.server = server;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page clamped to >= 1 and page size clamped to 1..=MAX_PAGE_SIZE.
    pub fn normalized(&self) -> Self {
        Self {
            query: self.query.trim().to_string(),
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            ..self.clone()
        }
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// One upstream's share of a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourcePage {
    pub results: Vec<BeatmapDetails>,
    pub has_more: bool,
    /// Estimated, upstreams do not report exact counts
    pub total: u64,
}

impl SourcePage {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<BeatmapDetails>,
    pub source: SearchSource,
    /// Estimated total; see [`SourcePage::total`]
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub has_more: bool,
    /// Upstream URLs queried, for diagnostics
    pub queried_urls: Vec<String>,
}

impl SearchResult {
    pub fn from_page(
        page: SourcePage,
        source: SearchSource,
        query: &SearchQuery,
        queried_urls: Vec<String>,
    ) -> Self {
        Self {
            results: page.results,
            source,
            total: page.total,
            page: query.page,
            page_size: query.page_size,
            has_more: page.has_more,
            queried_urls,
        }
    }

    pub fn error(query: &SearchQuery, queried_urls: Vec<String>) -> Self {
        Self::from_page(SourcePage::empty(), SearchSource::Error, query, queried_urls)
    }

    pub fn is_error(&self) -> bool {
        self.source == SearchSource::Error
    }
}

/// Parse the timestamp formats seen from upstreams.
pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_fills_asset_urls() {
        let set = BeatmapDetails::new(1_234);
        assert_eq!(set.cover_url, "https://assets.ppy.sh/beatmaps/1234/covers/cover.jpg");
        assert_eq!(set.audio_url, "https://b.ppy.sh/preview/1234.mp3");
        assert_eq!(set.max_star_rating(), 0.0);
    }

    #[test]
    fn test_sort_difficulties() {
        let mut set = BeatmapDetails::new(1);
        set.difficulties = vec![
            Difficulty {
                id: 1,
                star_rating: 5.0,
                mode: GameMode::Mania,
                ..Default::default()
            },
            Difficulty {
                id: 2,
                star_rating: 4.0,
                ..Default::default()
            },
            Difficulty {
                id: 3,
                star_rating: 2.0,
                ..Default::default()
            },
        ];
        set.sort_difficulties();

        let ids: Vec<i64> = set.difficulties.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(set.max_star_rating(), 5.0);
    }

    #[test]
    fn test_server_parsing() {
        assert_eq!("osu!".parse::<Server>().unwrap(), Server::Osu);
        assert_eq!("".parse::<Server>().unwrap(), Server::Private);
        assert_eq!("ALL".parse::<Server>().unwrap(), Server::All);
        assert!("gatari".parse::<Server>().is_err());
        assert_eq!(Server::Osu.to_string(), "osu!");
    }

    #[test]
    fn test_query_normalization() {
        let query = SearchQuery::new("  freedom dive ")
            .page(0)
            .page_size(10_000)
            .normalized();
        assert_eq!(query.query, "freedom dive");
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, MAX_PAGE_SIZE);
        assert_eq!(query.offset(), 0);

        let query = SearchQuery::new("").page(3).page_size(20);
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn test_error_result() {
        let query = SearchQuery::new("x").page(2);
        let result = SearchResult::error(&query, vec!["http://a".to_string()]);
        assert!(result.is_error());
        assert!(result.results.is_empty());
        assert!(!result.has_more);
        assert_eq!(result.page, 2);
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = Utc.with_ymd_and_hms(2023, 7, 1, 8, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2023-07-01T08:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2023-07-01 08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-07-01T08:30:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }
}
