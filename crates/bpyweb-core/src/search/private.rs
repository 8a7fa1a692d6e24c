//! bancho.py private server catalog (`GET /v2/maps/search`).

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::mode::GameMode;
use crate::network::{HttpClient, build_url};
use crate::search::lenient;
use crate::search::model::parse_timestamp;
use crate::search::{
    BeatmapDetails, BeatmapSource, Difficulty, MapStatus, SearchQuery, SearchSource, SourcePage,
};

const SEARCH_PATH: &str = "v2/maps/search";

#[derive(Debug, Deserialize)]
struct PrivateResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    status: String,
    #[serde(default, deserialize_with = "lenient::seq")]
    data: Vec<PrivateMap>,
}

/// One difficulty row; the API returns maps, not sets.
#[derive(Debug, Default, Deserialize)]
struct PrivateMap {
    #[serde(default, deserialize_with = "lenient::i64")]
    set_id: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    artist: String,
    #[serde(default, deserialize_with = "lenient::string")]
    title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    creator: String,
    #[serde(default, deserialize_with = "lenient::string")]
    source: String,
    #[serde(default, deserialize_with = "lenient::string")]
    version: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    diff: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    bpm: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    cs: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    ar: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    od: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    hp: f64,
    #[serde(default, deserialize_with = "lenient::i64")]
    mode: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    total_length: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    max_combo: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    plays: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    passes: i64,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    status: Option<i64>,
    #[serde(default, deserialize_with = "lenient::string")]
    last_update: String,
}

impl PrivateMap {
    fn to_difficulty(&self) -> Difficulty {
        Difficulty {
            id: self.id,
            name: self.version.clone(),
            star_rating: self.diff,
            creator: self.creator.clone(),
            bpm: self.bpm,
            cs: self.cs,
            ar: self.ar,
            od: self.od,
            hp: self.hp,
            mode: mode_or_default(self.mode, self.id),
            total_length: non_negative(self.total_length),
            max_combo: non_negative(self.max_combo),
            plays: non_negative(self.plays),
            passes: non_negative(self.passes),
            ..Default::default()
        }
    }
}

/// Client for the private server's map search.
pub struct PrivateApi {
    client: HttpClient,
    base_url: String,
}

impl PrivateApi {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl BeatmapSource for PrivateApi {
    fn source(&self) -> SearchSource {
        SearchSource::Private
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        search_url(&self.base_url, query)
    }

    fn search(&self, query: &SearchQuery) -> Result<SourcePage> {
        let url = self.search_url(query);
        let body = self.client.get(&url)?;
        parse_response(&url, &body, query)
    }
}

pub fn search_url(base_url: &str, query: &SearchQuery) -> String {
    let mut params: Vec<(&str, String)> = vec![
        ("page", query.page.to_string()),
        ("page_size", query.page_size.to_string()),
        ("server", "private".to_string()),
    ];
    if !query.query.is_empty() {
        params.push(("query", query.query.clone()));
    }
    if let Some(mode) = query.mode.mode() {
        params.push(("mode", mode.bpy_mode().to_string()));
    }
    if let Some(status) = query.status {
        params.extend(status.private_codes().into_iter().map(|c| ("status", c.to_string())));
    }

    build_url(base_url, SEARCH_PATH, &params)
}

/// Decode a search response and group its rows into beatmapsets.
pub fn parse_response(url: &str, body: &str, query: &SearchQuery) -> Result<SourcePage> {
    let response: PrivateResponse = serde_json::from_str(body)?;
    if !response.status.is_empty() && response.status != "success" {
        return Err(Error::UnexpectedResponse {
            url: url.to_string(),
            message: format!("status {:?}", response.status),
        });
    }

    let row_count = response.data.len();
    let allowed = query.status.map(|s| s.private_codes());

    let mut sets: Vec<BeatmapDetails> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in &response.data {
        if row.set_id <= 0 {
            warn!("Dropping map {} without a set id from {}", row.id, url);
            continue;
        }
        if let (Some(allowed), Some(code)) = (&allowed, row.status)
            && !allowed.contains(&code)
        {
            continue;
        }

        let slot = *index.entry(row.set_id).or_insert_with(|| {
            sets.push(new_set(row));
            sets.len() - 1
        });
        let set = &mut sets[slot];
        set.play_count += non_negative(row.plays);
        set.pass_count += non_negative(row.passes);
        set.difficulties.push(row.to_difficulty());
    }

    for set in &mut sets {
        set.sort_difficulties();
    }

    let has_more = row_count >= query.page_size as usize;
    let page = u64::from(query.page);
    let page_size = u64::from(query.page_size);
    let total = if has_more {
        (page + 1) * page_size
    } else {
        page * page_size
    };

    debug!("{} rows -> {} sets from {}", row_count, sets.len(), url);

    Ok(SourcePage {
        results: sets,
        has_more,
        total,
    })
}

fn new_set(row: &PrivateMap) -> BeatmapDetails {
    BeatmapDetails {
        artist: row.artist.clone(),
        title: row.title.clone(),
        creator: row.creator.clone(),
        source: row.source.clone(),
        status: row
            .status
            .map(MapStatus::from_private_code)
            .unwrap_or_default(),
        last_update: parse_timestamp(&row.last_update),
        ..BeatmapDetails::new(row.set_id)
    }
}

pub(crate) fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

pub(crate) fn mode_or_default(raw: i64, map_id: i64) -> GameMode {
    GameMode::try_from(raw).unwrap_or_else(|_| {
        warn!("Unknown mode {} on map {}, assuming standard", raw, map_id);
        GameMode::default()
    })
}
