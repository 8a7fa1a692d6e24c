//! Public beatmap mirror (cheesegull-style `GET /api/search`).

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::network::{HttpClient, build_url};
use crate::search::lenient;
use crate::search::model::parse_timestamp;
use crate::search::private::{mode_or_default, non_negative};
use crate::search::{
    BeatmapDetails, BeatmapSource, Difficulty, MapStatus, SearchQuery, SearchSource, SourcePage,
};

const SEARCH_PATH: &str = "api/search";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MirrorSet {
    #[serde(rename = "SetID", default, deserialize_with = "lenient::i64")]
    set_id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    artist: String,
    #[serde(default, deserialize_with = "lenient::string")]
    title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    creator: String,
    #[serde(default, deserialize_with = "lenient::string")]
    source: String,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    ranked_status: Option<i64>,
    #[serde(default, deserialize_with = "lenient::i64")]
    favourites: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    last_update: String,
    #[serde(default, deserialize_with = "lenient::seq")]
    children_beatmaps: Vec<MirrorBeatmap>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MirrorBeatmap {
    #[serde(rename = "BeatmapID", default, deserialize_with = "lenient::i64")]
    beatmap_id: i64,
    #[serde(default, deserialize_with = "lenient::string")]
    diff_name: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    difficulty_rating: f64,
    #[serde(rename = "BPM", default, deserialize_with = "lenient::f64")]
    bpm: f64,
    #[serde(rename = "CS", default, deserialize_with = "lenient::f64")]
    cs: f64,
    #[serde(rename = "AR", default, deserialize_with = "lenient::f64")]
    ar: f64,
    #[serde(rename = "OD", default, deserialize_with = "lenient::f64")]
    od: f64,
    #[serde(rename = "HP", default, deserialize_with = "lenient::f64")]
    hp: f64,
    #[serde(default, deserialize_with = "lenient::i64")]
    mode: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    total_length: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    max_combo: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    count_normal: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    count_slider: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    count_spinner: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    playcount: i64,
    #[serde(default, deserialize_with = "lenient::i64")]
    passcount: i64,
}

impl MirrorBeatmap {
    fn to_difficulty(&self, creator: &str) -> Difficulty {
        Difficulty {
            id: self.beatmap_id,
            name: self.diff_name.clone(),
            star_rating: self.difficulty_rating,
            creator: creator.to_string(),
            bpm: self.bpm,
            cs: self.cs,
            ar: self.ar,
            od: self.od,
            hp: self.hp,
            circles: non_negative(self.count_normal),
            sliders: non_negative(self.count_slider),
            spinners: non_negative(self.count_spinner),
            mode: mode_or_default(self.mode, self.beatmap_id),
            total_length: non_negative(self.total_length),
            max_combo: non_negative(self.max_combo),
            plays: non_negative(self.playcount),
            passes: non_negative(self.passcount),
        }
    }
}

impl MirrorSet {
    fn into_details(self) -> BeatmapDetails {
        let difficulties: Vec<Difficulty> = self
            .children_beatmaps
            .iter()
            .map(|b| b.to_difficulty(&self.creator))
            .collect();

        let mut details = BeatmapDetails {
            artist: self.artist,
            title: self.title,
            creator: self.creator,
            source: self.source,
            play_count: difficulties.iter().map(|d| d.plays).sum(),
            pass_count: difficulties.iter().map(|d| d.passes).sum(),
            favourite_count: non_negative(self.favourites),
            status: self
                .ranked_status
                .map(MapStatus::from_mirror_code)
                .unwrap_or_default(),
            last_update: parse_timestamp(&self.last_update),
            difficulties,
            ..BeatmapDetails::new(self.set_id)
        };
        details.sort_difficulties();
        details
    }
}

/// Client for the public mirror's search endpoint.
pub struct MirrorApi {
    client: HttpClient,
    base_url: String,
}

impl MirrorApi {
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl BeatmapSource for MirrorApi {
    fn source(&self) -> SearchSource {
        SearchSource::Osu
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
        ("amount", query.page_size.to_string()),
        ("offset", query.offset().to_string()),
    ];
    if !query.query.is_empty() {
        params.push(("query", query.query.clone()));
    }
    if let Some(mode) = query.mode.mode() {
        // the mirror only knows vanilla rulesets
        params.push(("mode", mode.original().bpy_mode().to_string()));
    }
    if let Some(status) = query.status {
        params.extend(status.mirror_codes().into_iter().map(|c| ("status", c.to_string())));
    }

    build_url(base_url, SEARCH_PATH, &params)
}

pub fn parse_response(url: &str, body: &str, query: &SearchQuery) -> Result<SourcePage> {
    // Some mirrors answer an empty search with `null`.
    let sets: Option<Vec<MirrorSet>> = serde_json::from_str(body)?;
    let sets = sets.unwrap_or_default();

    let set_count = sets.len();
    let allowed = query.status.map(|s| s.mirror_codes());

    let results: Vec<BeatmapDetails> = sets
        .into_iter()
        .filter(|set| {
            if set.set_id <= 0 {
                warn!("Dropping set without an id from {}", url);
                return false;
            }
            match (&allowed, set.ranked_status) {
                (Some(allowed), Some(code)) => allowed.contains(&code),
                _ => true,
            }
        })
        .map(MirrorSet::into_details)
        .collect();

    let has_more = set_count >= query.page_size as usize;
    let total = query.offset() + set_count as u64 + u64::from(has_more);

    debug!("{} sets ({} kept) from {}", set_count, results.len(), url);

    Ok(SourcePage {
        results,
        has_more,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::GameMode;

    const URL: &str = "https://mirror.test/api/search";

    fn set(id: i64, status: i64) -> serde_json::Value {
        serde_json::json!({
            "SetID": id,
            "Artist": "Camellia",
            "Title": format!("song {id}"),
            "Creator": "Mapper",
            "RankedStatus": status,
            "LastUpdate": "2021-06-01T00:00:00Z",
            "ChildrenBeatmaps": [
                {
                    "BeatmapID": id * 10 + 1,
                    "DiffName": "Extra",
                    "DifficultyRating": 6.5,
                    "BPM": 200,
                    "Mode": 0,
                    "TotalLength": 180,
                    "Playcount": 100,
                    "Passcount": 20,
                    "CountNormal": 500,
                    "CountSlider": 200,
                    "CountSpinner": 1
                },
                {
                    "BeatmapID": id * 10 + 2,
                    "DiffName": "Hard",
                    "DifficultyRating": "3.2",
                    "BPM": 200,
                    "Mode": 0,
                    "TotalLength": 180,
                    "Playcount": 50,
                    "Passcount": 30
                }
            ]
        })
    }

    #[test]
    fn test_search_url() {
        let query = SearchQuery::new("")
            .mode(GameMode::RelaxCatch)
            .status(MapStatus::Ranked)
            .page(3)
            .page_size(20);
        assert_eq!(
            search_url("https://mirror.test", &query),
            "https://mirror.test/api/search?amount=20&offset=40&mode=2&status=1"
        );

        let query = SearchQuery::new("tt").status(MapStatus::All).page_size(5);
        assert_eq!(
            search_url("https://mirror.test", &query),
            "https://mirror.test/api/search?amount=5&offset=0&query=tt\
             &status=-2&status=-1&status=0&status=1&status=2&status=3&status=4"
        );
    }

    #[test]
    fn test_parse_sets() {
        let body = serde_json::json!([set(1, 1), set(2, 4)]).to_string();
        let query = SearchQuery::new("").page_size(50);

        let page = parse_response(URL, &body, &query).unwrap();
        assert_eq!(page.results.len(), 2);
        assert!(!page.has_more);
        assert_eq!(page.total, 2);

        let first = &page.results[0];
        assert_eq!(first.set_id, 1);
        assert_eq!(first.status, MapStatus::Ranked);
        assert_eq!(first.play_count, 150);
        assert_eq!(first.pass_count, 50);
        assert_eq!(first.difficulties[0].name, "Hard");
        assert_eq!(first.difficulties[0].star_rating, 3.2);
        assert_eq!(first.difficulties[1].circles, 500);
        assert_eq!(first.difficulties[1].creator, "Mapper");
        assert_eq!(page.results[1].status, MapStatus::Loved);
    }

    #[test]
    fn test_pagination_estimate() {
        let body = serde_json::json!([set(1, 1), set(2, 1)]).to_string();
        let query = SearchQuery::new("").page(4).page_size(2);

        let page = parse_response(URL, &body, &query).unwrap();
        assert!(page.has_more);
        assert_eq!(page.total, 6 + 2 + 1);
    }

    #[test]
    fn test_status_filter_and_missing_id() {
        let body = serde_json::json!([set(1, 1), set(2, -2), { "Title": "no id" }]).to_string();
        let query = SearchQuery::new("").status(MapStatus::Ranked);

        let page = parse_response(URL, &body, &query).unwrap();
        let ids: Vec<i64> = page.results.iter().map(|s| s.set_id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_null_body_and_null_children() {
        let page = parse_response(URL, "null", &SearchQuery::default()).unwrap();
        assert!(page.results.is_empty());
        assert!(!page.has_more);

        let body = r#"[{"SetID": 9, "ChildrenBeatmaps": null}]"#;
        let page = parse_response(URL, body, &SearchQuery::default()).unwrap();
        assert!(page.results[0].difficulties.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let body = r#"{"error":"rate limited"}"#;
        assert!(parse_response(URL, body, &SearchQuery::default()).is_err());
    }
}
