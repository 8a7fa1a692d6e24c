use std::collections::HashSet;
use std::thread;

use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::error::Result;
use crate::network::HttpClient;
use crate::search::{
    MirrorApi, PrivateApi, SearchQuery, SearchResult, SearchSource, Server, SourcePage,
};

/// An upstream beatmap catalog.
pub trait BeatmapSource: Send + Sync {
    fn source(&self) -> SearchSource;

    /// URL that [`BeatmapSource::search`] would request, for diagnostics.
    fn search_url(&self, query: &SearchQuery) -> String;

    fn search(&self, query: &SearchQuery) -> Result<SourcePage>;
}

/// Outcome of querying one source. `page` is `None` when the source failed.
struct Fetch {
    url: String,
    page: Option<SourcePage>,
}

impl Fetch {
    fn failed(&self) -> bool {
        self.page.is_none()
    }

    fn into_page(self) -> SourcePage {
        self.page.unwrap_or_default()
    }
}

/// Beatmap search across the private server and the public mirror.
pub struct BeatmapSearch {
    private: Box<dyn BeatmapSource>,
    mirror: Box<dyn BeatmapSource>,
}

impl BeatmapSearch {
    pub fn new(config: &ApiConfig) -> Self {
        let client = HttpClient::new(config);
        Self {
            private: Box::new(PrivateApi::new(client.clone(), &config.private_api_url)),
            mirror: Box::new(MirrorApi::new(client, &config.mirror_url)),
        }
    }

    pub fn with_sources(private: Box<dyn BeatmapSource>, mirror: Box<dyn BeatmapSource>) -> Self {
        Self { private, mirror }
    }

    /// Search the catalog(s) selected by `query.server`.
    ///
    /// Never fails: a failing source contributes an empty page. A single-source
    /// search keeps that source's tag; under [`Server::All`] the result has
    /// source `error` only when both sources failed.
    pub fn search_beatmapsets(&self, query: &SearchQuery) -> SearchResult {
        let query = query.normalized();

        match query.server {
            Server::Private => self.search_single(self.private.as_ref(), &query),
            Server::Osu => self.search_single(self.mirror.as_ref(), &query),
            Server::All => self.search_all(&query),
        }
    }

    fn search_single(&self, source: &dyn BeatmapSource, query: &SearchQuery) -> SearchResult {
        let outcome = thread::scope(|s| {
            let handle = s.spawn(|| fetch(source, query));
            join_fetch(handle, source, query)
        });
        let urls = vec![outcome.url.clone()];

        SearchResult::from_page(outcome.into_page(), source.source(), query, urls)
    }

    fn search_all(&self, query: &SearchQuery) -> SearchResult {
        let (private, mirror) = thread::scope(|s| {
            let private = s.spawn(|| fetch(self.private.as_ref(), query));
            let mirror = s.spawn(|| fetch(self.mirror.as_ref(), query));
            (
                join_fetch(private, self.private.as_ref(), query),
                join_fetch(mirror, self.mirror.as_ref(), query),
            )
        });

        let urls = vec![private.url.clone(), mirror.url.clone()];
        if private.failed() && mirror.failed() {
            return SearchResult::error(query, urls);
        }

        let merged = merge_pages(private.into_page(), mirror.into_page());
        info!(
            "Merged search: {} sets, has_more={}, total~{}",
            merged.results.len(),
            merged.has_more,
            merged.total
        );
        SearchResult::from_page(merged, SearchSource::All, query, urls)
    }
}

/// Query one source, converting an error into a failed fetch.
///
/// Runs on a scoped thread; a panic is caught by [`join_fetch`].
fn fetch(source: &dyn BeatmapSource, query: &SearchQuery) -> Fetch {
    let url = source.search_url(query);

    let page = match source.search(query) {
        Ok(page) => Some(page),
        Err(e) => {
            warn!("Search on {} failed ({}): {}", source.source(), url, e);
            None
        }
    };

    Fetch { url, page }
}

/// Join a fetch thread; a panicked thread counts as a failed fetch.
fn join_fetch(
    handle: thread::ScopedJoinHandle<'_, Fetch>,
    source: &dyn BeatmapSource,
    query: &SearchQuery,
) -> Fetch {
    handle.join().unwrap_or_else(|_| {
        warn!("Search on {} panicked", source.source());
        Fetch {
            url: source.search_url(query),
            page: None,
        }
    })
}

/// Merge two pages: every private set is kept, mirror sets are appended only
/// when their set id is new. `has_more` is OR-ed and `total` is the larger
/// estimate.
pub fn merge_pages(private: SourcePage, mirror: SourcePage) -> SourcePage {
    let mut seen: HashSet<i64> = private.results.iter().map(|s| s.set_id).collect();
    let mut results = private.results;

    results.extend(
        mirror
            .results
            .into_iter()
            .filter(|set| seen.insert(set.set_id)),
    );

    SourcePage {
        results,
        has_more: private.has_more || mirror.has_more,
        total: private.total.max(mirror.total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BeatmapDetails;

    fn page(ids: &[i64], has_more: bool, total: u64) -> SourcePage {
        SourcePage {
            results: ids.iter().map(|&id| BeatmapDetails::new(id)).collect(),
            has_more,
            total,
        }
    }

    #[test]
    fn test_merge_dedups_by_set_id() {
        let mut private = page(&[1, 2], false, 2);
        private.results[1].title = "private".to_string();
        let mut mirror = page(&[2, 3], true, 40);
        mirror.results[0].title = "mirror".to_string();

        let merged = merge_pages(private, mirror);
        let ids: Vec<i64> = merged.results.iter().map(|s| s.set_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(merged.results[1].title, "private");
        assert!(merged.has_more);
        assert_eq!(merged.total, 40);
    }

    #[test]
    fn test_merge_dedups_within_mirror() {
        let merged = merge_pages(page(&[], false, 0), page(&[5, 5, 6], false, 3));
        let ids: Vec<i64> = merged.results.iter().map(|s| s.set_id).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_merge_empty() {
        let merged = merge_pages(SourcePage::empty(), SourcePage::empty());
        assert!(merged.results.is_empty());
        assert!(!merged.has_more);
        assert_eq!(merged.total, 0);
    }
}
