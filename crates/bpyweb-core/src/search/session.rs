use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::search::{BeatmapSearch, SearchQuery, SearchResult};

/// Identifies one search request within a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Beatmap search that discards responses superseded by a newer request.
///
/// Every request takes a ticket from a monotonically increasing generation
/// counter; a response is only delivered if no request was issued after it.
pub struct SearchSession {
    search: BeatmapSearch,
    generation: AtomicU64,
}

impl SearchSession {
    pub fn new(search: BeatmapSearch) -> Self {
        Self {
            search,
            generation: AtomicU64::new(0),
        }
    }

    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Run a search; `None` if a newer search started before this one finished.
    pub fn search(&self, query: &SearchQuery) -> Option<SearchResult> {
        let ticket = self.begin();
        let result = self.search.search_beatmapsets(query);

        if self.is_current(ticket) {
            Some(result)
        } else {
            debug!("Discarding stale search result for {:?}", query.query);
            None
        }
    }
}
