//! Major directory view
//!
//! The catalog itself is the fixed [`MAJORS`] list; only the per-major
//! summary statistics come from the API. Stats are fetched independently
//! per major and a failing call is replaced by a zero-valued placeholder;
//! the directory never fails to render because one stats call failed.

use std::sync::Arc;

use futures::future;
use tracing::debug;

use crate::api::CatalogApi;
use crate::error::ClientResult;
use crate::majors::MAJORS;
use crate::models::MajorStats;
use crate::session::Session;
use crate::views::{FetchGate, Ticket};

/// One directory row: a major and its (possibly placeholder) stats
#[derive(Debug, Clone)]
pub struct MajorEntry {
    pub name: &'static str,
    pub stats: MajorStats,
}

/// Controller for the major directory screen
pub struct MajorDirectory {
    api: Arc<dyn CatalogApi>,
    entries: Vec<MajorEntry>,
    pub search: String,
    gate: FetchGate,
}

impl MajorDirectory {
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        MajorDirectory {
            api,
            entries: Vec::new(),
            search: String::new(),
            gate: FetchGate::default(),
        }
    }

    /// Fetch stats for every major in the catalog
    ///
    /// The calls run concurrently and independently; an error on one major
    /// is swallowed and that row gets zero-valued stats.
    pub async fn load(&mut self, session: &Session) -> ClientResult<()> {
        let ticket = self.begin_load();

        let fetches = MAJORS.iter().map(|&major| {
            let api = Arc::clone(&self.api);
            async move {
                let stats = match api.major_stats(major, session).await {
                    Ok(stats) => stats,
                    Err(e) => {
                        debug!("Stats fetch for {} failed, using placeholder: {}", major, e);
                        MajorStats::empty(major)
                    }
                };
                MajorEntry { name: major, stats }
            }
        });

        let entries = future::join_all(fetches).await;
        self.apply(ticket, entries);
        Ok(())
    }

    /// Stamp a directory load; a later load supersedes this one
    pub fn begin_load(&mut self) -> Ticket {
        self.gate.begin_superseding()
    }

    /// Apply a finished load unless it has been superseded
    pub fn apply(&mut self, ticket: Ticket, entries: Vec<MajorEntry>) -> bool {
        if !self.gate.settle(ticket) {
            debug!("Discarding stale major directory load");
            return false;
        }
        self.entries = entries;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.gate.is_loading()
    }

    pub fn entries(&self) -> &[MajorEntry] {
        &self.entries
    }

    /// Directory rows whose major name contains the search term,
    /// case-insensitively; an empty term matches everything
    pub fn filtered(&self) -> Vec<&MajorEntry> {
        let term = self.search.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&term))
            .collect()
    }
}
