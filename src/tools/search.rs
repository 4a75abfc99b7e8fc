//! Search request handling shared by the HTTP and MCP boundaries.

use crate::content::ContentSource;
use crate::search::{ScoredRecord, SearchEngine};
use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; blank returns no results
    #[serde(default)]
    pub query: String,
}

/// Body returned to callers. Always present, even on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ScoredRecord>,
}

/// Whether the search ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Ok,
    /// Content could not be read; the response is empty.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub response: SearchResponse,
}

impl SearchOutcome {
    /// The empty response reported when the search could not run.
    pub fn failed() -> Self {
        Self {
            status: SearchStatus::Failed,
            response: SearchResponse::default(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == SearchStatus::Ok
    }
}

/// Run a search, converting any content failure into an empty failed outcome.
pub fn handle_search<S: ContentSource>(
    engine: &SearchEngine<S>,
    request: &SearchRequest,
) -> SearchOutcome {
    match engine.search(&request.query) {
        Ok(results) => SearchOutcome {
            status: SearchStatus::Ok,
            response: SearchResponse { results },
        },
        Err(e) => {
            tracing::error!("Search for {:?} failed: {}", request.query, e);
            SearchOutcome::failed()
        }
    }
}
