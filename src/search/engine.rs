//! Query orchestration: tokenize, aggregate, score, rank.

use super::corpus::{SearchableRecord, build_corpus};
use super::scoring::score;
use super::tokenize::tokenize;
use crate::content::ContentSource;
use crate::error::ContentError;
use serde::Serialize;

/// Hard cap on results returned for one query.
pub const MAX_RESULTS: usize = 20;

/// A record with its relevance for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: SearchableRecord,
    pub score: f64,
}

/// Ranks site content against free-text queries.
///
/// Holds no state between calls: every query re-reads the content source, so
/// concurrent queries share nothing but the source itself.
#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    source: S,
}

impl<S: ContentSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Up to [`MAX_RESULTS`] records with a positive score, best first.
    ///
    /// A blank query returns nothing without reading the content source. Equal
    /// scores keep corpus order (pages, posts, projects).
    pub fn search(&self, query: &str) -> Result<Vec<ScoredRecord>, ContentError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query_tokens = tokenize(query);
        let corpus = build_corpus(&self.source)?;
        let corpus_len = corpus.len();

        let mut results: Vec<ScoredRecord> = corpus
            .into_iter()
            .map(|record| {
                let score = score(&record, &query_tokens);
                ScoredRecord { record, score }
            })
            .filter(|scored| scored.score > 0.0)
            .collect();

        // `sort_by` is stable, so ties keep corpus order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(MAX_RESULTS);

        tracing::debug!(
            "Query {:?}: {} tokens, {} records, {} results",
            query,
            query_tokens.len(),
            corpus_len,
            results.len()
        );

        Ok(results)
    }
}
