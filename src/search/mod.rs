//! Relevance search over the site's pages, posts and projects.
//!
//! Pure pieces (tokenizer, similarity, scorer) are composed by [`SearchEngine`],
//! which rebuilds the corpus from its [`ContentSource`](crate::content::ContentSource)
//! on every query.

pub mod corpus;
pub mod engine;
pub mod scoring;
pub mod similarity;
pub mod tokenize;

pub use corpus::{RecordKind, SearchableRecord, build_corpus};
pub use engine::{MAX_RESULTS, ScoredRecord, SearchEngine};
pub use scoring::score;
pub use similarity::similarity;
pub use tokenize::tokenize;
