//! Search relevance and ranking.
//!
//! Each query token scores once per record: the best match it finds in any field,
//! under any tier. Per-token maxima are summed into the record's score.

use super::corpus::SearchableRecord;
use super::similarity::similarity;
use super::tokenize::{tokenize, tokenize_all};

/// Fuzzy matches must be strictly more similar than this to count.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Values a field awards for each match tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    /// Query token equals a field word.
    pub exact: f64,
    /// One of the two contains the other.
    pub substring: f64,
    /// Multiplied by the similarity of a fuzzy match.
    pub fuzzy: f64,
}

pub const TITLE_WEIGHTS: FieldWeights = FieldWeights {
    exact: 10.0,
    substring: 7.0,
    fuzzy: 6.0,
};

pub const DESCRIPTION_WEIGHTS: FieldWeights = FieldWeights {
    exact: 5.0,
    substring: 3.0,
    fuzzy: 3.0,
};

pub const TAG_WEIGHTS: FieldWeights = FieldWeights {
    exact: 8.0,
    substring: 5.0,
    fuzzy: 4.0,
};

/// Value of the first applicable tier for a query token against one field word.
///
/// - exact equality: `weights.exact`
/// - containment either way: `weights.substring`
/// - similarity above [`FUZZY_THRESHOLD`]: `similarity * weights.fuzzy`
/// - otherwise 0
pub fn word_match(query: &str, word: &str, weights: FieldWeights) -> f64 {
    if query == word {
        weights.exact
    } else if word.contains(query) || query.contains(word) {
        weights.substring
    } else {
        let sim = similarity(query, word);
        if sim > FUZZY_THRESHOLD {
            sim * weights.fuzzy
        } else {
            0.0
        }
    }
}

/// Best match of `query` against any word of a field.
fn best_in_field(query: &str, words: &[String], weights: FieldWeights) -> f64 {
    words
        .iter()
        .map(|word| word_match(query, word, weights))
        .fold(0.0, f64::max)
}

/// Tokenized fields of one record.
struct RecordTokens {
    title: Vec<String>,
    description: Vec<String>,
    tags: Vec<String>,
}

impl RecordTokens {
    fn new(record: &SearchableRecord) -> Self {
        Self {
            title: tokenize(&record.title),
            description: tokenize(&record.description),
            tags: tokenize_all(&record.tags),
        }
    }

    /// One query token's single best contribution across all fields.
    fn best_match(&self, query: &str) -> f64 {
        best_in_field(query, &self.title, TITLE_WEIGHTS)
            .max(best_in_field(query, &self.description, DESCRIPTION_WEIGHTS))
            .max(best_in_field(query, &self.tags, TAG_WEIGHTS))
    }
}

/// Relevance of `record` for already-tokenized query words. Zero means no match.
///
/// A token matching strongly in several fields still contributes only its best value.
pub fn score(record: &SearchableRecord, query_tokens: &[String]) -> f64 {
    let tokens = RecordTokens::new(record);
    query_tokens
        .iter()
        .map(|query| tokens.best_match(query))
        .sum()
}
