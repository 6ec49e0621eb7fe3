//! Best-match lookup for free-text questions
//!
//! Fits a TF-IDF index over the question texts of the (already filtered)
//! table, ranks every question against the query and accepts the best one
//! only when its score clears the threshold.

use crate::tfidf::TfidfIndex;
use biobot_core::{QuestionTable, Record};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_THRESHOLD: f32 = 0.12;

pub const EMPTY_QUERY_MESSAGE: &str = "Enter a Biology question above.";
pub const NO_RECORDS_MESSAGE: &str = "No questions match the selected class and chapter.";
pub const NO_MATCH_MESSAGE: &str = "No close match found. Try rephrasing.";

/// A record with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub score: f32,
    #[serde(flatten)]
    pub record: Record,
}

/// Outcome of a free-text lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    EmptyQuery { message: String },
    NoRecords { message: String },
    NoMatch { message: String, best_score: f32 },
    Match { best: ScoredRecord, related: Vec<ScoredRecord> },
}

impl Lookup {
    pub fn is_match(&self) -> bool {
        matches!(self, Lookup::Match { .. })
    }

    /// Answer of the best match, if any
    pub fn answer(&self) -> Option<&str> {
        match self {
            Lookup::Match { best, .. } => Some(&best.record.answer),
            _ => None,
        }
    }
}

/// Ranks stored questions against a free-text query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retriever {
    pub top_k: usize,
    pub threshold: f32,
}

impl Default for Retriever {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Retriever {
    pub fn new(top_k: usize, threshold: f32) -> Self {
        Self { top_k, threshold }
    }

    /// Top-k records by score, highest first; ties keep table order
    pub fn rank(&self, query: &str, table: &QuestionTable) -> Vec<ScoredRecord> {
        if table.is_empty() || query.trim().is_empty() {
            return Vec::new();
        }

        let index = TfidfIndex::fit(&table.questions());
        let mut scored: Vec<(usize, f32)> = index.scores(query).into_iter().enumerate().collect();
        // stable sort keeps table order among equal scores
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(self.top_k);

        scored
            .into_iter()
            .filter_map(|(i, score)| {
                table.get(i).map(|record| ScoredRecord {
                    score,
                    record: record.clone(),
                })
            })
            .collect()
    }

    pub fn lookup(&self, query: &str, table: &QuestionTable) -> Lookup {
        // whitespace-only input counts as blank, not as a failed match
        if query.trim().is_empty() {
            return Lookup::EmptyQuery {
                message: EMPTY_QUERY_MESSAGE.to_string(),
            };
        }
        if table.is_empty() {
            return Lookup::NoRecords {
                message: NO_RECORDS_MESSAGE.to_string(),
            };
        }

        let related = self.rank(query, table);
        match related.first() {
            Some(best) if best.score > self.threshold => Lookup::Match {
                best: best.clone(),
                related,
            },
            best => Lookup::NoMatch {
                message: NO_MATCH_MESSAGE.to_string(),
                best_score: best.map(|b| b.score).unwrap_or(0.0),
            },
        }
    }
}
