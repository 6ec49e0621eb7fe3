//! # BioBot Similarity
//!
//! Free-text question matching for the helper bot.
//!
//! ## Features
//!
//! - **Analyzer**: lowercase words, English stop words removed, unigrams + bigrams
//! - **TF-IDF**: smoothed IDF, L2-normalised sparse rows
//! - **Retriever**: top-k ranking with an acceptance threshold
//!
//! ## Example
//!
//! ```rust
//! use biobot_core::Dataset;
//! use biobot_similarity::Retriever;
//!
//! let table = Dataset::Mdcat.table();
//! let lookup = Retriever::default().lookup("Where does glycolysis occur?", &table);
//! assert_eq!(lookup.answer(), Some("Cytoplasm"));
//! ```

pub mod distance;
pub mod retrieve;
pub mod tfidf;
pub mod tokenizer;

pub use distance::{cosine_similarity, SparseVector};
pub use retrieve::{Lookup, Retriever, ScoredRecord, DEFAULT_THRESHOLD, DEFAULT_TOP_K};
pub use tfidf::TfidfIndex;
