//! # BioBot
//!
//! Biology exam helper bot and quiz for 11th/12th (F.Sc) and MDCAT students.
//!
//! - **Helper bot**: type a question, get the stored answer of the closest
//!   matching question (TF-IDF over word unigrams and bigrams, cosine score)
//!   plus the top related questions.
//! - **Quiz**: draw a random question from a class/chapter, then reveal its answer.
//! - **Data**: built-in question tables, CSV upload merge and CSV download.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! biobot --http-port 8501 --import extra_questions.csv
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use biobot::prelude::*;
//!
//! let table = Dataset::Mdcat.table();
//! let subset = table.select(&RecordFilter::from_labels(Some("MDCAT"), Some("All")));
//! let lookup = Retriever::default().lookup("Where does glycolysis occur?", &subset);
//! assert_eq!(lookup.answer(), Some("Cytoplasm"));
//! ```
//!
//! ## Crate Structure
//!
//! - `biobot-core` - Records, tables, filters, built-in datasets, quiz draws
//! - `biobot-similarity` - Tokenizer, TF-IDF index and best-match lookup
//! - `biobot-storage` - CSV import/export and per-client sessions
//! - `biobot-api` - REST API

pub use biobot_core::{
    Dataset, Error, Filter, FilterOptions, Prompt, QuestionTable, QuizCard, QuizDeck, Record,
    RecordFilter, Result, Selection,
};

pub use biobot_similarity::{Lookup, Retriever, ScoredRecord, TfidfIndex};

pub use biobot_storage::{
    export_csv, export_csv_string, import_csv, import_csv_file, Session, SessionInfo,
    SessionManager,
};

pub use biobot_api::{AppState, RestApi};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Dataset, Error, Filter, Lookup, QuestionTable, QuizDeck, Record, RecordFilter, Result,
        Retriever, SessionManager,
    };
}
