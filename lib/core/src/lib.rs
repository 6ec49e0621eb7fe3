//! # BioBot Core
//!
//! Core library for BioBot, the biology exam helper bot and quiz.
//!
//! This crate provides the data model and the quiz flow:
//!
//! - [`Record`] - One question/answer tagged with class and chapter
//! - [`QuestionTable`] - Ordered, append-only table of records
//! - [`RecordFilter`] - Exact-match class/chapter filter with "All" support
//! - [`Dataset`] - The built-in question sets
//! - [`QuizDeck`] / [`QuizCard`] - Random draws from a class/chapter subset
//!
//! ## Example
//!
//! ```rust
//! use biobot_core::{Dataset, RecordFilter};
//!
//! let table = Dataset::Mdcat.table();
//! let genetics = table.select(&RecordFilter::from_labels(Some("12"), Some("Genetics")));
//! assert!(genetics.iter().all(|r| r.class == "12" && r.chapter == "Genetics"));
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod quiz;
pub mod record;
pub mod table;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use filter::{Filter, FilterOptions, RecordFilter, Selection, ALL};
pub use quiz::{QuizCard, QuizDeck};
pub use record::{Prompt, Record, COLUMNS};
pub use table::QuestionTable;
