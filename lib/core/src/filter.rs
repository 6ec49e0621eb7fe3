// Class/chapter filters for question tables
use crate::Record;
use serde::{Deserialize, Serialize};

/// Label shown for the "no filter" entry of a dropdown
pub const ALL: &str = "All";

pub trait Filter {
    fn matches(&self, record: &Record) -> bool;
}

/// One dropdown selection: either everything or one exact label
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Exact(String),
}

impl Selection {
    /// Parse a dropdown value. An empty value and `"All"` select everything;
    /// any other label is kept verbatim, surrounding whitespace included.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL) => Selection::All,
            Some(label) => Selection::Exact(label.to_string()),
        }
    }

    #[inline]
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Exact(expected) => expected == label,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Exact(label) => label,
        }
    }
}

/// Filter on class and chapter; a record must satisfy both
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub class: Selection,
    pub chapter: Selection,
}

impl RecordFilter {
    pub fn new(class: Selection, chapter: Selection) -> Self {
        Self { class, chapter }
    }

    /// Build from raw dropdown values
    pub fn from_labels(class: Option<&str>, chapter: Option<&str>) -> Self {
        Self::new(Selection::parse(class), Selection::parse(chapter))
    }

    /// Exact match on both labels, no "All" handling
    pub fn exact(class: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self::new(Selection::Exact(class.into()), Selection::Exact(chapter.into()))
    }

    pub fn is_unfiltered(&self) -> bool {
        self.class == Selection::All && self.chapter == Selection::All
    }
}

impl Filter for RecordFilter {
    fn matches(&self, record: &Record) -> bool {
        self.class.matches(&record.class) && self.chapter.matches(&record.chapter)
    }
}

/// Dropdown contents: `"All"` followed by the sorted distinct labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub classes: Vec<String>,
    pub chapters: Vec<String>,
}

impl FilterOptions {
    pub fn new(classes: Vec<String>, chapters: Vec<String>) -> Self {
        Self {
            classes: with_all(classes),
            chapters: with_all(chapters),
        }
    }
}

fn with_all(labels: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(labels.len() + 1);
    options.push(ALL.to_string());
    options.extend(labels);
    options
}
