use crate::{Filter, FilterOptions, Record};
use std::collections::BTreeSet;

/// An ordered, append-only table of question records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionTable {
    records: Vec<Record>,
}

impl QuestionTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Append rows after the existing ones and return the new total
    pub fn merge(&mut self, records: impl IntoIterator<Item = Record>) -> usize {
        self.records.extend(records);
        self.records.len()
    }

    /// Rows matching the filter, in table order
    pub fn select(&self, filter: &dyn Filter) -> QuestionTable {
        let records = self
            .records
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        QuestionTable { records }
    }

    /// Sorted distinct class labels
    pub fn classes(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.class.as_str()))
    }

    /// Sorted distinct chapter labels
    pub fn chapters(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.chapter.as_str()))
    }

    /// Sorted distinct chapters among the rows of one class
    pub fn chapters_for_class(&self, class: &str) -> Vec<String> {
        distinct(
            self.records
                .iter()
                .filter(|r| r.class == class)
                .map(|r| r.chapter.as_str()),
        )
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::new(self.classes(), self.chapters())
    }

    /// Question texts in table order
    pub fn questions(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.question.as_str()).collect()
    }
}

impl From<Vec<Record>> for QuestionTable {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}

impl<'a> IntoIterator for &'a QuestionTable {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
