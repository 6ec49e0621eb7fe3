//! Random-question quiz flow.
//!
//! A [`QuizDeck`] is the class/chapter subset the user picked; every draw
//! comes from that subset. A [`QuizCard`] is the question currently on screen.

use crate::{Error, Prompt, QuestionTable, Record, RecordFilter, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Questions matching one class and one chapter exactly
#[derive(Debug, Clone)]
pub struct QuizDeck {
    class: String,
    chapter: String,
    records: QuestionTable,
}

impl QuizDeck {
    pub fn new(table: &QuestionTable, class: &str, chapter: &str) -> Result<Self> {
        let records = table.select(&RecordFilter::exact(class, chapter));
        if records.is_empty() {
            return Err(Error::EmptySelection {
                class: class.to_string(),
                chapter: chapter.to_string(),
            });
        }
        Ok(Self {
            class: class.to_string(),
            chapter: chapter.to_string(),
            records,
        })
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Uniform pick from the deck
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuizCard> {
        self.records
            .records()
            .choose(rng)
            .cloned()
            .map(QuizCard::new)
            .ok_or_else(|| Error::EmptySelection {
                class: self.class.clone(),
                chapter: self.chapter.clone(),
            })
    }
}

/// The question currently shown, with its answer hidden until revealed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCard {
    record: Record,
    revealed: bool,
}

impl QuizCard {
    pub fn new(record: Record) -> Self {
        Self { record, revealed: false }
    }

    pub fn prompt(&self) -> Prompt {
        self.record.prompt()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Reveal the answer and return the full record
    pub fn show_answer(&mut self) -> &Record {
        self.revealed = true;
        &self.record
    }

    pub fn record(&self) -> &Record {
        &self.record
    }
}

/// Reveal the answer of the card on screen, if any
pub fn show_answer(card: Option<&mut QuizCard>) -> Result<Record> {
    card.map(|c| c.show_answer().clone())
        .ok_or(Error::NoActiveQuestion)
}
