use crate::csv_io::import_csv;
use biobot_core::quiz::{self, QuizDeck};
use biobot_core::{Dataset, Prompt, QuestionTable, QuizCard, Record, Result};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Per-user state: the working table and the quiz card on screen
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    dataset: Dataset,
    table: QuestionTable,
    builtin_rows: usize,
    card: Option<QuizCard>,
    created_at: DateTime<Utc>,
    // milliseconds since the epoch; updated under the manager's read lock
    last_access: AtomicI64,
}

/// Summary returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub dataset: Dataset,
    pub rows: usize,
    pub uploaded_rows: usize,
    pub created_at: DateTime<Utc>,
    pub last_access: DateTime<Utc>,
}

impl Session {
    pub fn new(dataset: Dataset, table: QuestionTable) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            dataset,
            builtin_rows: table.len(),
            table,
            card: None,
            created_at,
            last_access: AtomicI64::new(created_at.timestamp_millis()),
        }
    }

    /// Mark the session as used now
    pub fn touch(&self) {
        self.last_access.fetch_max(Utc::now().timestamp_millis(), Ordering::Relaxed);
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.last_access.load(Ordering::Relaxed)).unwrap_or(self.created_at)
    }

    /// Time since the last access, zero if the clock went backwards
    pub fn idle_for(&self, now: DateTime<Utc>) -> std::time::Duration {
        (now - self.last_access()).to_std().unwrap_or_default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn table(&self) -> &QuestionTable {
        &self.table
    }

    pub fn card(&self) -> Option<&QuizCard> {
        self.card.as_ref()
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            dataset: self.dataset,
            rows: self.table.len(),
            uploaded_rows: self.table.len() - self.builtin_rows,
            created_at: self.created_at,
            last_access: self.last_access(),
        }
    }

    /// Import a CSV upload and merge it; on any error the table is unchanged
    pub fn upload(&mut self, data: &[u8]) -> Result<usize> {
        let records = import_csv(data)?;
        let added = records.len();
        let total = self.table.merge(records);
        tracing::info!(session = %self.id, added, total, "merged uploaded questions");
        Ok(total)
    }

    /// Draw a new card from the class/chapter subset; replaces the current card
    pub fn next_question<R: Rng + ?Sized>(&mut self, class: &str, chapter: &str, rng: &mut R) -> Result<Prompt> {
        let deck = QuizDeck::new(&self.table, class, chapter)?;
        let card = deck.draw(rng)?;
        let prompt = card.prompt();
        self.card = Some(card);
        Ok(prompt)
    }

    pub fn show_answer(&mut self) -> Result<Record> {
        quiz::show_answer(self.card.as_mut())
    }
}
