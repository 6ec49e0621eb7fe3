use serde::{Deserialize, Serialize};

/// Column names every question table carries, in export order.
pub const COLUMNS: [&str; 4] = ["class", "chapter", "question", "answer"];

/// A single question/answer record tagged with its class and chapter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub class: String,
    pub chapter: String,
    pub question: String,
    pub answer: String,
}

impl Record {
    #[inline]
    #[must_use]
    pub fn new(
        class: impl Into<String>,
        chapter: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            chapter: chapter.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The question with its answer hidden, as shown before "show answer"
    pub fn prompt(&self) -> Prompt {
        Prompt {
            class: self.class.clone(),
            chapter: self.chapter.clone(),
            question: self.question.clone(),
        }
    }
}

/// A record without its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub class: String,
    pub chapter: String,
    pub question: String,
}
