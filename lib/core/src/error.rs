use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV must contain columns: class, chapter, question, answer (missing: {})", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Upload failed: {0}")]
    Csv(String),

    #[error("Upload failed: file is larger than {0} bytes")]
    UploadTooLarge(usize),

    #[error("No questions found for class '{class}' and chapter '{chapter}'")]
    EmptySelection { class: String, chapter: String },

    #[error("No question has been drawn yet")]
    NoActiveQuestion,

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
