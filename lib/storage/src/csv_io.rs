//! CSV import and export of question tables
//!
//! Imported files must carry the four columns `class`, `chapter`,
//! `question`, `answer`. Headers are trimmed and compared case-insensitively;
//! column order does not matter and extra columns are ignored.

use biobot_core::{Error, QuestionTable, Record, Result, COLUMNS};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// File name offered for downloads
pub const EXPORT_FILE_NAME: &str = "bio_qa.csv";

/// Parse records from CSV; nothing is returned unless every row parses
pub fn import_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|column| headers.iter().position(|h| h == column))
        .collect();

    let missing: Vec<String> = COLUMNS
        .iter()
        .zip(&positions)
        .filter(|(_, pos)| pos.is_none())
        .map(|(column, _)| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing));
    }
    let positions: Vec<usize> = positions.into_iter().flatten().collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(csv_error)?;
        let field = |i: usize| row.get(positions[i]).unwrap_or_default().to_string();
        records.push(Record::new(field(0), field(1), field(2), field(3)));
    }
    Ok(records)
}

pub fn import_csv_file<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    import_csv(file)
}

/// Write the table with a `class,chapter,question,answer` header
pub fn export_csv<W: Write>(table: &QuestionTable, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(COLUMNS).map_err(csv_error)?;
    for record in table {
        csv_writer
            .write_record([&record.class, &record.chapter, &record.question, &record.answer])
            .map_err(csv_error)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn export_csv_string(table: &QuestionTable) -> Result<String> {
    let mut buf = Vec::new();
    export_csv(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Csv(e.to_string()))
}

fn csv_error(e: csv::Error) -> Error {
    Error::Csv(e.to_string())
}
