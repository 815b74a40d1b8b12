//! CSV snapshots with a `name,email,score` header.

use std::path::Path;

use board_model::Ambassador;
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_ascii_lowercase()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn column_index(headers: &[String], column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })
}

/// Read a CSV snapshot.
///
/// Header matching is case-insensitive and extra columns are ignored.
/// Blank rows are skipped. Row numbers in errors are 1-based and count the
/// header as row 1.
pub fn read_csv_snapshot(path: &Path) -> Result<Vec<Ambassador>> {
    let csv_error = |error: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let name_idx = column_index(&headers, "name", path)?;
    let email_idx = column_index(&headers, "email", path)?;
    let score_idx = column_index(&headers, "score", path)?;

    let mut ambassadors = Vec::new();
    for (offset, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let row = offset + 2;
        let cell = |idx: usize| record.get(idx).map(normalize_cell).unwrap_or_default();
        let (name, email, score) = (cell(name_idx), cell(email_idx), cell(score_idx));
        if name.is_empty() && email.is_empty() && score.is_empty() {
            continue;
        }
        let score = score
            .parse::<u64>()
            .map_err(|_| IngestError::InvalidValue {
                field: "score".to_string(),
                value: score.clone(),
                row,
                path: path.to_path_buf(),
            })?;
        ambassadors.push(Ambassador { name, email, score });
    }
    Ok(ambassadors)
}
