//! JSON snapshots: the array returned by the ambassador collection endpoint.

use std::path::Path;

use board_model::Ambassador;

use crate::error::{IngestError, Result};

/// Parse a JSON array of ambassador records.
///
/// `path` only labels errors. Fields other than name, email and score are
/// ignored.
pub fn parse_json_snapshot(contents: &str, path: &Path) -> Result<Vec<Ambassador>> {
    serde_json::from_str(contents.trim_start_matches('\u{feff}')).map_err(|error| {
        IngestError::JsonParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    })
}

pub fn read_json_snapshot(path: &Path) -> Result<Vec<Ambassador>> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json_snapshot(&contents, path)
}
