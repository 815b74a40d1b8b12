//! Snapshot loading entry points.

use std::collections::HashMap;
use std::path::Path;

use board_model::{Ambassador, LoadState};
use tracing::{debug, error, info_span};

use crate::csv_snapshot::read_csv_snapshot;
use crate::error::{IngestError, Result};
use crate::json_snapshot::read_json_snapshot;

/// Snapshot file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Csv,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

/// Load and check a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Vec<Ambassador>> {
    let span = info_span!("load_snapshot", path = %path.display());
    let _guard = span.enter();
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let format = SnapshotFormat::from_path(path).ok_or_else(|| IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let ambassadors = match format {
        SnapshotFormat::Json => read_json_snapshot(path)?,
        SnapshotFormat::Csv => read_csv_snapshot(path)?,
    };
    check_snapshot(&ambassadors)?;
    debug!(?format, count = ambassadors.len(), "snapshot loaded");
    Ok(ambassadors)
}

/// Load a snapshot into a [`LoadState`], turning any error into `Failed`.
pub fn load_state(path: &Path) -> LoadState {
    match load_snapshot(path) {
        Ok(ambassadors) => LoadState::Loaded(ambassadors),
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to load snapshot");
            LoadState::Failed(err.to_string())
        }
    }
}

/// Check the per-snapshot invariants: non-empty names and unique emails.
pub fn check_snapshot(ambassadors: &[Ambassador]) -> Result<()> {
    if let Some(index) = ambassadors
        .iter()
        .position(|ambassador| ambassador.name.trim().is_empty())
    {
        return Err(IngestError::EmptyName { index });
    }
    check_unique_emails(ambassadors)
}

/// Reject snapshots where two records share an email, ignoring case.
pub fn check_unique_emails(ambassadors: &[Ambassador]) -> Result<()> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(ambassadors.len());
    for (index, ambassador) in ambassadors.iter().enumerate() {
        let key = ambassador.email.trim().to_lowercase();
        if let Some(&first) = seen.get(&key) {
            return Err(IngestError::DuplicateEmail {
                email: ambassador.email.clone(),
                first,
                second: index,
            });
        }
        seen.insert(key, index);
    }
    Ok(())
}
