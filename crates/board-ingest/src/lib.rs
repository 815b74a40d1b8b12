pub mod csv_snapshot;
pub mod error;
pub mod json_snapshot;
pub mod snapshot;

pub use csv_snapshot::read_csv_snapshot;
pub use error::{IngestError, Result};
pub use json_snapshot::{parse_json_snapshot, read_json_snapshot};
pub use snapshot::{SnapshotFormat, check_snapshot, check_unique_emails, load_snapshot, load_state};
