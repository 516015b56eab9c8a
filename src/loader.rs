//! Workload loading from JSON.
//!
//! Input is an array of process records:
//!
//! ```json
//! [
//!   { "id": "P1", "arrival_time": 0, "burst_time": 5 },
//!   { "id": "P2", "arrival_time": 1, "burst_time": 3 }
//! ]
//! ```
//!
//! Records are taken as-is; range checks happen in
//! [`validation`](crate::validation) when a run starts.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::models::Workload;

/// Reads and parses a workload file.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Workload, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let workload = parse_workload(&contents)?;
    debug!(path = %path.display(), processes = workload.len(), "loaded workload");
    Ok(workload)
}

/// Parses a workload from a JSON string.
pub fn parse_workload(json: &str) -> Result<Workload, LoadError> {
    Ok(serde_json::from_str(json)?)
}
