//! JSON helpers for problems and reports.
//!
//! - `read_json_file`: parse a deserializable value from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - [`ProblemFile`]: graph, candidate volumes and ground truth in one file.
use crate::crag::{Crag, CragDescription};
use crate::volume::{CragVolumes, LabelVolume};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the best-effort computation needs, as exported by a pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemFile {
    pub crag: CragDescription,
    pub volumes: CragVolumes,
    pub ground_truth: LabelVolume,
}

impl ProblemFile {
    /// Validate the graph and hand out its parts.
    pub fn into_parts(self) -> Result<(Crag, CragVolumes, LabelVolume), String> {
        let crag = self
            .crag
            .build()
            .map_err(|e| format!("Invalid graph: {e}"))?;
        Ok((crag, self.volumes, self.ground_truth))
    }
}

pub fn load_problem(path: &Path) -> Result<ProblemFile, String> {
    read_json_file(path)
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse JSON {}: {e}", path.display()))
}

/// Write `value` as pretty JSON, creating missing parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
