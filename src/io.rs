use std::io::Write;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::config::{MappingConfig, MappingStrategy};
use crate::error::IoError;
use crate::geometry::PointF;

/// Serializes an object to a JSON file.
pub fn object_to_json<T: Serialize, P: AsRef<Path>>(
    output_path: P,
    object: &T,
) -> Result<(), IoError> {
    let j = serde_json::to_string_pretty(object)?;
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(j.as_bytes())?;
    Ok(())
}

/// Deserializes an object from a JSON file.
pub fn object_from_json<T: DeserializeOwned, P: AsRef<Path>>(file_path: P) -> Result<T, IoError> {
    let contents = std::fs::read_to_string(file_path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Reads and validates a [`MappingConfig`]; missing fields keep their
/// defaults.
pub fn load_config<P: AsRef<Path>>(file_path: P) -> Result<MappingConfig, IoError> {
    let config: MappingConfig = object_from_json(file_path)?;
    config.validate()?;
    Ok(config)
}

/// Summary of a batch replay.
#[derive(Debug, serde::Serialize)]
pub struct ReplayReport {
    pub source: String,
    pub strategy: MappingStrategy,
    pub frames: usize,
    pub mapped: usize,
    pub skipped: usize,
    pub cursors: Vec<Option<[f32; 2]>>,
}

impl ReplayReport {
    pub fn new(
        source: &str,
        strategy: MappingStrategy,
        cursors: &[Option<PointF>],
    ) -> ReplayReport {
        let mapped = cursors.iter().filter(|c| c.is_some()).count();
        ReplayReport {
            source: source.to_string(),
            strategy,
            frames: cursors.len(),
            mapped,
            skipped: cursors.len() - mapped,
            cursors: cursors.iter().map(|c| c.map(|p| p.to_array())).collect(),
        }
    }
}

pub fn write_replay_report<P: AsRef<Path>>(
    output_path: P,
    report: &ReplayReport,
) -> Result<(), IoError> {
    object_to_json(output_path, report)
}
