use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use indicatif::ParallelProgressIterator;
use log::{trace, warn};
use rayon::prelude::*;

use crate::corners::ScreenCorners;
use crate::error::IoError;
use crate::geometry::PointF;
use crate::mapping::CursorMapper;
use crate::snapshot::Snapshot;

/// Parses a recording, one snapshot per non-empty line.
///
/// Malformed lines become `sentinel` so frame indices follow the file.
pub fn load_recording<P: AsRef<Path>>(
    path: P,
    sentinel: Snapshot,
) -> Result<Vec<Snapshot>, IoError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let snapshots = contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse().unwrap_or_else(|e| {
                warn!("{}:{}: {}", path.display(), idx + 1, e);
                sentinel
            })
        })
        .collect();
    Ok(snapshots)
}

fn recording_filter(rp: glob::GlobResult) -> Option<PathBuf> {
    match rp {
        Ok(p) if p.is_file() => Some(p),
        _ => None,
    }
}

/// Loads every file matching `pattern`, in sorted path order.
pub fn load_recordings(
    pattern: &str,
    sentinel: Snapshot,
) -> Result<Vec<(PathBuf, Vec<Snapshot>)>, IoError> {
    let mut sorted_path: Vec<PathBuf> = glob(pattern)?.filter_map(recording_filter).collect();
    sorted_path.sort();
    sorted_path
        .into_iter()
        .map(|path| {
            trace!("loading {}", path.display());
            let snapshots = load_recording(&path, sentinel)?;
            Ok((path, snapshots))
        })
        .collect()
}

/// Maps every snapshot in parallel, keeping input order.
pub fn map_snapshots(
    mapper: &CursorMapper,
    snapshots: &[Snapshot],
    destination: &ScreenCorners,
) -> Vec<Option<PointF>> {
    snapshots
        .par_iter()
        .progress_count(snapshots.len() as u64)
        .map(|snapshot| mapper.map_to_cursor(snapshot, destination))
        .collect()
}
