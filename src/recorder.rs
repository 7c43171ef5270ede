use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::snapshot::Snapshot;

/// Appends snapshots to a text file, one `[(x,y),...]` line each.
pub struct Recorder {
    writer: BufWriter<File>,
    count: usize,
}

impl Recorder {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Recorder> {
        let file = File::create(path)?;
        Ok(Recorder {
            writer: BufWriter::new(file),
            count: 0,
        })
    }

    pub fn record(&mut self, snapshot: &Snapshot) -> std::io::Result<()> {
        writeln!(self.writer, "{}", snapshot)?;
        self.count += 1;
        Ok(())
    }

    /// Number of snapshots written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// `dir/recording_YYYYMMDD_HHMMSS.txt`, stamped with local time when the
/// offset is known and UTC otherwise.
pub fn default_recording_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let name = format!(
        "recording_{:04}{:02}{:02}_{:02}{:02}{:02}.txt",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    dir.as_ref().join(name)
}
