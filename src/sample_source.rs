use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;
use std::thread;
use std::time::Duration;

use log::warn;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::snapshot::{DEFAULT_CAMERA_MAX_UNIT, Point, Snapshot};

/// Rough time one mapping call takes, subtracted from the playback frame
/// interval.
const MAPPING_BUDGET: Duration = Duration::from_micros(70);

/// Supplies one snapshot per call.
///
/// Failures are reported as the sentinel snapshot so the mapper's validity
/// check is the only place frames get rejected.
pub trait SampleSource {
    fn next_snapshot(&mut self) -> Snapshot;
}

/// Replays a recording line by line, looping at end of file.
pub struct PlaybackSource {
    reader: BufReader<File>,
    line: String,
    frame_interval: Option<Duration>,
    sentinel: Snapshot,
}

impl PlaybackSource {
    /// Opens `path`; with `fps` set each call sleeps to keep that rate.
    pub fn open<P: AsRef<Path>>(path: P, fps: Option<u32>) -> std::io::Result<PlaybackSource> {
        let file = File::open(path)?;
        let frame_interval = fps
            .filter(|fps| *fps > 0)
            .map(|fps| (Duration::from_secs(1) / fps).saturating_sub(MAPPING_BUDGET));
        Ok(PlaybackSource {
            reader: BufReader::new(file),
            line: String::new(),
            frame_interval,
            sentinel: Snapshot::invalid(),
        })
    }

    /// Sentinel returned for unreadable lines; defaults to the 1023 camera.
    pub fn with_sentinel(mut self, sentinel: Snapshot) -> PlaybackSource {
        self.sentinel = sentinel;
        self
    }

    fn read_line(&mut self) -> std::io::Result<usize> {
        self.line.clear();
        let read = self.reader.read_line(&mut self.line)?;
        if read > 0 {
            return Ok(read);
        }
        self.reader.seek(SeekFrom::Start(0))?;
        self.reader.read_line(&mut self.line)
    }
}

impl SampleSource for PlaybackSource {
    fn next_snapshot(&mut self) -> Snapshot {
        if let Some(interval) = self.frame_interval {
            thread::sleep(interval);
        }
        match self.read_line() {
            Ok(0) => self.sentinel,
            Ok(_) => self.line.trim().parse().unwrap_or_else(|e| {
                warn!("unreadable playback line {:?}: {}", self.line.trim(), e);
                self.sentinel
            }),
            Err(e) => {
                warn!("playback read failed: {}", e);
                self.sentinel
            }
        }
    }
}

const SQUARE_SIZE: u16 = 50;
const FRAMES_PER_SIDE: u16 = SQUARE_SIZE * 3;

/// Synthetic target: a small square walking clockwise along the border of
/// the camera range.
pub struct SimulatedSource {
    counter: u16,
    max_unit: u16,
    jitter: Option<(ChaCha8Rng, i32)>,
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_MAX_UNIT)
    }
}

impl SimulatedSource {
    pub fn new(max_unit: u16) -> SimulatedSource {
        SimulatedSource {
            counter: 0,
            max_unit: max_unit.max(SQUARE_SIZE + 1),
            jitter: None,
        }
    }

    /// Adds uniform noise of up to `amplitude` units to every coordinate.
    pub fn with_jitter(mut self, seed: u64, amplitude: u16) -> SimulatedSource {
        self.jitter = Some((ChaCha8Rng::seed_from_u64(seed), amplitude as i32));
        self
    }

    /// Noise-free square at frame `t`, listed top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn square_at(&self, t: u16) -> Snapshot {
        let point_max = self.max_unit - SQUARE_SIZE;
        let step_width = point_max / FRAMES_PER_SIDE;
        let side = t % (FRAMES_PER_SIDE * 4) / FRAMES_PER_SIDE;
        let step = (t % FRAMES_PER_SIDE) * step_width;
        let (x, y) = match side {
            0 => (step, 0),
            1 => (point_max, step),
            2 => (point_max - step, point_max),
            _ => (0, point_max - step),
        };
        Snapshot::new([
            Point::new(x, y),
            Point::new(x + SQUARE_SIZE, y),
            Point::new(x + SQUARE_SIZE, y + SQUARE_SIZE),
            Point::new(x, y + SQUARE_SIZE),
        ])
    }

    fn perturb(&mut self, snapshot: Snapshot) -> Snapshot {
        let Some((rng, amplitude)) = self.jitter.as_mut() else {
            return snapshot;
        };
        let upper = self.max_unit as i32 - 1;
        let mut shake = |v: u16| -> u16 {
            let noise = rng.random_range(-*amplitude..=*amplitude);
            (v as i32 + noise).clamp(0, upper) as u16
        };
        Snapshot::new(snapshot.points.map(|p| Point::new(shake(p.x), shake(p.y))))
    }
}

impl SampleSource for SimulatedSource {
    fn next_snapshot(&mut self) -> Snapshot {
        let snapshot = self.square_at(self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.perturb(snapshot)
    }
}
