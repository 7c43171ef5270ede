use clap::{Args, Parser, Subcommand};
use ir_cursor_mapping::data_loader::{load_recordings, map_snapshots};
use ir_cursor_mapping::io::{ReplayReport, load_config, write_replay_report};
use ir_cursor_mapping::recorder::{Recorder, default_recording_path};
use ir_cursor_mapping::sample_source::{PlaybackSource, SampleSource, SimulatedSource};
use ir_cursor_mapping::visualization::log_frame;
use ir_cursor_mapping::{
    CursorMapper, MappingConfig, MappingStrategy, ScreenConstants, ScreenCorners, Snapshot,
};
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct IrCursorCli {
    #[command(flatten)]
    mapping: MappingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MappingArgs {
    /// mapping algorithm
    #[arg(long, value_enum, default_value = "axis", global = true)]
    strategy: MappingStrategy,

    /// JSON file with camera range and physical constants
    #[arg(long, global = true)]
    config: Option<String>,

    /// destination width in pixels
    #[arg(long, default_value = "1920", global = true)]
    width: u32,

    /// destination height in pixels
    #[arg(long, default_value = "1080", global = true)]
    height: u32,

    /// pixels per drawing unit
    #[arg(long, default_value = "1.0", global = true)]
    scale: f32,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a single snapshot, e.g. "[(100,100),(900,100),(100,800),(900,800)]"
    Map { snapshot: String },

    /// Map every snapshot of one or more recordings
    Replay {
        /// file or glob pattern
        pattern: String,

        /// write a JSON summary here
        #[arg(long)]
        report: Option<String>,

        /// save a rerun recording of the replay here
        #[arg(long)]
        rrd: Option<String>,
    },

    /// Pull samples from a playback file or the simulator and map them live
    Stream {
        /// recording to loop over; the simulator is used when absent
        #[arg(long)]
        playback: Option<String>,

        #[arg(long)]
        fps: Option<u32>,

        #[arg(long, default_value = "600")]
        frames: usize,

        /// also write every sample to this file, or to a time-stamped file
        /// when given a directory
        #[arg(long)]
        record: Option<String>,

        /// simulator noise amplitude in camera units
        #[arg(long, default_value = "0")]
        jitter: u16,

        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = IrCursorCli::parse();

    let config = match &cli.mapping.config {
        Some(path) => load_config(path)?,
        None => MappingConfig::default(),
    };
    let mapper = CursorMapper::new(config, cli.mapping.strategy);
    let screen = ScreenConstants::new(cli.mapping.width, cli.mapping.height, cli.mapping.scale);
    let destination = ScreenCorners::from(screen);

    match cli.command {
        Commands::Map { snapshot } => {
            let snapshot: Snapshot = snapshot.parse()?;
            match mapper.try_map_to_cursor(&snapshot, &destination) {
                Ok(cursor) => println!("{:.3} {:.3}", cursor.x, cursor.y),
                Err(e) => println!("no cursor: {}", e),
            }
        }
        Commands::Replay {
            pattern,
            report,
            rrd,
        } => {
            let recording = match &rrd {
                Some(path) => Some(rerun::RecordingStreamBuilder::new("ir-cursor").save(path)?),
                None => None,
            };
            let mut all_cursors = Vec::new();
            for (path, snapshots) in load_recordings(&pattern, config.sentinel())? {
                let now = Instant::now();
                let cursors = map_snapshots(&mapper, &snapshots, &destination);
                let duration_sec = now.elapsed().as_secs_f64();
                let mapped = cursors.iter().filter(|c| c.is_some()).count();
                info!(
                    "{}: mapped {}/{} frames in {:.6} sec",
                    path.display(),
                    mapped,
                    cursors.len(),
                    duration_sec
                );
                if let Some(recording) = &recording {
                    let topic = path.file_stem().map_or_else(
                        || "recording".to_string(),
                        |s| s.to_string_lossy().into_owned(),
                    );
                    for (idx, (snapshot, cursor)) in snapshots.iter().zip(&cursors).enumerate() {
                        let borders = mapper.map_to_borders(snapshot);
                        log_frame(
                            recording,
                            &topic,
                            idx as i64,
                            snapshot,
                            borders.as_ref(),
                            *cursor,
                        )?;
                    }
                }
                all_cursors.extend(cursors);
            }
            if let Some(path) = report {
                let summary = ReplayReport::new(&pattern, mapper.strategy, &all_cursors);
                write_replay_report(&path, &summary)?;
                info!("report written to {}", path);
            }
        }
        Commands::Stream {
            playback,
            fps,
            frames,
            record,
            jitter,
            seed,
        } => {
            let mut source: Box<dyn SampleSource> = match &playback {
                Some(path) => {
                    Box::new(PlaybackSource::open(path, fps)?.with_sentinel(config.sentinel()))
                }
                None => Box::new(
                    SimulatedSource::new(config.camera_max_unit).with_jitter(seed, jitter),
                ),
            };
            let mut recorder = match &record {
                Some(path) if Path::new(path).is_dir() => {
                    Some(Recorder::create(default_recording_path(path))?)
                }
                Some(path) => Some(Recorder::create(PathBuf::from(path))?),
                None => None,
            };
            for _ in 0..frames {
                let snapshot = source.next_snapshot();
                if let Some(recorder) = recorder.as_mut() {
                    recorder.record(&snapshot)?;
                }
                match mapper.map_to_cursor(&snapshot, &destination) {
                    Some(cursor) => println!("{} -> {:.3} {:.3}", snapshot, cursor.x, cursor.y),
                    None => println!("{} -> -", snapshot),
                }
            }
            if let Some(mut recorder) = recorder {
                recorder.flush()?;
                info!("recorded {} snapshots", recorder.count());
            }
        }
    }
    Ok(())
}
