use rerun::{RecordingStream, RecordingStreamResult, TimeCell};

use crate::geometry::{LineSegment, PointF};
use crate::mapping::Borders;
use crate::snapshot::Snapshot;

/// Stable colour for a sensor point index.
pub fn index_to_color(idx: usize) -> rerun::Color {
    let c = colorous::CATEGORY10[idx % colorous::CATEGORY10.len()];
    rerun::Color::from_rgb(c.r, c.g, c.b)
}

/// rerun use top left corner as (0, 0)
pub fn rerun_shift(p2ds: &[(f32, f32)]) -> Vec<(f32, f32)> {
    p2ds.iter().map(|(x, y)| (*x + 0.5, *y + 0.5)).collect()
}

fn segment_strip(segment: &LineSegment) -> [[f32; 2]; 2] {
    [segment.p1.to_array(), segment.p2.to_array()]
}

/// Logs one frame: raw points and border geometry in camera space, cursor in
/// screen space. Missing borders or cursor clear the previous frame's.
pub fn log_frame(
    recording: &RecordingStream,
    topic: &str,
    frame_idx: i64,
    snapshot: &Snapshot,
    borders: Option<&Borders>,
    cursor: Option<PointF>,
) -> RecordingStreamResult<()> {
    recording.set_time("frame", TimeCell::from_sequence(frame_idx));

    let raw: Vec<_> = snapshot.points.iter().map(|p| (p.x as f32, p.y as f32)).collect();
    recording.log(
        format!("{}/camera/raw", topic),
        &rerun::Points2D::new(rerun_shift(&raw))
            .with_colors((0..raw.len()).map(index_to_color))
            .with_radii([rerun::Radius::new_ui_points(5.0)]),
    )?;

    match borders {
        Some(borders) => {
            let (border_segments, axis_segments) = borders.segments.split_at(4);
            recording.log(
                format!("{}/camera/borders", topic),
                &rerun::LineStrips2D::new(border_segments.iter().map(segment_strip)),
            )?;
            recording.log(
                format!("{}/camera/axes", topic),
                &rerun::LineStrips2D::new(axis_segments.iter().map(segment_strip))
                    .with_colors([rerun::Color::from_rgb(255, 64, 64)]),
            )?;
        }
        None => {
            recording.log(format!("{}/camera/borders", topic), &rerun::Clear::flat())?;
            recording.log(format!("{}/camera/axes", topic), &rerun::Clear::flat())?;
        }
    }

    match cursor {
        Some(cursor) => recording.log(
            format!("{}/screen/cursor", topic),
            &rerun::Points2D::new([cursor.to_array()])
                .with_radii([rerun::Radius::new_ui_points(8.0)])
                .with_labels(["cursor"]),
        ),
        None => recording.log(format!("{}/screen/cursor", topic), &rerun::Clear::flat()),
    }
}
