pub mod axis;
pub mod homography;

pub use axis::*;
pub use homography::*;

use log::debug;

use crate::config::{MappingConfig, MappingStrategy, ScreenConstants};
use crate::corners::{ScreenCorners, calibrate_corners};
use crate::error::MappingError;
use crate::geometry::PointF;
use crate::snapshot::{Point, Snapshot};

/// Entry point turning snapshots into cursor positions.
///
/// Holds only immutable configuration, so one mapper can be shared across
/// threads.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorMapper {
    pub config: MappingConfig,
    pub strategy: MappingStrategy,
}

impl CursorMapper {
    pub fn new(config: MappingConfig, strategy: MappingStrategy) -> CursorMapper {
        CursorMapper { config, strategy }
    }

    fn check_valid(&self, snapshot: &Snapshot) -> Result<(), MappingError> {
        if snapshot.is_valid_for(self.config.camera_max_unit) {
            Ok(())
        } else {
            Err(MappingError::InvalidSnapshot)
        }
    }

    /// Like [`CursorMapper::map_to_cursor`] but reports why a frame was
    /// skipped.
    pub fn try_map_to_cursor(
        &self,
        snapshot: &Snapshot,
        destination: &ScreenCorners,
    ) -> Result<PointF, MappingError> {
        self.check_valid(snapshot)?;
        match self.strategy {
            MappingStrategy::Axis => {
                let borders = compute_borders(snapshot, &self.config)?;
                cursor_from_borders(&borders, destination)
            }
            MappingStrategy::Homography => {
                let camera = calibrate_corners(snapshot, &self.config)?;
                map_center(&camera, destination, self.config.optical_center())
            }
        }
    }

    /// Cursor position for one snapshot, `None` when this frame has no cursor.
    pub fn map_to_cursor(
        &self,
        snapshot: &Snapshot,
        destination: &ScreenCorners,
    ) -> Option<PointF> {
        self.try_map_to_cursor(snapshot, destination)
            .inspect_err(|e| debug!("skipping {}: {}", snapshot, e))
            .ok()
    }

    pub fn try_map_to_borders(&self, snapshot: &Snapshot) -> Result<Borders, MappingError> {
        self.check_valid(snapshot)?;
        compute_borders(snapshot, &self.config)
    }

    /// Intermediate geometry of the axis engine, for drawing.
    pub fn map_to_borders(&self, snapshot: &Snapshot) -> Option<Borders> {
        self.try_map_to_borders(snapshot)
            .inspect_err(|e| debug!("no borders for {}: {}", snapshot, e))
            .ok()
    }

    /// Linear rescale of a raw point onto the screen, y inverted.
    ///
    /// No calibration is applied; this only overlays raw detections.
    pub fn map_debug_point(&self, raw: Point, screen: &ScreenConstants) -> PointF {
        let max_unit = self.config.camera_max_unit.max(1) as f32;
        let x = raw.x as f32 * screen.effective_width / max_unit;
        let y = raw.y as f32 * screen.effective_height / max_unit;
        PointF::new(x, screen.effective_height - y)
    }
}
