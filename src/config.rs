use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::PointF;
use crate::snapshot::{DEFAULT_CAMERA_MAX_UNIT, Snapshot};

/// Camera range and the physical constants used to calibrate corners.
///
/// `reference_spacing` and `target_width` must share a unit (centimeters in
/// the defaults); only their ratio matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    pub camera_max_unit: u16,
    /// Distance between the two IR markers of one sensor-bar pair.
    pub reference_spacing: f32,
    /// Physical width of the display being pointed at.
    pub target_width: f32,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            camera_max_unit: DEFAULT_CAMERA_MAX_UNIT,
            reference_spacing: 20.0,
            target_width: 59.8,
        }
    }
}

impl MappingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.camera_max_unit == 0 {
            return Err(ConfigError::ZeroCameraRange);
        }
        for (name, value) in [
            ("reference_spacing", self.reference_spacing),
            ("target_width", self.target_width),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// Fixed point where the sensor's optical axis meets the image plane.
    pub fn optical_center(&self) -> PointF {
        let half = self.camera_max_unit as f32 / 2.0;
        PointF::new(half, half)
    }

    pub fn sentinel(&self) -> Snapshot {
        Snapshot::invalid_for(self.camera_max_unit)
    }
}

/// Destination surface size in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConstants {
    pub effective_width: f32,
    pub effective_height: f32,
}

impl ScreenConstants {
    pub fn new(screen_width: u32, screen_height: u32, screen_scale: f32) -> ScreenConstants {
        ScreenConstants {
            effective_width: screen_width as f32 / screen_scale,
            effective_height: screen_height as f32 / screen_scale,
        }
    }
}

/// Which algorithm the cursor mapper runs.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum MappingStrategy {
    /// Border lines intersected with tilt-compensated camera axes.
    #[default]
    Axis,
    /// Perspective transform solved from the four corner correspondences.
    Homography,
}
