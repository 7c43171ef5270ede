//! Map four-point IR sensor snapshots onto a cursor position on a display.
//!
//! The sensor reports four markers around the display. They are classified
//! into corners, scaled out to the display's real extent with a known marker
//! spacing, and the sensor's optical center is located inside the resulting
//! quadrilateral either by tilt-compensated axis intersection or through a
//! perspective transform.

pub mod config;
pub mod corners;
pub mod data_loader;
pub mod error;
pub mod geometry;
pub mod io;
pub mod mapping;
pub mod recorder;
pub mod sample_source;
pub mod snapshot;
pub mod visualization;

pub use config::{MappingConfig, MappingStrategy, ScreenConstants};
pub use corners::ScreenCorners;
pub use error::MappingError;
pub use geometry::{Line, LineSegment, PointF};
pub use mapping::{Borders, CursorMapper};
pub use snapshot::{Point, Snapshot};
