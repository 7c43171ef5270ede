use std::num::ParseIntError;

/// Reasons a single snapshot could not be mapped to a cursor.
///
/// None of these are fatal: the caller skips the frame and tries again with
/// the next sample.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("snapshot carries no detection")]
    InvalidSnapshot,
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
    #[error("points do not classify into four distinct corners")]
    AmbiguousCorners,
    #[error("linear system is singular")]
    SingularSystem,
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors produced while decoding the `[(x,y),(x,y),(x,y),(x,y)]` text form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSnapshotError {
    #[error("snapshot must be enclosed in `[` and `]`")]
    MissingBrackets,
    #[error("malformed point `{0}`")]
    MalformedPoint(String),
    #[error("invalid coordinate `{value}`")]
    InvalidCoordinate {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("expected 4 points, got {0}")]
    WrongPointCount(usize),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("camera_max_unit must be positive")]
    ZeroCameraRange,
    #[error("{name} must be a positive finite number, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Errors raised by the file based helpers in [`crate::io`] and
/// [`crate::data_loader`].
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
