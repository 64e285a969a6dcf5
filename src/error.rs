use std::path::PathBuf;

/// Exit status for bad arguments and malformed data.
pub const EXIT_MALFORMED_INPUT: i32 = 1;
/// Exit status for a calibration or image file that cannot be opened.
pub const EXIT_MISSING_RESOURCE: i32 = 2;
/// Exit status for region or calibration tables that overflow their limit.
pub const EXIT_CAPACITY_EXCEEDED: i32 = 3;
/// Exit status for codec and write failures.
pub const EXIT_IO_FAILURE: i32 = 4;

/// Errors that can occur while loading inputs or running detection.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("could not open {}: {source}", path.display())]
    MissingResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("too many {what}: limit is {limit}")]
    CapacityExceeded { what: &'static str, limit: usize },

    #[error("no saturated pixels in the {size}x{size} calibration window")]
    EmptyCalibrationWindow { size: u32 },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DetectError {
    /// Process exit status for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            DetectError::MalformedInput(_)
            | DetectError::EmptyCalibrationWindow { .. }
            | DetectError::Json(_) => EXIT_MALFORMED_INPUT,
            DetectError::MissingResource { .. } => EXIT_MISSING_RESOURCE,
            DetectError::CapacityExceeded { .. } => EXIT_CAPACITY_EXCEEDED,
            DetectError::Image(_) | DetectError::Io(_) => EXIT_IO_FAILURE,
        }
    }
}
