//! Color-based object detection in still images.
//!
//! A run thresholds an RGB image against an ordered list of calibration
//! profiles, labels the 4-connected regions of the resulting mask, votes on
//! each region's profile from its central window, and reports bounding boxes.

pub mod calibration;
pub mod classify;
pub mod color;
pub mod config;
pub mod error;
pub mod labeling;
pub mod pipeline;
pub mod raster;
pub mod render;
pub mod report;
pub mod test_image_gen;
pub mod threshold;

pub use calibration::{CalibrationFile, CalibrationProfile, calibrate, load_calibrations, parse_calibrations};
pub use classify::Detection;
pub use config::{DetectConfig, VoteRounding};
pub use error::DetectError;
pub use pipeline::{DetectionRun, detect};
