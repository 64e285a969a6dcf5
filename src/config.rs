use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DetectError;

pub const SATURATION_THRESHOLD: i32 = 50;
pub const VALUE_THRESHOLD: i32 = 30;
pub const MIN_BOX_WIDTH: u32 = 20;
pub const MIN_BOX_HEIGHT: u32 = 20;
pub const MAX_REGIONS: usize = 1024;
pub const MAX_CALIBRATIONS: usize = 10;
pub const CALIBRATION_WINDOW: u32 = 50;
pub const BOX_COLOR: [u8; 3] = [255, 0, 0];

/// How the mean class tag of a region's sampled window is turned into a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteRounding {
    /// Round half away from zero.
    #[default]
    Nearest,
    /// Drop the fractional part.
    Truncate,
}

/// Configuration parameters for a detection run.
///
/// The saturation and value thresholds are shared by every calibration
/// profile; the per-profile minimums in the calibration file are carried but
/// not consulted during detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    pub saturation_threshold: i32,
    pub value_threshold: i32,
    pub min_box_width: u32,
    pub min_box_height: u32,
    pub max_regions: usize,
    pub max_calibrations: usize,
    pub calibration_window: u32,
    pub vote_rounding: VoteRounding,
    pub box_color: [u8; 3],
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            saturation_threshold: SATURATION_THRESHOLD,
            value_threshold: VALUE_THRESHOLD,
            min_box_width: MIN_BOX_WIDTH,
            min_box_height: MIN_BOX_HEIGHT,
            max_regions: MAX_REGIONS,
            max_calibrations: MAX_CALIBRATIONS,
            calibration_window: CALIBRATION_WINDOW,
            vote_rounding: VoteRounding::Nearest,
            box_color: BOX_COLOR,
        }
    }
}

impl DetectConfig {
    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, DetectError> {
        let text = std::fs::read_to_string(path).map_err(|source| DetectError::MissingResource {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DetectError> {
        Ok(serde_json::from_str(text)?)
    }
}
