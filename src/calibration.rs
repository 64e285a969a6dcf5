//! Calibration profiles: the plain-text file format and calibration mode.

use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::color::{hue_difference, hue_midpoint, rgb_to_hsv};
use crate::config::DetectConfig;
use crate::error::DetectError;

const PROFILE_FIELDS: usize = 5;

/// A named hue window used to recognise one class of object.
///
/// Index in the loaded list doubles as the object type stamped on mask pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationProfile {
    pub name: String,
    pub hue_mid: i32,
    pub max_hue_diff: i32,
    pub min_saturation: i32,
    pub min_value: i32,
    /// Tokens after the fifth field, kept verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl CalibrationProfile {
    /// Formats the profile as one calibration-file line.
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{} {} {} {} {}",
            self.name, self.hue_mid, self.max_hue_diff, self.min_saturation, self.min_value
        );
        for token in &self.extra {
            line.push(' ');
            line.push_str(token);
        }
        line
    }
}

impl fmt::Display for CalibrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Hue: {} (Max. Diff: {}), Min. SV: {} {}",
            self.name, self.hue_mid, self.max_hue_diff, self.min_saturation, self.min_value
        )
    }
}

/// A calibration line that was skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_number, self.reason, self.content)
    }
}

/// Result of parsing a calibration file: profiles in file order plus the
/// lines that could not be used.
#[derive(Debug, Clone, Default)]
pub struct CalibrationFile {
    pub profiles: Vec<CalibrationProfile>,
    pub malformed: Vec<MalformedLine>,
}

fn parse_field(token: &str, field: &str) -> Result<i32, String> {
    token
        .parse::<i32>()
        .map_err(|_| format!("{field} is not an integer: {token}"))
}

fn parse_line(line: &str) -> Result<CalibrationProfile, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < PROFILE_FIELDS {
        return Err(format!(
            "expected {PROFILE_FIELDS} fields, found {}",
            tokens.len()
        ));
    }
    Ok(CalibrationProfile {
        name: tokens[0].to_string(),
        hue_mid: parse_field(tokens[1], "hue_mid")?,
        max_hue_diff: parse_field(tokens[2], "max_hue_diff")?,
        min_saturation: parse_field(tokens[3], "min_saturation")?,
        min_value: parse_field(tokens[4], "min_value")?,
        extra: tokens[PROFILE_FIELDS..].iter().map(|t| t.to_string()).collect(),
    })
}

/// Parses calibration text, one profile per line.
///
/// Malformed lines are logged and skipped; more than `max_profiles` usable
/// lines is a capacity error.
pub fn parse_calibrations(text: &str, max_profiles: usize) -> Result<CalibrationFile, DetectError> {
    let mut out = CalibrationFile::default();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(profile) => {
                if out.profiles.len() == max_profiles {
                    return Err(DetectError::CapacityExceeded {
                        what: "calibration profiles",
                        limit: max_profiles,
                    });
                }
                out.profiles.push(profile);
            }
            Err(reason) => {
                let malformed = MalformedLine {
                    line_number: idx + 1,
                    content: line.to_string(),
                    reason,
                };
                log::warn!("skipping malformed calibration {malformed}");
                out.malformed.push(malformed);
            }
        }
    }

    log::debug!(
        "parsed {} calibration profiles ({} malformed lines)",
        out.profiles.len(),
        out.malformed.len()
    );
    Ok(out)
}

/// Reads and parses a calibration file.
pub fn load_calibrations(path: &Path, max_profiles: usize) -> Result<CalibrationFile, DetectError> {
    let text = std::fs::read_to_string(path).map_err(|source| DetectError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;
    parse_calibrations(&text, max_profiles)
}

/// Builds a profile for `label` from the hues inside a centered square window.
///
/// Only pixels passing the configured saturation and value thresholds
/// contribute. The window is clamped to the image.
pub fn calibrate(
    image: &RgbImage,
    label: &str,
    config: &DetectConfig,
) -> Result<CalibrationProfile, DetectError> {
    let (width, height) = image.dimensions();
    let window = config.calibration_window;
    let (min_x, max_x) = centered_span(width, window);
    let (min_y, max_y) = centered_span(height, window);

    let mut hue_range: Option<(i32, i32)> = None;
    for y in min_y..max_y {
        for x in min_x..max_x {
            let hsv = rgb_to_hsv(*image.get_pixel(x, y));
            if hsv.saturation < config.saturation_threshold || hsv.value < config.value_threshold {
                continue;
            }
            hue_range = Some(match hue_range {
                Some((lo, hi)) => (lo.min(hsv.hue), hi.max(hsv.hue)),
                None => (hsv.hue, hsv.hue),
            });
        }
    }

    let Some((min_hue, max_hue)) = hue_range else {
        return Err(DetectError::EmptyCalibrationWindow { size: window });
    };

    let profile = CalibrationProfile {
        name: label.to_string(),
        hue_mid: hue_midpoint(max_hue, min_hue),
        max_hue_diff: hue_difference(max_hue, min_hue) / 2,
        min_saturation: config.saturation_threshold,
        min_value: config.value_threshold,
        extra: Vec::new(),
    };
    log::debug!("calibrated {label}: hue range {min_hue}..={max_hue}");
    Ok(profile)
}

fn centered_span(extent: u32, window: u32) -> (u32, u32) {
    if extent <= window {
        return (0, extent);
    }
    let start = (extent - window) / 2;
    (start, start + window)
}
