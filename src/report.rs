use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::classify::Detection;
use crate::error::DetectError;

/// JSON summary of a detection run.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport<'a> {
    pub image: String,
    pub calibration: String,
    pub width: u32,
    pub height: u32,
    pub regions: usize,
    pub detections: &'a [Detection],
}

pub fn write_text_file(path: &Path, contents: &str) -> Result<(), DetectError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn report_json_string(report: &DetectionReport<'_>) -> Result<String, DetectError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_report(path: &Path, report: &DetectionReport<'_>) -> Result<(), DetectError> {
    write_text_file(path, &report_json_string(report)?)
}
