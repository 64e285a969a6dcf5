use image::{Rgb, RgbImage};

use crate::calibration::CalibrationProfile;
use crate::classify::{Detection, classify_regions};
use crate::config::DetectConfig;
use crate::error::DetectError;
use crate::labeling::{Labeling, label_regions};
use crate::render::draw_detections;
use crate::threshold::{Mask, apply_threshold};

/// Everything produced by one detection run.
#[derive(Debug, Clone)]
pub struct DetectionRun {
    pub mask: Mask,
    pub labeling: Labeling,
    pub detections: Vec<Detection>,
    /// Copy of the input with a box drawn around each detection.
    pub boxed: RgbImage,
}

/// Runs threshold, labeling and classification over `image`.
///
/// The input is only read; the mask and the boxed output are separate buffers.
pub fn detect(
    image: &RgbImage,
    profiles: &[CalibrationProfile],
    config: &DetectConfig,
) -> Result<DetectionRun, DetectError> {
    if profiles.len() > config.max_calibrations {
        return Err(DetectError::CapacityExceeded {
            what: "calibration profiles",
            limit: config.max_calibrations,
        });
    }

    let mask = apply_threshold(image, profiles, config);
    log::info!(
        "thresholded {}x{} image: {} of {} pixels matched",
        mask.width(),
        mask.height(),
        mask.white_count(),
        mask.cells().len()
    );

    let labeling = label_regions(&mask, config.max_regions)?;
    log::info!("found {} connected regions", labeling.regions.len());

    let detections = classify_regions(&mask, &labeling, profiles, config);
    log::info!("accepted {} detections", detections.len());

    let boxed = draw_detections(image, &detections, Rgb(config.box_color));

    Ok(DetectionRun {
        mask,
        labeling,
        detections,
        boxed,
    })
}
