//! Region-to-profile voting and minimum size filtering.

use serde::Serialize;
use std::fmt;

use crate::calibration::CalibrationProfile;
use crate::config::{DetectConfig, VoteRounding};
use crate::labeling::{Labeling, Region};
use crate::threshold::Mask;

/// An accepted region: the profile it matched and its bounding box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub name: String,
    pub profile: usize,
    pub region: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.name, self.x, self.y, self.width, self.height)
    }
}

/// Central half-width, half-height window of a region, as half-open ranges.
pub fn sample_window(region: &Region) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
    let (w, h) = (region.width(), region.height());
    (
        region.min_x + w / 4..region.min_x + 3 * w / 4,
        region.min_y + h / 4..region.min_y + 3 * h / 4,
    )
}

/// Votes on which profile a region represents.
///
/// Stamped pixels in the sample window contribute their 1-based class tag
/// (profile index + 1); the rounded mean tag picks the profile. Returns `None`
/// when nothing in the window is stamped.
pub fn vote(mask: &Mask, region: &Region, rounding: VoteRounding) -> Option<usize> {
    let (xs, ys) = sample_window(region);
    let mut sum = 0u64;
    let mut count = 0u64;
    for y in ys {
        for x in xs.clone() {
            if let Some(object_type) = mask.cell(x, y).object_type {
                sum += object_type as u64 + 1;
                count += 1;
            }
        }
    }
    if count == 0 {
        return None;
    }

    let mean = sum as f64 / count as f64;
    let tag = match rounding {
        VoteRounding::Nearest => mean.round(),
        VoteRounding::Truncate => mean.trunc(),
    };
    (tag as usize).checked_sub(1)
}

fn is_large_enough(region: &Region, config: &DetectConfig) -> bool {
    region.width() >= config.min_box_width && region.height() >= config.min_box_height
}

/// Classifies every labeled region against the profiles.
///
/// Profiles are the outer loop so detections come out grouped by profile, in
/// profile order, then in region order.
pub fn classify_regions(
    mask: &Mask,
    labeling: &Labeling,
    profiles: &[CalibrationProfile],
    config: &DetectConfig,
) -> Vec<Detection> {
    let votes: Vec<Option<usize>> = labeling
        .regions
        .iter()
        .map(|r| vote(mask, r, config.vote_rounding))
        .collect();

    let mut out = Vec::new();
    for (index, profile) in profiles.iter().enumerate() {
        for (region, class) in labeling.regions.iter().zip(&votes) {
            if *class != Some(index) {
                continue;
            }
            if !is_large_enough(region, config) {
                log::debug!(
                    "region {} matches {} but is only {}x{}",
                    region.id,
                    profile.name,
                    region.width(),
                    region.height()
                );
                continue;
            }
            out.push(Detection {
                name: profile.name.clone(),
                profile: index,
                region: region.id,
                x: region.min_x,
                y: region.min_y,
                width: region.width(),
                height: region.height(),
            });
        }
    }
    out
}
