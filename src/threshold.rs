//! Per-profile hue/saturation/value thresholding into a binary mask.

use image::{Rgb, RgbImage};

use crate::calibration::CalibrationProfile;
use crate::color::{Hsv, hue_difference, rgb_to_hsv};
use crate::config::DetectConfig;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// One mask pixel. White pixels carry the index of the profile that claimed them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskCell {
    pub white: bool,
    pub object_type: Option<usize>,
}

/// Thresholded scratch grid, row-major with the origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    cells: Vec<MaskCell>,
}

impl Mask {
    /// An all-black mask.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![MaskCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn cell(&self, x: u32, y: u32) -> MaskCell {
        self.cells[self.index(x, y)]
    }

    pub fn is_white(&self, x: u32, y: u32) -> bool {
        self.cell(x, y).white
    }

    /// Marks `(x, y)` white and stamps it with `object_type`.
    pub fn set_white(&mut self, x: u32, y: u32, object_type: usize) {
        let idx = self.index(x, y);
        self.cells[idx] = MaskCell {
            white: true,
            object_type: Some(object_type),
        };
    }

    pub fn set_black(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.cells[idx] = MaskCell::default();
    }

    pub fn cells(&self) -> &[MaskCell] {
        &self.cells
    }

    pub fn white_count(&self) -> usize {
        self.cells.iter().filter(|c| c.white).count()
    }

    /// Renders the mask as a black and white RGB image.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            if self.is_white(x, y) { WHITE } else { BLACK }
        })
    }
}

fn matches(hsv: Hsv, profile: &CalibrationProfile, config: &DetectConfig) -> bool {
    hsv.saturation >= config.saturation_threshold
        && hsv.value >= config.value_threshold
        && hue_difference(profile.hue_mid, hsv.hue) <= profile.max_hue_diff
}

/// Thresholds `image` against each profile in order.
///
/// A pixel claimed by an earlier profile is never revisited, so the first
/// matching profile wins. Unclaimed pixels end up black.
pub fn apply_threshold(
    image: &RgbImage,
    profiles: &[CalibrationProfile],
    config: &DetectConfig,
) -> Mask {
    let (width, height) = image.dimensions();
    let mut mask = Mask::new(width, height);
    let hsv: Vec<Hsv> = image.pixels().map(|p| rgb_to_hsv(*p)).collect();
    let mut claimed = vec![false; hsv.len()];

    for (object_type, profile) in profiles.iter().enumerate() {
        let mut matched = 0usize;
        for y in 0..height {
            for x in 0..width {
                let idx = mask.index(x, y);
                if claimed[idx] {
                    continue;
                }
                if matches(hsv[idx], profile, config) {
                    mask.set_white(x, y, object_type);
                    claimed[idx] = true;
                    matched += 1;
                } else {
                    mask.set_black(x, y);
                }
            }
        }
        log::debug!("profile {} ({}) claimed {matched} pixels", object_type, profile.name);
    }

    mask
}
