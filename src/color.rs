//! RGB to HSV conversion and circular hue arithmetic.

use image::Rgb;
use palette::{FromColor, Hsv as PaletteHsv, Srgb};

const HUE_CIRCLE: i32 = 360;

/// Integer HSV triple: hue in `[0, 360)`, saturation and value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: i32,
    pub value: i32,
}

/// Converts an 8-bit RGB pixel to integer HSV.
///
/// Grey pixels (equal channels) have no chroma and report hue 0.
pub fn rgb_to_hsv(pixel: Rgb<u8>) -> Hsv {
    let [r, g, b] = pixel.0;
    let rgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
    let hsv: PaletteHsv = PaletteHsv::from_color(rgb);

    let hue = if hsv.saturation <= 0.0 {
        0
    } else {
        (hsv.hue.into_positive_degrees().round() as i32).rem_euclid(HUE_CIRCLE)
    };

    Hsv {
        hue,
        saturation: (hsv.saturation * 100.0).round() as i32,
        value: (hsv.value * 100.0).round() as i32,
    }
}

/// Shorter-arc distance between two hues, in `[0, 180]`.
pub fn hue_difference(a: i32, b: i32) -> i32 {
    let d = (a - b).rem_euclid(HUE_CIRCLE);
    d.min(HUE_CIRCLE - d)
}

/// Hue halfway between `a` and `b` along the shorter arc.
pub fn hue_midpoint(a: i32, b: i32) -> i32 {
    let a = a.rem_euclid(HUE_CIRCLE);
    let b = b.rem_euclid(HUE_CIRCLE);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo <= HUE_CIRCLE / 2 {
        lo + (hi - lo) / 2
    } else {
        // the short arc wraps through 0
        (hi + (HUE_CIRCLE - (hi - lo)) / 2).rem_euclid(HUE_CIRCLE)
    }
}
