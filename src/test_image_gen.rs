use image::{Rgb, RgbImage};
use std::path::Path;

use crate::error::DetectError;
use crate::raster::save_image;

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const GREY: Rgb<u8> = Rgb([128, 128, 128]);

/// An image filled with a single color.
pub fn solid_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(width, height, color)
}

/// Paints an axis-aligned block, clipped to the image.
pub fn fill_block(image: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(image.width());
    let y_end = y.saturating_add(height).min(image.height());
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

/// Builds a 200x150 test scene on a grey background:
///
/// - 40x40 red block at (20, 20)
/// - 30x30 green block at (120, 30)
/// - 40x30 blue block at (60, 100)
/// - 10x10 red speck at (170, 120), too small to be reported
pub fn test_scene() -> RgbImage {
    let mut img = solid_image(200, 150, GREY);
    fill_block(&mut img, 20, 20, 40, 40, RED);
    fill_block(&mut img, 120, 30, 30, 30, GREEN);
    fill_block(&mut img, 60, 100, 40, 30, BLUE);
    fill_block(&mut img, 170, 120, 10, 10, RED);
    img
}

/// Writes [`test_scene`] to `path`.
pub fn generate_test_image(path: &Path) -> Result<(), DetectError> {
    save_image(&test_scene(), path)
}
