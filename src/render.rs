use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::classify::Detection;

/// Draws a hollow box around each detection on a copy of `source`.
pub fn draw_detections(source: &RgbImage, detections: &[Detection], color: Rgb<u8>) -> RgbImage {
    let mut canvas = source.clone();
    for d in detections {
        if d.width == 0 || d.height == 0 {
            continue;
        }
        let rect = Rect::at(d.x as i32, d.y as i32).of_size(d.width, d.height);
        draw_hollow_rect_mut(&mut canvas, rect, color);
    }
    canvas
}
