use hue_detect::color::{hue_difference, hue_midpoint, rgb_to_hsv};
use image::Rgb;

#[test]
fn hue_difference_takes_shorter_arc() {
    assert_eq!(hue_difference(0, 350), 10);
    assert_eq!(hue_difference(350, 0), 10);
    assert_eq!(hue_difference(90, 270), 180);
    assert_eq!(hue_difference(10, 50), 40);
    for h in [0, 45, 180, 359] {
        assert_eq!(hue_difference(h, h), 0);
    }
    for (a, b) in [(3, 300), (120, 240), (359, 1)] {
        assert_eq!(hue_difference(a, b), hue_difference(b, a));
    }
}

#[test]
fn hue_midpoint_wraps_through_zero() {
    assert_eq!(hue_midpoint(10, 50), 30);
    assert_eq!(hue_midpoint(350, 10), 0);
    assert_eq!(hue_midpoint(10, 350), 0);
    assert_eq!(hue_midpoint(340, 350), 345);
    assert_eq!(hue_midpoint(0, 345), 352);
}

#[test]
fn primaries_convert_to_expected_hsv() {
    let red = rgb_to_hsv(Rgb([255, 0, 0]));
    assert_eq!((red.hue, red.saturation, red.value), (0, 100, 100));

    let green = rgb_to_hsv(Rgb([0, 255, 0]));
    assert_eq!(green.hue, 120);

    let blue = rgb_to_hsv(Rgb([0, 0, 255]));
    assert_eq!(blue.hue, 240);
}

#[test]
fn grey_has_zero_hue_and_saturation() {
    for v in [0u8, 77, 128, 255] {
        let hsv = rgb_to_hsv(Rgb([v, v, v]));
        assert_eq!(hsv.hue, 0, "grey {v} should have hue 0");
        assert_eq!(hsv.saturation, 0);
    }
    assert_eq!(rgb_to_hsv(Rgb([255, 255, 255])).value, 100);
    assert_eq!(rgb_to_hsv(Rgb([0, 0, 0])).value, 0);
}
