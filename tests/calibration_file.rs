use hue_detect::calibration::{calibrate, load_calibrations, parse_calibrations};
use hue_detect::error::EXIT_MISSING_RESOURCE;
use hue_detect::test_image_gen::{GREEN, GREY, RED, fill_block, solid_image};
use hue_detect::{DetectConfig, DetectError};
use image::Rgb;

#[test]
fn short_line_is_reported_and_others_still_parse() {
    let text = "red 0 15 50 30\nbroken 10 20\nblue 240 20 50 30\n";
    let file = parse_calibrations(text, 10).expect("parse failed");

    let names: Vec<&str> = file.profiles.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["red", "blue"]);
    assert_eq!(file.malformed.len(), 1);
    assert_eq!(file.malformed[0].line_number, 2);
    assert_eq!(file.malformed[0].content, "broken 10 20");
}

#[test]
fn non_numeric_field_is_malformed() {
    let file = parse_calibrations("red zero 15 50 30\ngreen 120 10 50 30", 10).expect("parse failed");
    assert_eq!(file.profiles.len(), 1);
    assert_eq!(file.profiles[0].name, "green");
    assert!(file.malformed[0].reason.contains("hue_mid"));
}

#[test]
fn trailing_fields_are_preserved() {
    let file = parse_calibrations("ball 30 10 50 30 extra 7\n\n", 10).expect("parse failed");
    let ball = &file.profiles[0];
    assert_eq!(ball.hue_mid, 30);
    assert_eq!(ball.max_hue_diff, 10);
    assert_eq!(ball.min_saturation, 50);
    assert_eq!(ball.min_value, 30);
    assert_eq!(ball.extra, ["extra", "7"]);
    assert_eq!(ball.to_line(), "ball 30 10 50 30 extra 7");
    assert!(file.malformed.is_empty(), "blank lines are not malformed");
}

#[test]
fn show_format_matches_display() {
    let file = parse_calibrations("cone 25 12 50 30", 10).expect("parse failed");
    assert_eq!(
        file.profiles[0].to_string(),
        "cone: Hue: 25 (Max. Diff: 12), Min. SV: 50 30"
    );
}

#[test]
fn too_many_profiles_is_capacity_error() {
    let text = "a 0 5 50 30\nb 60 5 50 30\nc 120 5 50 30\n";
    match parse_calibrations(text, 2) {
        Err(DetectError::CapacityExceeded { limit, .. }) => assert_eq!(limit, 2),
        other => panic!("expected capacity error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_missing_resource() {
    let path = std::env::temp_dir().join("hue_detect_no_such_calibration.txt");
    let err = load_calibrations(&path, 10).expect_err("load should fail");
    assert!(matches!(err, DetectError::MissingResource { .. }));
    assert_eq!(err.exit_code(), EXIT_MISSING_RESOURCE);
}

#[test]
fn calibrate_solid_color() {
    let img = solid_image(100, 100, GREEN);
    let profile = calibrate(&img, "leaf", &DetectConfig::default()).expect("calibrate failed");
    assert_eq!(profile.to_line(), "leaf 120 0 50 30");
}

#[test]
fn calibrate_spans_hue_range() {
    let mut img = solid_image(100, 100, GREY);
    fill_block(&mut img, 25, 25, 25, 50, RED);
    fill_block(&mut img, 50, 25, 25, 50, Rgb([255, 128, 0]));
    let profile = calibrate(&img, "cone", &DetectConfig::default()).expect("calibrate failed");
    assert_eq!(profile.hue_mid, 15);
    assert_eq!(profile.max_hue_diff, 15);
}

#[test]
fn calibrate_wraps_around_red() {
    let mut img = solid_image(80, 80, GREY);
    fill_block(&mut img, 0, 0, 40, 80, RED);
    fill_block(&mut img, 40, 0, 40, 80, Rgb([255, 0, 64]));
    let profile = calibrate(&img, "flag", &DetectConfig::default()).expect("calibrate failed");
    assert_eq!(profile.hue_mid, 352);
    assert_eq!(profile.max_hue_diff, 7);
}

#[test]
fn calibrate_small_image_clamps_window() {
    let img = solid_image(12, 8, RED);
    let profile = calibrate(&img, "tiny", &DetectConfig::default()).expect("calibrate failed");
    assert_eq!(profile.hue_mid, 0);
}

#[test]
fn calibrate_without_saturated_pixels_fails() {
    let img = solid_image(100, 100, GREY);
    let err = calibrate(&img, "none", &DetectConfig::default()).expect_err("should fail");
    assert!(matches!(err, DetectError::EmptyCalibrationWindow { size: 50 }));
}
