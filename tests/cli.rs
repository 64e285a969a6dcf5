use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use hue_detect::test_image_gen::generate_test_image;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hue_detect_cli_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

fn cam_detect(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cam_detect"))
        .args(args)
        .output()
        .expect("failed to run cam_detect")
}

#[test]
fn detect_prints_boxes_and_writes_images() {
    let dir = scratch_dir("detect");
    let image = dir.join("scene.png");
    let calibration = dir.join("colors.txt");
    let out_dir = dir.join("out");
    let json = dir.join("report.json");
    generate_test_image(&image).expect("failed to write scene");
    fs::write(&calibration, "red 0 20 50 30\ngreen 120 20 50 30\nblue 240 20 50 30\n")
        .expect("failed to write calibration");

    let out = cam_detect(&[
        "detect",
        calibration.to_str().unwrap(),
        image.to_str().unwrap(),
        "--output-dir",
        out_dir.to_str().unwrap(),
        "--json",
        json.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["red 20 20 40 40", "green 120 30 30 30", "blue 60 100 40 30"]);

    assert!(out_dir.join("threshold_output.bmp").is_file());
    assert!(out_dir.join("image_with_regions.bmp").is_file());
    assert!(json.is_file());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn show_lists_profiles_and_flags_malformed_lines() {
    let dir = scratch_dir("show");
    let calibration = dir.join("colors.txt");
    fs::write(&calibration, "red 0 20 50 30\nbad 1 2\n").expect("failed to write calibration");

    let out = cam_detect(&["show", calibration.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Calibrated Objects:\n"));
    assert!(stdout.contains("red: Hue: 0 (Max. Diff: 20), Min. SV: 50 30"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 2"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn calibrate_prints_one_line() {
    let dir = scratch_dir("calibrate");
    let image = dir.join("scene.png");
    let mut img = hue_detect::test_image_gen::solid_image(80, 80, hue_detect::test_image_gen::BLUE);
    hue_detect::test_image_gen::fill_block(&mut img, 0, 0, 5, 5, hue_detect::test_image_gen::GREY);
    img.save(&image).expect("failed to write image");

    let out = cam_detect(&["calibrate", "sky", image.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "sky 240 0 50 30");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn exit_status_distinguishes_error_kinds() {
    let out = cam_detect(&["detect", "only-one-arg"]);
    assert_eq!(out.status.code(), Some(1));

    let out = cam_detect(&["show", "/nonexistent/hue_detect/colors.txt"]);
    assert_eq!(out.status.code(), Some(2));

    let out = cam_detect(&["frobnicate"]);
    assert_eq!(out.status.code(), Some(1));
}
