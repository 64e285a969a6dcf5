use clap::{Parser, Subcommand};
use flexi_logger::{Logger, LoggerHandle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hue_detect::error::EXIT_MALFORMED_INPUT;
use hue_detect::raster::{load_image, save_image};
use hue_detect::report::{DetectionReport, write_report};
use hue_detect::test_image_gen::generate_test_image;
use hue_detect::{DetectConfig, DetectError, calibrate, detect, load_calibrations};

const THRESHOLD_OUTPUT: &str = "threshold_output.bmp";
const REGIONS_OUTPUT: &str = "image_with_regions.bmp";

#[derive(Parser, Debug)]
#[command(
    name = "cam_detect",
    about = "Detect calibrated colored objects in an image",
    version
)]
struct Cli {
    /// JSON file overriding detection thresholds and limits
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the contents of a calibration file
    #[command(alias = "s")]
    Show {
        calibration: PathBuf,
    },

    /// Detect calibrated objects in an image
    #[command(alias = "d")]
    Detect {
        calibration: PathBuf,
        image: PathBuf,

        /// Directory for the thresholded mask and boxed images
        #[arg(short = 'o', long = "output-dir", default_value = "output_images")]
        output_dir: PathBuf,

        /// Also write detections as JSON
        #[arg(long = "json")]
        json: Option<PathBuf>,
    },

    /// Print a calibration line sampled from the center of an image
    #[command(alias = "c")]
    Calibrate {
        label: String,
        image: PathBuf,
    },

    /// Write a synthetic test scene
    Generate {
        path: PathBuf,
    },
}

fn setup_logging(verbose: u8) -> Option<LoggerHandle> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    match Logger::try_with_env_or_str(level).and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logger initialization failed: {e}");
            None
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DetectConfig, DetectError> {
    match path {
        Some(p) => DetectConfig::from_json_file(p),
        None => Ok(DetectConfig::default()),
    }
}

fn show(calibration: &Path, config: &DetectConfig) -> Result<(), DetectError> {
    let file = load_calibrations(calibration, config.max_calibrations)?;
    println!("Calibrated Objects:");
    for profile in &file.profiles {
        println!("{profile}");
    }
    for line in &file.malformed {
        eprintln!("Malformed calibration {line}");
    }
    Ok(())
}

fn run_detection(
    calibration: &Path,
    image_path: &Path,
    output_dir: &Path,
    json: Option<&Path>,
    config: &DetectConfig,
) -> Result<(), DetectError> {
    let file = load_calibrations(calibration, config.max_calibrations)?;
    let image = load_image(image_path)?;
    let run = detect(&image, &file.profiles, config)?;

    save_image(&run.mask.to_image(), &output_dir.join(THRESHOLD_OUTPUT))?;
    save_image(&run.boxed, &output_dir.join(REGIONS_OUTPUT))?;

    for detection in &run.detections {
        println!("{detection}");
    }

    if let Some(json_path) = json {
        let report = DetectionReport {
            image: image_path.display().to_string(),
            calibration: calibration.display().to_string(),
            width: image.width(),
            height: image.height(),
            regions: run.labeling.regions.len(),
            detections: &run.detections,
        };
        write_report(json_path, &report)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), DetectError> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Show { calibration } => show(&calibration, &config),
        Command::Detect {
            calibration,
            image,
            output_dir,
            json,
        } => run_detection(&calibration, &image, &output_dir, json.as_deref(), &config),
        Command::Calibrate { label, image } => {
            let image = load_image(&image)?;
            let profile = calibrate(&image, &label, &config)?;
            println!("{}", profile.to_line());
            Ok(())
        }
        Command::Generate { path } => generate_test_image(&path),
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_MALFORMED_INPUT as u8)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _logger = setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
