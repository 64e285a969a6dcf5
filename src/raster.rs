//! Loading and saving RGB rasters.

use image::{ImageReader, RgbImage};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use crate::error::DetectError;

/// Opens and decodes an image, converting it to 8-bit RGB.
///
/// A path that cannot be opened is a missing resource; a file that opens but
/// fails to decode is an image error.
pub fn load_image(path: &Path) -> Result<RgbImage, DetectError> {
    let file = File::open(path).map_err(|source| DetectError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = ImageReader::new(BufReader::new(file))
        .with_guessed_format()?
        .decode()?;
    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Ok(decoded.to_rgb8())
}

/// Encodes `image` to `path`, choosing the format from the extension.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), DetectError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    image.save(path)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
