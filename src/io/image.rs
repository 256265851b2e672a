//! Thumbnail preparation: white background substitution, downscaling and PNG export

use crate::io::configuration::{THUMBNAIL_MAX_HEIGHT, THUMBNAIL_MAX_WIDTH, WHITE_THRESHOLD};
use crate::io::error::{OutfitError, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::Path;

/// Replace near-white pixels with black, keeping their alpha
///
/// A pixel counts as white when each of its red, green and blue channels is
/// strictly greater than `threshold`.
pub fn blacken_white_background(image: &mut RgbaImage, threshold: u8) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if r > threshold && g > threshold && b > threshold {
            pixel.0 = [0, 0, 0, a];
        }
    }
}

/// Dimensions that fit `(width, height)` inside the bounds without changing aspect ratio
///
/// Images already inside the bounds keep their size. Neither side is
/// reduced below one pixel.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = (f64::from(max_width) / f64::from(width))
        .min(f64::from(max_height) / f64::from(height));

    let fitted_width = (f64::from(width) * scale).round().max(1.0) as u32;
    let fitted_height = (f64::from(height) * scale).round().max(1.0) as u32;

    (fitted_width.min(max_width), fitted_height.min(max_height))
}

/// Downscale with Lanczos filtering so the image fits the bounds
pub fn shrink_to_fit(image: &RgbaImage, max_width: u32, max_height: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let (target_width, target_height) = fit_within(width, height, max_width, max_height);

    if (target_width, target_height) == (width, height) {
        return image.clone();
    }

    imageops::resize(image, target_width, target_height, FilterType::Lanczos3)
}

/// Load an image and turn it into a display thumbnail
///
/// The image is converted to RGBA, its white background is replaced with
/// black and it is shrunk to fit the configured thumbnail bounds.
///
/// # Errors
///
/// Returns [`OutfitError::ImageLoad`] if the file cannot be opened or decoded
pub fn prepare_thumbnail(path: &Path) -> Result<RgbaImage> {
    let mut image = image::open(path)
        .map_err(|e| OutfitError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_rgba8();

    blacken_white_background(&mut image, WHITE_THRESHOLD);

    Ok(shrink_to_fit(&image, THUMBNAIL_MAX_WIDTH, THUMBNAIL_MAX_HEIGHT))
}

/// Save a thumbnail as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_thumbnail(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| OutfitError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| OutfitError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
