use std::path::Path;

use image::ImageFormat;

use crate::sheet::canvas::GlyphSheet;

/// Saves the anti-aliased canvas for inspection. The binary output is thresholded, this is not.
pub fn save_png<P: AsRef<Path>>(sheet: &GlyphSheet, path: P) -> Result<(), image::ImageError> {
    sheet.image().save_with_format(path, ImageFormat::Png)
}
