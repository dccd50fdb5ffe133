use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::Rgb;

use crate::sheet::canvas::GlyphSheet;

const OFF: [u8; 3] = [0, 0, 0];
const ON: [u8; 3] = [255, 255, 255];

/// Hard threshold on the red channel alone; any anti-aliased red value counts as lit.
pub fn binarize(pixel: Rgb<u8>) -> [u8; 3] {
    if pixel.0[0] == 0 {
        OFF
    } else {
        ON
    }
}

/// Writes the sheet as headerless row-major RGB triples and returns the byte count.
pub fn write_binary<W: Write>(sheet: &GlyphSheet, writer: &mut W) -> std::io::Result<usize> {
    let image = sheet.image();
    let mut written = 0;

    for y in 0..image.height() {
        for x in 0..image.width() {
            let bytes = binarize(*image.get_pixel(x, y));
            writer.write_all(&bytes)?;
            written += bytes.len();
        }
    }

    Ok(written)
}

pub fn write_binary_file<P: AsRef<Path>>(sheet: &GlyphSheet, path: P) -> std::io::Result<usize> {
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_binary(sheet, &mut writer)?;
    writer.flush()?;
    Ok(written)
}
