use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use log::debug;

use super::source::GlyphSource;
use crate::GlyphSheetError;

/// Scalable font face loaded at a fixed pixel size.
pub struct FontResource {
    font: FontVec,
    scale: PxScale,
    px_size: u32,
}

impl FontResource {
    pub fn load<P: AsRef<Path>>(path: P, px_size: u32) -> Result<Self, GlyphSheetError> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        debug!("read {} bytes of font data from {}", data.len(), path.display());
        Self::from_bytes(data, px_size)
    }

    pub fn from_bytes(data: Vec<u8>, px_size: u32) -> Result<Self, GlyphSheetError> {
        let font = FontVec::try_from_vec(data)?;
        let scale = em_scale(&font, px_size);
        debug!("font em size {px_size}px maps to glyph height {:.2}px", scale.y);
        Ok(Self { font, scale, px_size })
    }

    pub fn px_size(&self) -> u32 {
        self.px_size
    }

    pub fn glyph_count(&self) -> usize {
        self.font.glyph_count()
    }
}

/// `PxScale` measures ascent to descent, so an em size has to be stretched by the
/// face's height-to-em ratio.
fn em_scale(font: &FontVec, px_size: u32) -> PxScale {
    let px_size = px_size as f32;
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(px_size * font.height_unscaled() / units_per_em)
        },
        _ => PxScale::from(px_size),
    }
}

impl GlyphSource for FontResource {
    fn rasterize(&self, ch: char, emit: &mut dyn FnMut(i32, i32, f32)) {
        // A line feed splits text into empty lines; it never reaches the font.
        if ch == '\n' {
            return;
        }

        let ascent = self.font.as_scaled(self.scale).ascent();
        let glyph =
            self.font.glyph_id(ch).with_scale_and_position(self.scale, point(0.0, ascent));

        // Whitespace has no outline.
        let Some(outlined) = self.font.outline_glyph(glyph) else {
            return;
        };

        let bounds = outlined.px_bounds();
        let left = bounds.min.x as i32;
        let top = bounds.min.y as i32;
        outlined.draw(|x, y, coverage| emit(left + x as i32, top + y as i32, coverage));
    }
}
