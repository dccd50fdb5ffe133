use image::{Rgb, RgbImage};
use imageproc::pixelops::interpolate;

use super::geometry::SheetGeometry;

pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Square RGB drawing surface holding all 256 glyph cells.
#[derive(Clone, Debug)]
pub struct GlyphSheet {
    geometry: SheetGeometry,
    image: RgbImage,
}

impl GlyphSheet {
    pub fn new(geometry: SheetGeometry) -> Self {
        let side = geometry.side();
        Self { geometry, image: RgbImage::from_pixel(side, side, BACKGROUND) }
    }

    pub fn geometry(&self) -> SheetGeometry {
        self.geometry
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Composites the foreground colour over the pixel at `(x, y)`.
    pub fn blend_coverage(&mut self, x: u32, y: u32, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage == 0.0 {
            return;
        }

        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = interpolate(FOREGROUND, *pixel, coverage);
    }
}
