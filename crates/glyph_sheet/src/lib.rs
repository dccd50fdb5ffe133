mod font;
mod output;
mod sheet;

use std::path::{Path, PathBuf};

use log::{debug, info};

pub use font::{source::GlyphSource, truetype::FontResource};
pub use output::{
    binary::{binarize, write_binary, write_binary_file},
    naming::OutputNames,
    snapshot::save_png,
};
pub use sheet::{
    canvas::{GlyphSheet, BACKGROUND, FOREGROUND},
    geometry::{CellRect, SheetGeometry, CELL_COUNT, GRID_SIDE},
    render::render_glyphs,
};

#[derive(Debug, thiserror::Error)]
pub enum GlyphSheetError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("failed to save image: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported cell width {0}")]
    InvalidCellWidth(u32),
    #[error("font path {0:?} has no file name")]
    InvalidFontPath(PathBuf),
}

/// Files produced by a single run.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub binary: PathBuf,
    pub png: PathBuf,
    pub binary_len: usize,
}

pub struct GlyphSheetGenerator {
    geometry: SheetGeometry,
}

impl GlyphSheetGenerator {
    pub fn new(cell_width: u32) -> Result<Self, GlyphSheetError> {
        let geometry =
            SheetGeometry::new(cell_width).ok_or(GlyphSheetError::InvalidCellWidth(cell_width))?;
        Ok(Self { geometry })
    }

    pub fn geometry(&self) -> SheetGeometry {
        self.geometry
    }

    /// Loads the font at the cell width and renders every cell.
    pub fn generate_font<P: AsRef<Path>>(
        &self,
        font_path: P,
    ) -> Result<GlyphSheet, GlyphSheetError> {
        let font = FontResource::load(font_path, self.geometry.cell_width())?;
        debug!("font has {} glyphs, rendering at {}px", font.glyph_count(), font.px_size());
        Ok(self.generate(&font))
    }

    pub fn generate<S: GlyphSource + ?Sized>(&self, source: &S) -> GlyphSheet {
        let mut sheet = GlyphSheet::new(self.geometry);
        render_glyphs(source, &mut sheet);
        let side = self.geometry.side();
        debug!("rendered {CELL_COUNT} glyphs onto a {side}x{side} sheet");
        sheet
    }

    pub fn write_artifacts(
        &self,
        sheet: &GlyphSheet,
        names: &OutputNames,
    ) -> Result<Artifacts, GlyphSheetError> {
        let binary = names.bin_path();
        let binary_len = write_binary_file(sheet, &binary)?;
        info!("wrote {binary_len} bytes to {}", binary.display());

        let png = names.png_path();
        save_png(sheet, &png)?;
        info!("saved preview to {}", png.display());

        Ok(Artifacts { binary, png, binary_len })
    }
}
