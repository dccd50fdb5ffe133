use log::trace;

use super::canvas::GlyphSheet;
use super::geometry::CELL_COUNT;
use crate::font::source::GlyphSource;

/// Draws code points `0..=255` into their cells, clipping each glyph to its own cell.
pub fn render_glyphs<S: GlyphSource + ?Sized>(source: &S, sheet: &mut GlyphSheet) {
    let geometry = sheet.geometry();

    for code in 0..CELL_COUNT {
        let code = code as u8;
        let rect = geometry.cell_rect(code);
        let mut painted = 0usize;

        source.rasterize(char::from(code), &mut |dx, dy, coverage| {
            let (Some(x), Some(y)) =
                (rect.x.checked_add_signed(dx), rect.y.checked_add_signed(dy))
            else {
                return;
            };

            if rect.contains(x, y) {
                sheet.blend_coverage(x, y, coverage);
                painted += 1;
            }
        });

        trace!("glyph {code:#04x} painted {painted} samples");
    }
}
