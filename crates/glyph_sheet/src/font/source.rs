/// Something that can turn a character into coverage samples.
///
/// Samples are reported in cell-local pixel coordinates: `(0, 0)` is the top-left corner of
/// the glyph cell and the text anchor sits at the left edge on the ascender line. Coordinates
/// may fall outside the cell when a glyph overhangs it.
pub trait GlyphSource {
    fn rasterize(&self, ch: char, emit: &mut dyn FnMut(i32, i32, f32));
}
