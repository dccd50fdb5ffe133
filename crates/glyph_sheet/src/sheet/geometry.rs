/// Number of cells along each edge of the sheet.
pub const GRID_SIDE: u32 = 16;

/// Number of glyph cells on a sheet, one per code point in `0..=255`.
pub const CELL_COUNT: usize = (GRID_SIDE * GRID_SIDE) as usize;

/// Bytes used per pixel in the raw binary output.
pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SheetGeometry {
    cell_width: u32,
    side: u32,
}

impl SheetGeometry {
    /// Returns `None` for a zero width or one whose binary output would not fit in memory.
    pub fn new(cell_width: u32) -> Option<Self> {
        if cell_width == 0 {
            return None;
        }

        let side = cell_width.checked_mul(GRID_SIDE)?;
        let side_px = usize::try_from(side).ok()?;
        side_px.checked_mul(side_px)?.checked_mul(BYTES_PER_PIXEL)?;

        Some(Self { cell_width, side })
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Edge length of the square sheet in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn pixel_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    pub fn binary_len(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    pub fn cell_origin(&self, code: u8) -> (u32, u32) {
        let code = u32::from(code);
        ((code % GRID_SIDE) * self.cell_width, (code / GRID_SIDE) * self.cell_width)
    }

    pub fn cell_rect(&self, code: u8) -> CellRect {
        let (x, y) = self.cell_origin(code);
        CellRect { x, y, width: self.cell_width, height: self.cell_width }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x - self.x < self.width && y - self.y < self.height
    }
}
