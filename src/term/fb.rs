//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// 2D framebuffer of styled character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are silently dropped; the view layer clips by
    /// drawing freely and letting the buffer bound it.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, fill: Cell) {
        self.cells.fill(fill);
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, style.into_cell(ch));
            }
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (i, ch) in text.chars().enumerate() {
            self.set(x + i as u16, y, style.into_cell(ch));
        }
    }

    /// One row of cells, for diff-based flushing.
    pub fn row(&self, y: u16) -> &[Cell] {
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.set(10, 10, CellStyle::default().into_cell('X'));
        assert!(fb.get(10, 10).is_none());
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(fb.get(x, y).unwrap().ch, ' ');
            }
        }
    }

    #[test]
    fn put_str_writes_and_clips() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abcd", CellStyle::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'a');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'b');
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.fill_rect(1, 1, 2, 3, '#', CellStyle::default());
        assert_eq!(fb.get(1, 1).unwrap().ch, '#');
        assert_eq!(fb.get(2, 3).unwrap().ch, '#');
        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 4).unwrap().ch, ' ');
    }

    #[test]
    fn rows_are_width_sized() {
        let fb = FrameBuffer::new(7, 3);
        for y in 0..3 {
            assert_eq!(fb.row(y).len(), 7);
        }
    }
}
