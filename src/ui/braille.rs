/// Braille canvas for high-resolution terminal drawing. Each terminal cell
/// holds a 2x4 grid of Braille dots, giving 2x horizontal and 4x vertical
/// resolution over plain character cells.
pub struct BrailleCanvas {
    width: usize,  // in terminal cells
    height: usize, // in terminal cells
    dots: Vec<u8>, // one dot pattern per cell, row-major
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![0; width * height],
        }
    }

    /// Set a single dot at pixel coordinates. Out-of-range pixels are
    /// dropped rather than wrapped.
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot layout per cell:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let bit = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            _ => 7,      // dot 8
        };

        self.dots[cell_y * self.width + cell_x] |= 1 << bit;
    }

    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Fill one full-width pixel row.
    pub fn draw_horizontal_line(&mut self, pixel_y: usize) {
        for px in 0..self.pixel_width() {
            self.set_pixel(px, pixel_y);
        }
    }

    /// Raw dot pattern of one cell; zero outside the canvas. Lets callers
    /// merge cells from several canvases before converting to a character.
    pub fn pattern(&self, cell_x: usize, cell_y: usize) -> u8 {
        if cell_x >= self.width || cell_y >= self.height {
            return 0;
        }
        self.dots[cell_y * self.width + cell_x]
    }

    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }
        braille_char(self.pattern(cell_x, cell_y))
    }

    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

/// Braille block starts at U+2800; the dot pattern is the offset.
pub fn braille_char(pattern: u8) -> char {
    char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot_maps_to_braille_char() {
        let mut canvas = BrailleCanvas::new(2, 2);

        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '\u{2801}'); // dot 1

        canvas.set_pixel(1, 3);
        assert_eq!(canvas.to_char(0, 0), '\u{2881}'); // dots 1 + 8
    }

    #[test]
    fn test_fill_rect_fills_whole_cell() {
        let mut canvas = BrailleCanvas::new(2, 1);

        canvas.fill_rect(0, 0, 2, 4);

        assert_eq!(canvas.to_char(0, 0), '\u{28FF}'); // all eight dots
        assert_eq!(canvas.to_char(1, 0), '\u{2800}'); // untouched neighbor
    }

    #[test]
    fn test_out_of_range_pixels_are_ignored() {
        let mut canvas = BrailleCanvas::new(1, 1);

        canvas.set_pixel(10, 10);

        assert_eq!(canvas.to_char(0, 0), '\u{2800}');
        assert_eq!(canvas.to_char(5, 5), ' ');
    }

    #[test]
    fn test_pattern_merging_across_canvases() {
        let mut a = BrailleCanvas::new(1, 1);
        let mut b = BrailleCanvas::new(1, 1);

        a.set_pixel(0, 0); // dot 1
        b.set_pixel(1, 3); // dot 8

        let merged = a.pattern(0, 0) | b.pattern(0, 0);
        assert_eq!(braille_char(merged), '\u{2881}');
        assert_eq!(a.pattern(9, 9), 0);
    }

    #[test]
    fn test_horizontal_line_spans_all_cells() {
        let mut canvas = BrailleCanvas::new(3, 1);

        canvas.draw_horizontal_line(0);

        for x in 0..3 {
            assert_eq!(canvas.to_char(x, 0), '\u{2809}'); // dots 1 + 4
        }
    }
}
