// ============================================================
// Layer 6 — ASCII Guess Canvas
// ============================================================
// A terminal DrawingSurface. The display rectangle is scaled
// down onto a grid of `cols` x `rows` characters:
//
//   '*' → reference line sample
//   '+' → latest guess in that cell was +1
//   '-' → latest guess in that cell was -1
//   ' ' → nothing drawn yet
//
// Row 0 is the top of the display (y = 0), matching the
// top-left origin of display coordinates. Later draws in the
// same cell overwrite earlier ones, so after a full run the
// grid shows the final decision of every replayed point.

use crate::domain::geometry::{DisplayPoint, GraphicSize};
use crate::domain::training_case::Label;
use crate::domain::traits::DrawingSurface;

const EMPTY:    char = ' ';
const LINE:     char = '*';
const POSITIVE: char = '+';
const NEGATIVE: char = '-';

#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    size:  GraphicSize,
    cols:  usize,
    rows:  usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Grid dimensions are clamped to at least 1 x 1.
    pub fn new(size: GraphicSize, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self { size, cols, rows, cells: vec![EMPTY; cols * rows] }
    }

    /// Plot reference line points given in logical coordinates.
    pub fn draw_reference_line(&mut self, points: &[(f64, f64)]) {
        for &(x, y) in points {
            let p = self.size.translate_for_display(x, y);
            self.plot(p, LINE);
        }
    }

    /// Character at grid cell (col, row), if inside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Number of cells holding `ch`
    pub fn count(&self, ch: char) -> usize {
        self.cells.iter().filter(|&&c| c == ch).count()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 2));
        let border  = format!("+{}+\n", "-".repeat(self.cols));

        out.push_str(&border);
        for row in self.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    /// Map a display point to a grid cell. Points outside the
    /// display rectangle are ignored.
    fn cell_index(&self, p: DisplayPoint) -> Option<usize> {
        let (w, h) = (self.size.width as f64, self.size.height as f64);
        if w <= 0.0 || h <= 0.0 || !(0.0..=w).contains(&p.x) || !(0.0..=h).contains(&p.y) {
            return None;
        }
        let col = ((p.x / w) * self.cols as f64) as usize;
        let row = ((p.y / h) * self.rows as f64) as usize;
        // x == w lands one past the edge
        let col = col.min(self.cols - 1);
        let row = row.min(self.rows - 1);
        Some(row * self.cols + col)
    }

    fn plot(&mut self, p: DisplayPoint, ch: char) {
        if let Some(i) = self.cell_index(p) {
            self.cells[i] = ch;
        }
    }
}

impl DrawingSurface for AsciiCanvas {
    fn draw(&mut self, point: DisplayPoint, guess: Label) {
        let ch = match guess {
            Label::Positive => POSITIVE,
            Label::Negative => NEGATIVE,
        };
        self.plot(point, ch);
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_maps_to_cells() {
        let mut c = AsciiCanvas::new(GraphicSize::new(100, 100), 10, 10);
        c.draw(DisplayPoint { x: 0.0,  y: 0.0  }, Label::Positive);
        c.draw(DisplayPoint { x: 95.0, y: 55.0 }, Label::Negative);
        c.draw(DisplayPoint { x: 100.0, y: 100.0 }, Label::Negative);

        assert_eq!(c.cell(0, 0), Some('+'));
        assert_eq!(c.cell(9, 5), Some('-'));
        assert_eq!(c.cell(9, 9), Some('-'));
        assert_eq!(c.cell(10, 0), None);
    }

    #[test]
    fn test_outside_points_ignored() {
        let mut c = AsciiCanvas::new(GraphicSize::new(10, 10), 5, 5);
        c.draw(DisplayPoint { x: -1.0, y: 5.0 }, Label::Positive);
        c.draw(DisplayPoint { x: 5.0, y: 11.0 }, Label::Positive);
        assert_eq!(c.count('+'), 0);
    }

    #[test]
    fn test_later_draw_overwrites() {
        let mut c = AsciiCanvas::new(GraphicSize::new(10, 10), 1, 1);
        c.draw(DisplayPoint { x: 5.0, y: 5.0 }, Label::Positive);
        c.draw(DisplayPoint { x: 5.0, y: 5.0 }, Label::Negative);
        assert_eq!(c.cell(0, 0), Some('-'));
    }

    #[test]
    fn test_reference_line_is_translated() {
        let mut c = AsciiCanvas::new(GraphicSize::new(10, 10), 10, 10);
        // logical origin → display centre (5, 5)
        c.draw_reference_line(&[(0.0, 0.0)]);
        assert_eq!(c.cell(5, 5), Some('*'));
        assert_eq!(c.count('*'), 1);
    }

    #[test]
    fn test_render_has_border() {
        let c   = AsciiCanvas::new(GraphicSize::new(10, 10), 3, 2);
        let out = c.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "+---+");
        assert_eq!(lines[1], "|   |");
    }
}
