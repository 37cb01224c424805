// ============================================================
// Layer 3 — Geometry and Reference Line
// ============================================================
// Training happens in a logical coordinate space centred on
// the origin. The drawing surface uses a top-left origin.
//
//   logical:  x ∈ [-w/2, w/2], y ∈ [-h/2, h/2]
//   display:  x ∈ [0, w],      y ∈ [0, h]
//
// translate_for_display() maps one onto the other.
//
// The reference line is the ground truth y = f(x) used to
// label generated points. It is a plain closure so callers
// can pass any function; ReferenceLine is the serialisable
// straight-line form used by the config file and the CLI.
//
// Reference: Rust Book §13 (Closures)

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Ground-truth separating function, shared with the background task.
pub type ReferenceFunction = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Size of the drawing rectangle, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicSize {
    pub width:  u32,
    pub height: u32,
}

impl GraphicSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn half_width(&self) -> f64 {
        self.width as f64 / 2.0
    }

    pub fn half_height(&self) -> f64 {
        self.height as f64 / 2.0
    }

    /// Map a centred logical point to top-left-origin display space.
    pub fn translate_for_display(&self, x: f64, y: f64) -> DisplayPoint {
        DisplayPoint {
            x: x + self.half_width(),
            y: y + self.half_height(),
        }
    }

    /// Sample the reference function at every integer x in [-width, width].
    /// Points are returned in logical (untranslated) coordinates.
    pub fn reference_line_points(&self, line: &dyn Fn(f64) -> f64) -> Vec<(f64, f64)> {
        let w = self.width as i64;
        (-w..=w)
            .map(|x| {
                let x = x as f64;
                (x, line(x))
            })
            .collect()
    }
}

impl Default for GraphicSize {
    fn default() -> Self {
        Self { width: 400, height: 400 }
    }
}

/// A point in display coordinates, handed to a DrawingSurface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub x: f64,
    pub y: f64,
}

impl DisplayPoint {
    pub fn as_inputs(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

// ─── ReferenceLine ────────────────────────────────────────────────────────────
/// Straight line y = slope * x + intercept.
/// The default (1, -5) is the line y = x - 5.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub slope:     f64,
    pub intercept: f64,
}

impl ReferenceLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn into_function(self) -> ReferenceFunction {
        Arc::new(move |x| self.eval(x))
    }
}

impl Default for ReferenceLine {
    fn default() -> Self {
        Self { slope: 1.0, intercept: -5.0 }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_moves_origin_to_centre() {
        let size = GraphicSize::new(200, 100);
        let p    = size.translate_for_display(0.0, 0.0);
        assert_eq!(p, DisplayPoint { x: 100.0, y: 50.0 });

        let corner = size.translate_for_display(-100.0, -50.0);
        assert_eq!(corner, DisplayPoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_translate_handles_odd_sizes() {
        let size = GraphicSize::new(5, 3);
        let p    = size.translate_for_display(1.0, 1.0);
        assert_eq!(p, DisplayPoint { x: 3.5, y: 2.5 });
    }

    #[test]
    fn test_reference_points_cover_double_width() {
        let size   = GraphicSize::new(10, 10);
        let line   = ReferenceLine::default();
        let points = size.reference_line_points(&|x| line.eval(x));

        // every integer from -10 to 10 inclusive
        assert_eq!(points.len(), 21);
        assert_eq!(points[0], (-10.0, -15.0));
        assert_eq!(points[20], (10.0, 5.0));
    }

    #[test]
    fn test_reference_line_default_is_x_minus_five() {
        let f = ReferenceLine::default().into_function();
        assert_eq!(f(5.0), 0.0);
        assert_eq!(f(0.0), -5.0);
    }
}
