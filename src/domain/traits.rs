// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The training session never renders anything itself. It hands
// every guess to a DrawingSurface, which owns whatever pixels,
// grid or log the guesses end up in.
//
// Implementations:
//   - AsciiCanvas      → character grid printed to the terminal
//   - RecordingSurface → keeps every call, used by tests
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use crate::domain::geometry::DisplayPoint;
use crate::domain::training_case::Label;

// ─── DrawingSurface ───────────────────────────────────────────────────────────
/// Receives the perceptron's guesses in display coordinates.
///
/// A surface is moved onto its own drawing task when training
/// starts, so it only needs to be `Send`. Calls are always
/// serialised; no two `draw` calls ever run at the same time.
pub trait DrawingSurface: Send + 'static {
    /// Draw one guess at a display point.
    fn draw(&mut self, point: DisplayPoint, guess: Label);
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(usize);

    impl DrawingSurface for Counter {
        fn draw(&mut self, _point: DisplayPoint, _guess: Label) {
            self.0 += 1;
        }
    }

    fn draw_twice(surface: &mut dyn DrawingSurface) {
        surface.draw(DisplayPoint { x: 1.0, y: 2.0 }, Label::Positive);
        surface.draw(DisplayPoint { x: 3.0, y: 4.0 }, Label::Negative);
    }

    #[test]
    fn test_surface_usable_as_trait_object() {
        let mut counter = Counter(0);
        draw_twice(&mut counter);
        assert_eq!(counter.0, 2);
    }
}
