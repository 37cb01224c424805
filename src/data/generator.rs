// ============================================================
// Layer 4 — Training Case Generator
// ============================================================
// Produces synthetic labelled points inside a rectangle that
// is centred on the origin:
//
//   x ~ U[-width/2,  width/2]
//   y ~ U[-height/2, height/2]
//   label = -1 if y < line(x) else +1
//   inputs = (x, y, bias)
//
// The RNG is passed in, so a fixed seed always yields the same
// training set.
//
// Reference: rand crate documentation

use rand::Rng;

use crate::domain::geometry::GraphicSize;
use crate::domain::training_case::{Label, TrainingCase};

/// Uniform sample between `a` and `b`, whichever order they come in.
pub fn random_in_interval<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if b > a { (a, b) } else { (b, a) };
    lo + rng.gen::<f64>() * (hi - lo)
}

/// Label a point against the reference line.
/// Points exactly on the line are Positive.
pub fn label_for(x: f64, y: f64, line: &dyn Fn(f64) -> f64) -> Label {
    if y < line(x) { Label::Negative } else { Label::Positive }
}

pub struct TrainingCaseGenerator {
    size: GraphicSize,
    bias: f64,
}

impl TrainingCaseGenerator {
    pub fn new(size: GraphicSize, bias: f64) -> Self {
        Self { size, bias }
    }

    /// Generate `count` cases in order. The order is the training order.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        line:  &dyn Fn(f64) -> f64,
        rng:   &mut R,
    ) -> Vec<TrainingCase> {
        let half_w = self.size.half_width();
        let half_h = self.size.half_height();

        let cases: Vec<TrainingCase> = (0..count)
            .map(|_| {
                let x = random_in_interval(&mut *rng, -half_w, half_w);
                let y = random_in_interval(&mut *rng, -half_h, half_h);
                TrainingCase::new(vec![x, y, self.bias], label_for(x, y, line))
            })
            .collect();

        let positives = cases.iter().filter(|c| c.answer() == Label::Positive).count();
        tracing::debug!(
            "Generated {} training cases ({} positive, {} negative)",
            cases.len(),
            positives,
            cases.len() - positives,
        );
        cases
    }
}
