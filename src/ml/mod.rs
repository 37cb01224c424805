// ============================================================
// Layer 5 — ML Layer
// ============================================================
// All perceptron maths lives here and nowhere else.
//
//   linear_unit.rs — weight vector, feed-forward, online update
//   evaluator.rs   — bias concatenation and accuracy scoring
//
// Nothing in this layer knows about tokio, drawing or files,
// so every function is a plain synchronous call that can be
// unit tested with a seeded RNG.

/// The perceptron itself
pub mod linear_unit;

/// Pure helpers for scoring and single-point evaluation
pub mod evaluator;
