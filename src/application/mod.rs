// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers:
//
//   training_session.rs  — generate data, run the background
//                          training loop, feed the drawing task
//   evaluate_use_case.rs — classify one point with a fresh unit
//
// Rules for this layer:
//   - No perceptron maths here (Layer 5)
//   - No printing here (Layer 1)
//   - Only workflow and lifecycle

/// Training lifecycle and background loop
pub mod training_session;

/// Single-point classification
pub mod evaluate_use_case;
