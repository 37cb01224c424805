// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that define what the system is about:
// labels, training cases, coordinates, the reference line and
// the drawing abstraction.
//
// Rules for this layer:
//   - NO tokio, NO file I/O
//   - NO training maths (that lives in Layer 5)
//   - Only structs, enums, traits and error types
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// PerceptronError and SessionError
pub mod error;

/// Display coordinates, rectangle size and the reference line
pub mod geometry;

/// Label (-1 / +1) and TrainingCase
pub mod training_case;

/// DrawingSurface abstraction implemented by Layer 6
pub mod traits;
