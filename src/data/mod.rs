// ============================================================
// Layer 4 — Data
// ============================================================
// Synthetic training data. There are no files to load: every
// training set is drawn from a seeded RNG and labelled against
// the caller's reference function.
//
//   GraphicSize + ReferenceFunction + RNG
//       │
//       ▼
//   TrainingCaseGenerator → Vec<TrainingCase> (training order)

/// Random points labelled above/below the reference line
pub mod generator;
