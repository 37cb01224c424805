// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the outside world:
//
//   drawing.rs      — the drawing context task that owns a
//                     DrawingSurface, plus RecordingSurface
//
//   canvas.rs       — AsciiCanvas, a terminal DrawingSurface
//
//   metrics.rs      — per-iteration CSV log
//
//   config_store.rs — RunConfig JSON load/save
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Drawing task and channel protocol
pub mod drawing;

/// Character-grid guess view
pub mod canvas;

/// Training metrics CSV logger
pub mod metrics;

/// Run configuration persistence
pub mod config_store;
