// ============================================================
// Layer 6 — Drawing Context
// ============================================================
// Every DrawingSurface call happens on one dedicated tokio task
// that owns the surface. The training task never touches the
// surface directly; it sends DrawCommands over a bounded channel:
//
//   training task ──Guess──▶ ┐
//                 ──Guess──▶ │ mpsc (bounded)  ──▶ drawing task ──▶ surface.draw()
//                 ──Barrier─▶ ┘                          │
//                 ◀────────────── oneshot ack ───────────┘
//
// A Barrier is acknowledged only after every command queued
// before it has been drawn.
//
// Once the cancel flag flips to true the drawing task stops
// drawing: queued guesses are dropped, not drawn.
//
// Reference: tokio docs (mpsc, oneshot, watch)

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use crate::domain::geometry::DisplayPoint;
use crate::domain::training_case::Label;
use crate::domain::traits::DrawingSurface;

/// Message sent from the training task to the drawing task.
#[derive(Debug)]
pub enum DrawCommand {
    Guess { point: DisplayPoint, guess: Label },
    Barrier(oneshot::Sender<()>),
}

/// What the drawing task hands back when its channel closes.
pub struct DrawingOutcome<S> {
    pub surface: S,
    /// Number of `draw` calls actually executed
    pub draws:   usize,
}

/// Spawn the drawing task on `handle`.
/// Returns the sending side of its queue and the task handle.
pub fn spawn_drawing_context<S: DrawingSurface>(
    handle:   &Handle,
    surface:  S,
    capacity: usize,
    cancel:   watch::Receiver<bool>,
) -> (mpsc::Sender<DrawCommand>, JoinHandle<DrawingOutcome<S>>) {
    let (tx, mut rx) = mpsc::channel::<DrawCommand>(capacity);

    let task = handle.spawn(async move {
        let mut surface = surface;
        let mut draws   = 0usize;

        while let Some(cmd) = rx.recv().await {
            if *cancel.borrow() {
                tracing::debug!("Drawing context cancelled after {} draws", draws);
                break;
            }
            match cmd {
                DrawCommand::Guess { point, guess } => {
                    surface.draw(point, guess);
                    draws += 1;
                }
                DrawCommand::Barrier(ack) => {
                    // receiver gone means the trainer stopped waiting
                    let _ = ack.send(());
                }
            }
        }

        DrawingOutcome { surface, draws }
    });

    (tx, task)
}

// ─── RecordingSurface ─────────────────────────────────────────────────────────
/// One recorded `draw` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub point: DisplayPoint,
    pub guess: Label,
}

/// Surface that remembers every call. Clones share the same log,
/// so a caller can keep one clone and inspect it after the
/// original has been moved onto the drawing task.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<DrawCall>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw(&mut self, point: DisplayPoint, guess: Label) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DrawCall { point, guess });
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn guess(x: f64) -> DrawCommand {
        DrawCommand::Guess {
            point: DisplayPoint { x, y: 0.0 },
            guess: Label::Positive,
        }
    }

    #[tokio::test]
    async fn test_barrier_acked_after_prior_draws() {
        let recorder          = RecordingSurface::new();
        let (_cancel_tx, rx)  = watch::channel(false);
        let (tx, task)        = spawn_drawing_context(&Handle::current(), recorder.clone(), 4, rx);

        for i in 0..10 {
            tx.send(guess(i as f64)).await.unwrap();
        }
        let (ack_tx, ack_rx) = oneshot::channel();
        tx.send(DrawCommand::Barrier(ack_tx)).await.unwrap();
        ack_rx.await.unwrap();

        // all ten were drawn, in order, before the ack
        let xs: Vec<f64> = recorder.calls().iter().map(|c| c.point.x).collect();
        assert_eq!(xs, (0..10).map(|i| i as f64).collect::<Vec<_>>());

        drop(tx);
        let outcome = task.await.unwrap();
        assert_eq!(outcome.draws, 10);
    }

    #[tokio::test]
    async fn test_cancel_stops_drawing() {
        let recorder        = RecordingSurface::new();
        let (cancel_tx, rx) = watch::channel(false);
        let (tx, task)      = spawn_drawing_context(&Handle::current(), recorder.clone(), 16, rx);

        cancel_tx.send_replace(true);
        for i in 0..5 {
            // the task may already have exited, so ignore send errors
            let _ = tx.send(guess(i as f64)).await;
        }
        drop(tx);

        let outcome = task.await.unwrap();
        assert_eq!(outcome.draws, 0);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_recording_clones_share_log() {
        let recorder = RecordingSurface::new();
        let mut moved = recorder.clone();
        moved.draw(DisplayPoint { x: 1.0, y: 1.0 }, Label::Negative);
        assert_eq!(recorder.len(), 1);
        assert_eq!(recorder.calls()[0].guess, Label::Negative);
    }
}
