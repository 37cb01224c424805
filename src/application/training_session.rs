// ============================================================
// Layer 2 — TrainingSession
// ============================================================
// Owns one LinearUnit and one generated training set, and runs
// the online training loop in the background.
//
// Lifecycle:
//
//   Uninitialized ──initialize()──▶ Initialized ──train()──▶ Training
//                                                              │
//                                        last iteration done   ▼
//                                                             Idle
//   any state ──close()──▶ Closed
//
// Iteration i of the background loop:
//   1. unit.train(case[i])
//   2. replay cases 0..=i: feed_forward on the display-translated
//      point + bias, send one draw per case to the drawing task
//   3. wait until the drawing task has drawn all of them
//   4. sleep for the pacing interval
//
// The replay redraws the whole history every iteration, so a run
// of N cases produces N(N+1)/2 draw calls. That is the animation:
// every point already seen flips colour as the boundary moves.
//
// While training runs the LinearUnit is moved into the training
// task and the surface into the drawing task. wait() hands both
// back when the run is over.

use std::sync::Arc;
use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle};

use crate::data::generator::TrainingCaseGenerator;
use crate::domain::error::{PerceptronError, SessionError};
use crate::domain::geometry::{DisplayPoint, GraphicSize, ReferenceFunction};
use crate::domain::training_case::{Label, TrainingCase};
use crate::domain::traits::DrawingSurface;
use crate::infra::drawing::{spawn_drawing_context, DrawCommand, DrawingOutcome};
use crate::infra::metrics::IterationRecord;
use crate::ml::evaluator::{accuracy, with_bias};
use crate::ml::linear_unit::{LinearUnit, DEFAULT_LEARNING_RATE};

/// x, y and bias
pub const INPUT_SIZE: usize = 3;

// ─── Session Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Drawing rectangle; training points are drawn from the
    /// same rectangle centred on the origin
    pub size: GraphicSize,

    /// Constant last input of every case
    pub bias: f64,

    pub learning_rate: f64,

    /// Pause after each iteration, in milliseconds
    pub pacing_ms: u64,

    /// Bound of the queue between the trainer and the drawing task
    pub draw_queue_capacity: usize,

    /// Fixed seed for reproducible runs; None seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size:                GraphicSize::default(),
            bias:                1.0,
            learning_rate:       DEFAULT_LEARNING_RATE,
            pacing_ms:           10,
            draw_queue_capacity: 256,
            seed:                None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(SessionError::InvalidConfig(format!(
                "rectangle must be non-empty, got {}x{}",
                self.size.width, self.size.height
            )));
        }
        if !self.bias.is_finite() {
            return Err(SessionError::InvalidConfig(format!(
                "bias must be finite, got {}",
                self.bias
            )));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(SessionError::InvalidConfig(format!(
                "learning rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if self.draw_queue_capacity == 0 {
            return Err(SessionError::InvalidConfig(
                "draw queue capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}

// ─── Session State ────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Initialized,
    Training,
    Idle,
    Closed,
}

impl SessionState {
    pub fn name(self) -> &'static str {
        match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Initialized   => "initialized",
            SessionState::Training      => "training",
            SessionState::Idle          => "idle",
            SessionState::Closed        => "closed",
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Training Report ──────────────────────────────────────────────────────────
/// Summary of a finished run, returned by `wait`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Training iterations completed
    pub iterations: usize,
    /// Draw calls executed on the surface
    pub draw_calls: usize,
    pub weights:    Vec<f64>,
    /// Fraction of the training set the final unit gets right
    pub accuracy:   f64,
    pub history:    Vec<IterationRecord>,
}

/// What the training task returns.
struct TrainerOutput {
    unit:      LinearUnit,
    history:   Vec<IterationRecord>,
    cancelled: bool,
}

type TrainerResult = Result<Result<TrainerOutput, PerceptronError>, JoinError>;

/// Handles to the two background tasks of a running session.
struct Running<S> {
    cancel:  watch::Sender<bool>,
    trainer: JoinHandle<Result<TrainerOutput, PerceptronError>>,
    drawer:  JoinHandle<DrawingOutcome<S>>,
    /// Trainer result, kept if `wait` is dropped between the two joins
    trained: Option<TrainerResult>,
}

// ─── TrainingSession ──────────────────────────────────────────────────────────
pub struct TrainingSession<S: DrawingSurface> {
    config:       SessionConfig,
    rng:          StdRng,
    state:        SessionState,
    surface:      Option<S>,
    line:         Option<ReferenceFunction>,
    training_set: Arc<[TrainingCase]>,
    unit:         Option<LinearUnit>,
    running:      Option<Running<S>>,
}

impl<S: DrawingSurface> TrainingSession<S> {
    /// Validate `config` and create an uninitialized session that
    /// will draw on `surface`.
    pub fn new(config: SessionConfig, surface: S) -> Result<Self, SessionError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            state:        SessionState::Uninitialized,
            surface:      Some(surface),
            line:         None,
            training_set: Arc::from(Vec::new()),
            unit:         None,
            running:      None,
        })
    }

    /// Generate the training set and a fresh unit of size 3.
    /// May be repeated until training starts; each call replaces
    /// the previous set and unit.
    pub fn initialize(
        &mut self,
        training_size: usize,
        line:          ReferenceFunction,
    ) -> Result<(), SessionError> {
        self.expect_state("initialize", &[SessionState::Uninitialized, SessionState::Initialized])?;

        let generator = TrainingCaseGenerator::new(self.config.size, self.config.bias);
        let cases     = generator.generate(training_size, &*line, &mut self.rng);
        let unit      = LinearUnit::new(INPUT_SIZE, self.config.learning_rate, &mut self.rng)?;

        tracing::info!(
            "Session initialized: {} cases in {}x{}, initial weights {:?}",
            cases.len(),
            self.config.size.width,
            self.config.size.height,
            unit.weights(),
        );

        self.training_set = Arc::from(cases);
        self.unit         = Some(unit);
        self.line         = Some(line);
        self.state        = SessionState::Initialized;
        Ok(())
    }

    /// Start the background training loop and return immediately.
    /// Must be called from inside a tokio runtime.
    pub fn train(&mut self) -> Result<(), SessionError> {
        self.expect_state("train", &[SessionState::Initialized])?;
        let handle = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;

        let (unit, surface) = match (self.unit.take(), self.surface.take()) {
            (Some(unit), Some(surface)) => (unit, surface),
            (unit, surface) => {
                self.unit    = unit;
                self.surface = surface;
                return Err(SessionError::InvalidState { operation: "train", state: "incomplete" });
            }
        };

        let (cancel_tx, cancel_rx) = watch::channel(false);
        let (draw_tx, drawer) = spawn_drawing_context(
            &handle,
            surface,
            self.config.draw_queue_capacity,
            cancel_rx.clone(),
        );

        let trainer = handle.spawn(run_training_loop(
            unit,
            Arc::clone(&self.training_set),
            self.config.size,
            self.config.bias,
            self.config.pacing(),
            draw_tx,
            cancel_rx,
        ));

        tracing::info!(
            "Training started: {} cases, pacing {}ms",
            self.training_set.len(),
            self.config.pacing_ms,
        );

        self.running = Some(Running { cancel: cancel_tx, trainer, drawer, trained: None });
        self.state   = SessionState::Training;
        Ok(())
    }

    /// Wait for the background run to finish. Hands the unit and
    /// the surface back to the session and moves it to Idle.
    pub async fn wait(&mut self) -> Result<TrainingReport, SessionError> {
        if self.running.is_none() {
            return Err(self.invalid("wait"));
        }
        let running = self
            .running
            .as_mut()
            .ok_or_else(|| SessionError::TaskFailed("session is not running".to_string()))?;

        if running.trained.is_none() {
            let result = (&mut running.trainer).await;
            running.trained = Some(result);
        }
        let drawn = (&mut running.drawer).await;
        let trained = running.trained.take();
        self.running = None;
        self.state   = SessionState::Idle;

        let output = match trained {
            Some(Ok(result)) => result?,
            Some(Err(e)) => return Err(self.task_failed(e)),
            None => return Err(SessionError::TaskFailed("training result lost".to_string())),
        };
        let drawn = drawn.map_err(|e| self.task_failed(e))?;

        let accuracy = accuracy(&output.unit, &self.training_set)?;
        let report   = TrainingReport {
            iterations: output.history.len(),
            draw_calls: drawn.draws,
            weights:    output.unit.weights().to_vec(),
            accuracy,
            history:    output.history,
        };

        if output.cancelled {
            tracing::warn!("Training stopped early after {} iterations", report.iterations);
        }
        tracing::info!(
            "Training finished: {} iterations, {} draws, accuracy {:.1}%",
            report.iterations,
            report.draw_calls,
            report.accuracy * 100.0,
        );

        self.unit    = Some(output.unit);
        self.surface = Some(drawn.surface);
        self.state   = SessionState::Idle;
        Ok(report)
    }

    /// Cancel any running training and close the session.
    /// Calling it again does nothing.
    pub fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        if let Some(running) = self.running.take() {
            running.cancel.send_replace(true);
            running.trainer.abort();
            running.drawer.abort();
            tracing::info!("Training cancelled");
        }
        tracing::debug!("Session closed from state {}", self.state);
        self.state = SessionState::Closed;
    }

    pub fn state(&self) -> SessionState {
        match (&self.state, &self.running) {
            (SessionState::Training, Some(running)) if running.trainer.is_finished() => {
                SessionState::Idle
            }
            (state, _) => *state,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Generated cases in training order; empty before `initialize`
    pub fn training_set(&self) -> &[TrainingCase] {
        &self.training_set
    }

    /// The unit, unless it is lent to the running training task
    pub fn unit(&self) -> Option<&LinearUnit> {
        self.unit.as_ref()
    }

    /// The surface, unless it is lent to the running drawing task
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn translate_for_display(&self, x: f64, y: f64) -> DisplayPoint {
        self.config.size.translate_for_display(x, y)
    }

    /// (x, line(x)) for every integer x in [-width, width]
    pub fn reference_line_points(&self) -> Result<Vec<(f64, f64)>, SessionError> {
        match &self.line {
            Some(line) => Ok(self.config.size.reference_line_points(&**line)),
            None => Err(self.invalid("sample the reference line")),
        }
    }

    fn expect_state(&self, operation: &'static str, allowed: &[SessionState]) -> Result<(), SessionError> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidState { operation, state: self.state().name() }
    }

    fn task_failed(&mut self, e: JoinError) -> SessionError {
        self.state = SessionState::Closed;
        SessionError::TaskFailed(e.to_string())
    }
}

impl<S: DrawingSurface> Drop for TrainingSession<S> {
    fn drop(&mut self) {
        self.close();
    }
}

// ─── Background Training Loop ─────────────────────────────────────────────────
async fn run_training_loop(
    mut unit:   LinearUnit,
    cases:      Arc<[TrainingCase]>,
    size:       GraphicSize,
    bias:       f64,
    pacing:     Duration,
    draw_tx:    mpsc::Sender<DrawCommand>,
    mut cancel: watch::Receiver<bool>,
) -> Result<TrainerOutput, PerceptronError> {
    let mut history   = Vec::with_capacity(cases.len());
    let mut cancelled = false;

    'training: for (i, case) in cases.iter().enumerate() {
        if *cancel.borrow() {
            cancelled = true;
            break;
        }

        let guess = unit.train(case.inputs(), case.answer())?;
        tracing::debug!(
            "Iteration {}: case {:?} answer {} guess {}",
            i,
            case.point(),
            case.answer(),
            guess,
        );

        // ── Replay every case seen so far ─────────────────────────────────────
        let mut replay_positive = 0usize;
        let mut replay_negative = 0usize;

        for seen in &cases[..=i] {
            if *cancel.borrow() {
                cancelled = true;
                break 'training;
            }
            let (x, y)  = seen.point();
            let point   = size.translate_for_display(x, y);
            let replay  = unit.feed_forward(&with_bias(&point.as_inputs(), bias))?;
            match replay {
                Label::Positive => replay_positive += 1,
                Label::Negative => replay_negative += 1,
            }
            if draw_tx.send(DrawCommand::Guess { point, guess: replay }).await.is_err() {
                cancelled = true;
                break 'training;
            }
        }

        // ── Wait until this iteration is on the surface ───────────────────────
        let (ack_tx, ack_rx) = oneshot::channel();
        if draw_tx.send(DrawCommand::Barrier(ack_tx)).await.is_err() || ack_rx.await.is_err() {
            cancelled = true;
            break;
        }

        history.push(IterationRecord {
            iteration: i,
            answer:    case.answer(),
            guess,
            replay_positive,
            replay_negative,
        });

        let stopped = tokio::select! {
            _ = tokio::time::sleep(pacing) => false,
            _ = cancel.changed() => true,
        };
        if stopped {
            cancelled = true;
            break;
        }
    }

    Ok(TrainerOutput { unit, history, cancelled })
}
