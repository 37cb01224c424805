// ============================================================
// Layer 3 — Error Types
// ============================================================
// Typed errors for the perceptron and the training session.
//
// Two families:
//   - PerceptronError: contract violations on a LinearUnit
//     (wrong input length, empty weight vector, bad rate)
//   - SessionError: configuration and lifecycle errors raised
//     by TrainingSession
//
// The CLI layer converts both into anyhow::Error with `?`.
//
// Reference: Rust Book §9 (Recoverable Errors with Result)

use thiserror::Error;

/// Errors raised by a single LinearUnit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerceptronError {
    /// The input vector length differs from the weight vector length.
    /// Inputs must already include the bias term.
    #[error("input length mismatch: unit has {expected} weights, got {got} inputs")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("a linear unit needs at least one weight")]
    EmptyWeights,

    #[error("learning rate must be in (0, 1], got {0}")]
    InvalidLearningRate(f64),
}

/// Errors raised by TrainingSession.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    InvalidConfig(String),

    /// An operation was called in a state that does not allow it,
    /// e.g. `train` before `initialize`
    #[error("cannot {operation} while session is {state}")]
    InvalidState {
        operation: &'static str,
        state:     &'static str,
    },

    #[error("training must be started from inside a tokio runtime")]
    NoRuntime,

    #[error(transparent)]
    Perceptron(#[from] PerceptronError),

    #[error("background task failed: {0}")]
    TaskFailed(String),
}
