// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands:
//   train        — run a training session and print the guess view
//   evaluate     — classify one point with an untrained unit
//   line         — list the reference line samples
//   init-config  — write a default run config as JSON
//
// Negative numbers are common here (--intercept -5, --x -30),
// so numeric flags accept leading hyphens.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::training_session::SessionConfig;
use crate::domain::geometry::{GraphicSize, ReferenceLine};
use crate::infra::config_store::{RunConfig, DEFAULT_TRAINING_SIZE};
use crate::ml::linear_unit::DEFAULT_LEARNING_RATE;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a perceptron on random points and show its guesses
    Train(TrainArgs),

    /// Classify a single point with a fresh, untrained perceptron
    Evaluate(EvaluateArgs),

    /// Print the reference line points for a rectangle
    Line(LineArgs),

    /// Write a default run configuration file
    InitConfig(InitConfigArgs),
}

/// Rectangle and reference line, shared by `train` and `line`
#[derive(Args, Debug, Clone)]
pub struct GeometryArgs {
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Reference line: y = slope * x + intercept
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub slope: f64,

    #[arg(long, default_value_t = -5.0, allow_hyphen_values = true)]
    pub intercept: f64,
}

impl GeometryArgs {
    pub fn size(&self) -> GraphicSize {
        GraphicSize::new(self.width, self.height)
    }

    pub fn line(&self) -> ReferenceLine {
        ReferenceLine::new(self.slope, self.intercept)
    }
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// JSON run config; when given, the flags below are ignored
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Number of generated training cases
    #[arg(long, default_value_t = DEFAULT_TRAINING_SIZE)]
    pub training_size: usize,

    /// Constant bias input appended to every point
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub bias: f64,

    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub lr: f64,

    /// Pause between iterations in milliseconds
    #[arg(long, default_value_t = 10)]
    pub pacing_ms: u64,

    #[arg(long, default_value_t = 256)]
    pub queue_capacity: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the printed guess view, in characters
    #[arg(long, default_value_t = 60)]
    pub cols: usize,

    /// Height of the printed guess view, in characters
    #[arg(long, default_value_t = 30)]
    pub rows: usize,

    /// Directory for metrics.csv
    #[arg(long)]
    pub metrics_dir: Option<PathBuf>,
}

impl From<&TrainArgs> for RunConfig {
    fn from(a: &TrainArgs) -> Self {
        RunConfig {
            session: SessionConfig {
                size:                a.geometry.size(),
                bias:                a.bias,
                learning_rate:       a.lr,
                pacing_ms:           a.pacing_ms,
                draw_queue_capacity: a.queue_capacity,
                seed:                a.seed,
            },
            training_size: a.training_size,
            line:          a.geometry.line(),
        }
    }
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub x: f64,

    #[arg(long, allow_hyphen_values = true)]
    pub y: f64,

    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub bias: f64,

    #[arg(long, default_value_t = DEFAULT_LEARNING_RATE)]
    pub lr: f64,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct LineArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config
    #[arg(long, default_value = "perceptron.json")]
    pub out: PathBuf,
}
