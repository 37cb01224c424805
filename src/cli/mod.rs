// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands the work to Layer 2.
// This is the only layer that prints to stdout.
//
// Reference: Rust Book §12 (CLI programs)

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Commands, EvaluateArgs, InitConfigArgs, LineArgs, TrainArgs};

use crate::application::evaluate_use_case::EvaluateUseCase;
use crate::application::training_session::{TrainingReport, TrainingSession};
use crate::infra::canvas::AsciiCanvas;
use crate::infra::config_store::{ConfigStore, RunConfig};
use crate::infra::metrics::MetricsLogger;

#[derive(Parser, Debug)]
#[command(
    name = "perceptron-trainer",
    version,
    about = "Train a perceptron online against random 2D points and watch its guesses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)      => run_train(args).await,
            Commands::Evaluate(args)   => run_evaluate(args),
            Commands::Line(args)       => run_line(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

/// Handles the `train` subcommand.
/// Ctrl-C closes the session and keeps whatever was drawn so far.
async fn run_train(args: TrainArgs) -> Result<()> {
    let run = match &args.config {
        Some(path) => ConfigStore::new(path).load()?,
        None       => RunConfig::from(&args),
    };
    let size = run.session.size;
    let line = run.line.into_function();

    let mut canvas = AsciiCanvas::new(size, args.cols, args.rows);
    canvas.draw_reference_line(&size.reference_line_points(&*line));

    let mut session = TrainingSession::new(run.session.clone(), canvas)
        .context("Cannot create training session")?;
    session.initialize(run.training_size, line)?;

    tracing::info!(
        "Training on {} cases against y = {}x + {}",
        run.training_size,
        run.line.slope,
        run.line.intercept,
    );
    session.train()?;

    let finished = tokio::select! {
        report = session.wait() => Some(report),
        _ = tokio::signal::ctrl_c() => None,
    };

    let report = match finished {
        Some(report) => report?,
        None => {
            session.close();
            println!("Interrupted. Training cancelled.");
            return Ok(());
        }
    };

    if let Some(canvas) = session.surface() {
        print!("{}", canvas.render());
    }
    print_report(&report);

    if let Some(dir) = &args.metrics_dir {
        let logger = MetricsLogger::new(dir)?;
        logger.log_all(&report.history)?;
        println!("Metrics written to {}", logger.csv_path().display());
    }

    session.close();
    Ok(())
}

fn print_report(report: &TrainingReport) {
    let updates = report.history.iter().filter(|r| r.was_update()).count();
    println!(
        "Iterations: {} | updates: {} | draws: {} | accuracy: {:.1}%",
        report.iterations,
        updates,
        report.draw_calls,
        report.accuracy * 100.0,
    );
    println!("Final weights: {:?}", report.weights);
}

/// Handles the `evaluate` subcommand.
fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let use_case = EvaluateUseCase::new(args.bias, args.lr, args.seed);
    let eval     = use_case.evaluate(args.x, args.y)?;

    println!("inputs:  {:?}", eval.inputs);
    println!("weights: {:?}", eval.weights);
    println!("guess:   {}", eval.guess);
    Ok(())
}

/// Handles the `line` subcommand.
fn run_line(args: LineArgs) -> Result<()> {
    let line = args.geometry.line();
    for (x, y) in args.geometry.size().reference_line_points(&|x| line.eval(x)) {
        println!("{x}\t{y}");
    }
    Ok(())
}

/// Handles the `init-config` subcommand.
fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let store = ConfigStore::new(&args.out);
    store.save(&RunConfig::default())?;
    println!("Wrote default config to {}", store.path().display());
    Ok(())
}
