// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records one row per training iteration to a CSV file.
//
// Columns:
//   - iteration:        0-based index of the training case
//   - answer:           desired label of that case (-1 / 1)
//   - guess:            unit's guess before the update (-1 / 1)
//   - replay_positive:  +1 guesses drawn in that iteration's replay
//   - replay_negative:  -1 guesses drawn in that iteration's replay
//
// Output file: <dir>/metrics.csv
//
// Example CSV output:
//   iteration,answer,guess,replay_positive,replay_negative
//   0,1,-1,1,0
//   1,-1,-1,1,1
//   ...

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

use crate::domain::training_case::Label;

const HEADER: &str = "iteration,answer,guess,replay_positive,replay_negative";

/// What happened in a single training iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration:       usize,
    pub answer:          Label,
    pub guess:           Label,
    pub replay_positive: usize,
    pub replay_negative: usize,
}

impl IterationRecord {
    /// True if the unit's weights changed in this iteration
    pub fn was_update(&self) -> bool {
        self.answer != self.guess
    }
}

/// Writes iteration records to a CSV file.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create the directory and a fresh CSV with its header.
    /// An existing metrics.csv is overwritten; each run gets its own file.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create metrics directory '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");
        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create '{}'", csv_path.display()))?;
        writeln!(f, "{HEADER}")?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append every record as a row.
    pub fn log_all(&self, records: &[IterationRecord]) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        for r in records {
            writeln!(
                f,
                "{},{},{},{},{}",
                r.iteration,
                r.answer.value(),
                r.guess.value(),
                r.replay_positive,
                r.replay_negative,
            )?;
        }

        tracing::debug!("Logged {} iterations to '{}'", records.len(), self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn record(iteration: usize, answer: Label, guess: Label) -> IterationRecord {
        IterationRecord {
            iteration,
            answer,
            guess,
            replay_positive: iteration + 1,
            replay_negative: 0,
        }
    }

    #[test]
    fn test_was_update() {
        assert!(record(0, Label::Positive, Label::Negative).was_update());
        assert!(!record(0, Label::Negative, Label::Negative).was_update());
    }

    #[test]
    fn test_csv_rows_written() {
        let dir    = std::env::temp_dir().join(format!("perceptron_metrics_{}", std::process::id()));
        let logger = MetricsLogger::new(&dir).unwrap();
        logger
            .log_all(&[
                record(0, Label::Positive, Label::Negative),
                record(1, Label::Negative, Label::Negative),
            ])
            .unwrap();

        let text  = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![HEADER, "0,1,-1,1,0", "1,-1,-1,2,0"]);

        fs::remove_dir_all(&dir).ok();
    }
}
