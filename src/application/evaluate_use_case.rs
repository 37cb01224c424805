// ============================================================
// Layer 2 — Evaluate Use Case
// ============================================================
// Classifies a single point with a fresh, untrained LinearUnit.
//
//   (x, y) ──with_bias──▶ (x, y, bias) ──feed_forward──▶ -1 / +1
//
// Useful for checking what a random starting unit does before
// any training has happened.

use rand::{rngs::StdRng, SeedableRng};

use crate::application::training_session::INPUT_SIZE;
use crate::domain::error::PerceptronError;
use crate::domain::training_case::Label;
use crate::ml::evaluator::with_bias;
use crate::ml::linear_unit::LinearUnit;

/// Result of one evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub inputs:  Vec<f64>,
    pub weights: Vec<f64>,
    pub guess:   Label,
}

pub struct EvaluateUseCase {
    bias:          f64,
    learning_rate: f64,
    seed:          Option<u64>,
}

impl EvaluateUseCase {
    pub fn new(bias: f64, learning_rate: f64, seed: Option<u64>) -> Self {
        Self { bias, learning_rate, seed }
    }

    pub fn evaluate(&self, x: f64, y: f64) -> Result<Evaluation, PerceptronError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let unit   = LinearUnit::new(INPUT_SIZE, self.learning_rate, &mut rng)?;
        let inputs = with_bias(&[x, y], self.bias);
        let guess  = unit.feed_forward(&inputs)?;

        tracing::debug!("Evaluated {:?} with weights {:?}: {}", inputs, unit.weights(), guess);

        Ok(Evaluation {
            inputs,
            weights: unit.weights().to_vec(),
            guess,
        })
    }
}
