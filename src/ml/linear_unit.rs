// ============================================================
// Layer 5 — LinearUnit (Perceptron)
// ============================================================
// A single linear threshold unit:
//
//   sum   = Σ inputs[i] * weights[i]
//   guess = +1 if sum > 0 else -1
//
// Online training, one example at a time:
//
//   error      = desired - guess          ∈ {-2, 0, +2}
//   weights[i] += learning_rate * error * inputs[i]
//
// A correct guess gives error 0, so the weights do not move.
// The bias is just one more input (conventionally 1.0, last).
//
// Reference: Rosenblatt (1958) The Perceptron

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::error::PerceptronError;
use crate::domain::training_case::Label;

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Number of random steps per unit of weight when initialising.
/// Weights are drawn from {-1.00, -0.99, ..., 0.99, 1.00}.
const WEIGHT_STEPS: i32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearUnit {
    weights:       Vec<f64>,
    learning_rate: f64,
}

impl LinearUnit {
    /// Create a unit with `size` random weights in [-1, 1].
    /// `size` counts the bias input.
    pub fn new<R: Rng + ?Sized>(
        size:          usize,
        learning_rate: f64,
        rng:           &mut R,
    ) -> Result<Self, PerceptronError> {
        let weights = (0..size)
            .map(|_| rng.gen_range(-WEIGHT_STEPS..=WEIGHT_STEPS) as f64 / WEIGHT_STEPS as f64)
            .collect();
        Self::with_weights(weights, learning_rate)
    }

    /// Create a unit from explicit weights.
    pub fn with_weights(weights: Vec<f64>, learning_rate: f64) -> Result<Self, PerceptronError> {
        if weights.is_empty() {
            return Err(PerceptronError::EmptyWeights);
        }
        if !(learning_rate > 0.0 && learning_rate <= 1.0) {
            return Err(PerceptronError::InvalidLearningRate(learning_rate));
        }
        Ok(Self { weights, learning_rate })
    }

    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Classify `inputs`. No side effects.
    pub fn feed_forward(&self, inputs: &[f64]) -> Result<Label, PerceptronError> {
        self.check_len(inputs)?;
        let sum: f64 = inputs
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum();
        Ok(Label::from_sum(sum))
    }

    /// Nudge the weights towards `desired` for this one example.
    /// Returns the guess made before the update.
    pub fn train(&mut self, inputs: &[f64], desired: Label) -> Result<Label, PerceptronError> {
        let guess = self.feed_forward(inputs)?;
        let error = (desired.value() - guess.value()) as f64;

        if error != 0.0 {
            for (w, x) in self.weights.iter_mut().zip(inputs) {
                *w += self.learning_rate * error * x;
            }
        }
        Ok(guess)
    }

    fn check_len(&self, inputs: &[f64]) -> Result<(), PerceptronError> {
        if inputs.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                got:      inputs.len(),
            });
        }
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn unit(weights: &[f64]) -> LinearUnit {
        LinearUnit::with_weights(weights.to_vec(), DEFAULT_LEARNING_RATE).unwrap()
    }

    #[test]
    fn test_positive_sum_gives_positive_guess() {
        // 2 - 1 + 0 = 1
        let u = unit(&[1.0, -1.0, 0.0]);
        assert_eq!(u.feed_forward(&[2.0, 1.0, 5.0]).unwrap(), Label::Positive);
    }

    #[test]
    fn test_zero_sum_gives_negative_guess() {
        // 1 - 1 + 0 = 0
        let u = unit(&[1.0, -1.0, 0.0]);
        assert_eq!(u.feed_forward(&[1.0, 1.0, 0.0]).unwrap(), Label::Negative);
    }

    #[test]
    fn test_feed_forward_matches_dot_product_sign() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let u      = LinearUnit::new(3, DEFAULT_LEARNING_RATE, &mut rng).unwrap();
            let inputs = [rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0), 1.0];
            let dot: f64 = inputs.iter().zip(u.weights()).map(|(a, b)| a * b).sum();
            let expected = if dot > 0.0 { Label::Positive } else { Label::Negative };
            assert_eq!(u.feed_forward(&inputs).unwrap(), expected);
        }
    }

    #[test]
    fn test_correct_guess_leaves_weights_unchanged() {
        let mut u  = unit(&[1.0, -1.0, 0.0]);
        let before = u.weights().to_vec();
        let guess  = u.train(&[2.0, 1.0, 5.0], Label::Positive).unwrap();
        assert_eq!(guess, Label::Positive);
        assert_eq!(u.weights(), before.as_slice());
    }

    #[test]
    fn test_wrong_guess_moves_weights_by_rule() {
        let mut u  = LinearUnit::with_weights(vec![1.0, -1.0, 0.0], 0.5).unwrap();
        let inputs = [2.0, 1.0, 5.0];
        // guess is +1, desired -1 → error = -2
        let guess = u.train(&inputs, Label::Negative).unwrap();
        assert_eq!(guess, Label::Positive);
        assert_eq!(u.weights(), &[1.0 - 2.0, -1.0 - 1.0, 0.0 - 5.0]);
    }

    #[test]
    fn test_negative_to_positive_update() {
        let mut u = LinearUnit::with_weights(vec![0.0, 0.0, 0.0], 0.25).unwrap();
        // sum 0 → guess -1, desired +1 → error = +2
        u.train(&[1.0, -2.0, 1.0], Label::Positive).unwrap();
        assert_eq!(u.weights(), &[0.5, -1.0, 0.5]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let mut u = unit(&[1.0, -1.0, 0.0]);
        let err   = u.feed_forward(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, PerceptronError::DimensionMismatch { expected: 3, got: 2 });

        let before = u.weights().to_vec();
        assert!(u.train(&[1.0, 2.0, 3.0, 4.0], Label::Positive).is_err());
        assert_eq!(u.weights(), before.as_slice());
    }

    #[test]
    fn test_random_weights_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let u       = LinearUnit::new(1000, DEFAULT_LEARNING_RATE, &mut rng).unwrap();
        assert_eq!(u.size(), 1000);
        assert!(u.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
    }

    #[test]
    fn test_same_seed_same_weights() {
        let a = LinearUnit::new(3, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = LinearUnit::new(3, 0.1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_construction() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            LinearUnit::new(0, 0.01, &mut rng).unwrap_err(),
            PerceptronError::EmptyWeights
        );
        assert!(matches!(
            LinearUnit::new(3, 0.0, &mut rng),
            Err(PerceptronError::InvalidLearningRate(_))
        ));
        assert!(LinearUnit::new(3, 1.5, &mut rng).is_err());
        assert!(LinearUnit::new(3, f64::NAN, &mut rng).is_err());
        assert!(LinearUnit::new(3, 1.0, &mut rng).is_ok());
    }
}
