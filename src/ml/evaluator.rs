// ============================================================
// Layer 5 — Evaluation Helpers
// ============================================================
// Small pure functions built on top of LinearUnit:
//
//   with_bias() → copies a feature slice and appends the bias,
//                 never touching the caller's buffer
//   accuracy()  → fraction of cases the unit currently gets right

use crate::domain::error::PerceptronError;
use crate::domain::training_case::TrainingCase;
use crate::ml::linear_unit::LinearUnit;

/// Return `features` followed by `bias` as a new vector.
pub fn with_bias(features: &[f64], bias: f64) -> Vec<f64> {
    let mut inputs = Vec::with_capacity(features.len() + 1);
    inputs.extend_from_slice(features);
    inputs.push(bias);
    inputs
}

/// Fraction of `cases` classified correctly, in [0, 1].
/// An empty slice scores 0.
pub fn accuracy(unit: &LinearUnit, cases: &[TrainingCase]) -> Result<f64, PerceptronError> {
    if cases.is_empty() {
        return Ok(0.0);
    }
    let mut correct = 0usize;
    for case in cases {
        if unit.feed_forward(case.inputs())? == case.answer() {
            correct += 1;
        }
    }
    Ok(correct as f64 / cases.len() as f64)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::training_case::Label;

    #[test]
    fn test_with_bias_does_not_alias() {
        let features = [2.0, 3.0];
        let inputs   = with_bias(&features, 1.0);
        assert_eq!(inputs, vec![2.0, 3.0, 1.0]);
        assert_eq!(features, [2.0, 3.0]);
    }

    #[test]
    fn test_accuracy_counts_matches() {
        // classifies by sign of x
        let unit  = LinearUnit::with_weights(vec![1.0, 0.0, 0.0], 0.01).unwrap();
        let cases = vec![
            TrainingCase::new(vec![ 1.0, 0.0, 1.0], Label::Positive),
            TrainingCase::new(vec![-1.0, 0.0, 1.0], Label::Negative),
            TrainingCase::new(vec![ 2.0, 0.0, 1.0], Label::Negative),
            TrainingCase::new(vec![-2.0, 0.0, 1.0], Label::Positive),
        ];
        assert_eq!(accuracy(&unit, &cases).unwrap(), 0.5);
    }

    #[test]
    fn test_accuracy_of_empty_set() {
        let unit = LinearUnit::with_weights(vec![1.0], 0.01).unwrap();
        assert_eq!(accuracy(&unit, &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_accuracy_propagates_mismatch() {
        let unit  = LinearUnit::with_weights(vec![1.0, 1.0], 0.01).unwrap();
        let cases = vec![TrainingCase::new(vec![1.0, 0.0, 1.0], Label::Positive)];
        assert!(accuracy(&unit, &cases).is_err());
    }
}
