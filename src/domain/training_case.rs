// ============================================================
// Layer 3 — Label and TrainingCase
// ============================================================
// A TrainingCase pairs an input vector (x, y, bias) with the
// answer the perceptron should give for it.
//
// Labels are restricted to two classes:
//   Negative = -1 → point lies below the reference line
//   Positive = +1 → point lies on or above the reference line
//
// Using an enum instead of a raw integer makes values like 0
// or 3 impossible to construct.
//
// Reference: Rust Book §6 (Enums)

use serde::{Deserialize, Serialize};

/// Output class of a linear unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    /// Numeric value used by the update rule: -1 or +1
    pub fn value(self) -> i32 {
        match self {
            Label::Negative => -1,
            Label::Positive =>  1,
        }
    }

    /// Sign activation. A sum of exactly zero is Negative.
    pub fn from_sum(sum: f64) -> Self {
        if sum > 0.0 { Label::Positive } else { Label::Negative }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

/// One labelled example. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCase {
    inputs: Vec<f64>,
    answer: Label,
}

impl TrainingCase {
    pub fn new(inputs: Vec<f64>, answer: Label) -> Self {
        Self { inputs, answer }
    }

    /// Full input vector, bias included as the last element
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn answer(&self) -> Label {
        self.answer
    }

    /// The (x, y) coordinates of the point, without the bias
    pub fn point(&self) -> (f64, f64) {
        (self.inputs[0], self.inputs[1])
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sum_is_negative() {
        assert_eq!(Label::from_sum(0.0), Label::Negative);
        assert_eq!(Label::from_sum(-0.0), Label::Negative);
    }

    #[test]
    fn test_positive_sum_is_positive() {
        assert_eq!(Label::from_sum(1e-9), Label::Positive);
        assert_eq!(Label::from_sum(-1e-9), Label::Negative);
    }

    #[test]
    fn test_label_values() {
        assert_eq!(Label::Negative.value(), -1);
        assert_eq!(Label::Positive.value(),  1);
        assert_eq!(Label::Positive.to_string(), "+1");
        assert_eq!(Label::Negative.to_string(), "-1");
    }

    #[test]
    fn test_point_drops_bias() {
        let case = TrainingCase::new(vec![3.0, -4.0, 1.0], Label::Positive);
        assert_eq!(case.point(), (3.0, -4.0));
        assert_eq!(case.inputs().len(), 3);
    }
}
