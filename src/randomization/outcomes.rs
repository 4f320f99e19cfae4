use rand::Rng;

use crate::trial::types::Arm;

/// Draws synthetic outcomes for trial participants.
///
/// Control outcomes are `Uniform[0, 1)`. Treatment outcomes are the same
/// uniform draw scaled by `1 + treatment_effect`, which stretches the upper
/// bound of the distribution rather than shifting its location; the two
/// arms only share a variance when the effect is zero.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeGenerator {
    treatment_effect: f64,
}

impl OutcomeGenerator {
    pub fn new(treatment_effect: f64) -> Self {
        Self { treatment_effect }
    }

    /// Single outcome for a participant in `arm`
    pub fn draw<R>(&self, arm: Arm, rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
    {
        let u: f64 = rng.r#gen();
        match arm {
            Arm::Treatment => u * (1.0 + self.treatment_effect),
            Arm::Control => u,
        }
    }

    /// `n` outcomes for `arm`, in draw order
    pub fn generate<R>(&self, arm: Arm, n: usize, rng: &mut R) -> Vec<f64>
    where
        R: Rng + ?Sized,
    {
        (0..n).map(|_| self.draw(arm, rng)).collect()
    }
}
