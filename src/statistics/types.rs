//----------------------------------------
// statistics mod types
//----------------------------------------
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    pub n: usize,
    pub mean: f64,
    /// Population variance (divides by `n`)
    pub variance: f64,
}

/// Equal-width binning of one arm's outcomes, for distribution displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeHistogram {
    pub lower: f64,
    pub upper: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl OutcomeHistogram {
    /// Left edge of every bin
    pub fn bin_starts(&self) -> Vec<f64> {
        (0..self.counts.len())
            .map(|i| self.lower + (i as f64) * self.bin_width)
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
