// ============================================================
// Layer 3 — Length Statistics
// ============================================================
// Descriptive statistics over a sequence of token counts, and
// the max-sequence-length recommendation derived from them.
//
// Percentiles use linear interpolation between closest ranks
// (Hyndman & Fan R-7, the NumPy/R default):
//
//   h = (n - 1) * p / 100
//   x = s[floor(h)] + (h - floor(h)) * (s[ceil(h)] - s[floor(h)])
//
// where s is the sorted sample. Standard deviation is the
// population form (divides by n).
//
// Why a percentile and not the maximum?
//   A handful of very long statutes would otherwise set the
//   sequence length for every batch, and most of each batch
//   would be padding. Covering 95% of the examples keeps memory
//   bounded; the few longer ones get truncated.
//
// Why also a power of two?
//   GPU kernels tile nicely on powers of two, so the largest
//   power of two under the recommendation is printed as a
//   conservative alternative.
//
// Reference: Hyndman & Fan (1996), "Sample Quantiles in
//            Statistical Packages", definition 7

use serde::Serialize;

/// Percentile levels reported for every sequence.
pub const REPORTED_PERCENTILES: [f64; 5] = [50.0, 75.0, 90.0, 95.0, 99.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentiles {
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl Percentiles {
    /// (label, value) pairs in ascending order, for printing.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("50%", self.p50),
            ("75%", self.p75),
            ("90%", self.p90),
            ("95%", self.p95),
            ("99%", self.p99),
        ]
    }
}

/// Summary of one (dataset, field) token-count sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthStats {
    pub count:       usize,
    pub mean:        f64,
    pub median:      f64,
    pub std:         f64,
    pub min:         usize,
    pub max:         usize,
    pub percentiles: Percentiles,
}

impl LengthStats {
    /// Compute statistics; `None` for an empty sequence.
    pub fn compute(lengths: &[usize]) -> Option<Self> {
        let sorted = sorted_sample(lengths)?;
        let n      = sorted.len() as f64;

        let mean     = sorted.iter().sum::<f64>() / n;
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        let [p50, p75, p90, p95, p99] = REPORTED_PERCENTILES.map(|p| interpolate(&sorted, p));

        Some(Self {
            count:  lengths.len(),
            mean,
            median: p50,
            std:    variance.sqrt(),
            min:    lengths.iter().copied().min().unwrap_or(0),
            max:    lengths.iter().copied().max().unwrap_or(0),
            percentiles: Percentiles { p50, p75, p90, p95, p99 },
        })
    }
}

/// Linear-interpolated percentile (`p` in [0, 100]) of an unsorted
/// sequence; `None` when empty.
pub fn percentile(lengths: &[usize], p: f64) -> Option<f64> {
    let sorted = sorted_sample(lengths)?;
    Some(interpolate(&sorted, p))
}

fn sorted_sample(lengths: &[usize]) -> Option<Vec<f64>> {
    if lengths.is_empty() {
        return None;
    }
    let mut sorted: Vec<usize> = lengths.to_vec();
    sorted.sort_unstable();
    Some(sorted.into_iter().map(|x| x as f64).collect())
}

fn interpolate(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h     = (n - 1) as f64 * (p.clamp(0.0, 100.0) / 100.0);
    let lower = h.floor() as usize;
    let upper = h.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let frac = h - lower as f64;
    sorted[lower] + frac * (sorted[upper] - sorted[lower])
}

/// Largest power of two not exceeding `n`; `None` for zero.
pub fn power_of_two_floor(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    Some(1usize << (usize::BITS - 1 - n.leading_zeros()))
}

// ─── MaxLengthRecommendation ──────────────────────────────────────────────────
/// Suggested `max_length` settings for the trainer, derived from
/// the combined-prompt length distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxLengthRecommendation {
    /// Fraction of examples that should fit, e.g. 0.95
    pub target_coverage: f64,
    /// floor of the target-coverage percentile
    pub recommended:     usize,
    pub at_99:           usize,
    pub at_90:           usize,
    /// Largest power of two not exceeding `recommended`
    pub power_of_two:    Option<usize>,
}

impl MaxLengthRecommendation {
    /// `None` when there are no combined lengths to recommend from.
    pub fn from_lengths(combined: &[usize], target_coverage: f64) -> Option<Self> {
        let recommended = percentile(combined, target_coverage * 100.0)?.floor() as usize;
        let stats       = LengthStats::compute(combined)?;
        Some(Self {
            target_coverage,
            recommended,
            at_99:        stats.percentiles.p99.floor() as usize,
            at_90:        stats.percentiles.p90.floor() as usize,
            power_of_two: power_of_two_floor(recommended),
        })
    }
}
