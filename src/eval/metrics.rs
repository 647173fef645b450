//! Statistic reductions over the flat rank pool, and the metrics report.
//!
//! All reductions are pure functions over the 1-based rank sequence collected
//! by the evaluation pass. Standard errors use the population standard
//! deviation (no Bessel correction) divided by sqrt(N); this matches the
//! numbers reported by the reference evaluation pipeline and is kept for
//! output compatibility, even for small N.

use serde::Serialize;
use std::fmt;

/// The ten summary statistics of one evaluation run.
///
/// `r1/r5/r10` are Recall@K: the fraction of evaluated turns where the
/// correct candidate ranked in the top K. `mean` is the average rank and
/// `mrr` the mean reciprocal rank; each statistic carries its standard error.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub r1: f64,
    pub r1_std_err: f64,
    pub r5: f64,
    pub r5_std_err: f64,
    pub r10: f64,
    pub r10_std_err: f64,
    pub mean: f64,
    pub mean_std_err: f64,
    pub mrr: f64,
    pub mrr_std_err: f64,
}

impl MetricsReport {
    /// Reduce a non-empty rank pool into the full report.
    ///
    /// Ranks are 1-based; callers guard the empty pool before reaching here.
    pub fn from_ranks(ranks: &[u32]) -> Self {
        let recalls_1: Vec<f64> = indicator(ranks, 1);
        let recalls_5: Vec<f64> = indicator(ranks, 5);
        let recalls_10: Vec<f64> = indicator(ranks, 10);
        let rank_values: Vec<f64> = ranks.iter().map(|&r| f64::from(r)).collect();
        let reciprocals: Vec<f64> = ranks.iter().map(|&r| 1.0 / f64::from(r)).collect();

        MetricsReport {
            r1: mean(&recalls_1),
            r1_std_err: std_err(&recalls_1),
            r5: mean(&recalls_5),
            r5_std_err: std_err(&recalls_5),
            r10: mean(&recalls_10),
            r10_std_err: std_err(&recalls_10),
            mean: mean(&rank_values),
            mean_std_err: std_err(&rank_values),
            mrr: mean(&reciprocals),
            mrr_std_err: std_err(&reciprocals),
        }
    }
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "r1:   {:.4} (+/- {:.4})", self.r1, self.r1_std_err)?;
        writeln!(f, "r5:   {:.4} (+/- {:.4})", self.r5, self.r5_std_err)?;
        writeln!(f, "r10:  {:.4} (+/- {:.4})", self.r10, self.r10_std_err)?;
        writeln!(f, "mean: {:.4} (+/- {:.4})", self.mean, self.mean_std_err)?;
        write!(f, "mrr:  {:.4} (+/- {:.4})", self.mrr, self.mrr_std_err)
    }
}

/// Per-turn indicator sequence for Recall@K: 1.0 where rank <= k, else 0.0.
fn indicator(ranks: &[u32], k: u32) -> Vec<f64> {
    ranks
        .iter()
        .map(|&r| if r <= k { 1.0 } else { 0.0 })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N, not N-1).
fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Standard error: population standard deviation over sqrt(N).
fn std_err(values: &[f64]) -> f64 {
    population_std(values) / (values.len() as f64).sqrt()
}
