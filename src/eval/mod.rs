//! Evaluation core: per-turn rank computation and aggregate metrics
//! (Recall@1/5/10, mean rank, MRR, each with standard errors).

pub mod metrics;
pub mod rank;

pub use metrics::MetricsReport;
pub use rank::evaluate;
