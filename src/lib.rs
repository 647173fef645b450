pub mod data;
pub mod error;
pub mod eval;

pub use data::{GroundTruthSet, ModelDialogueScores};
pub use error::{EvalError, Result};
pub use eval::{evaluate, MetricsReport};
