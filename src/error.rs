use thiserror::Error;

/// Main error type for the retrieval evaluator.
///
/// Every variant is fatal: a malformed or misaligned input invalidates the
/// whole evaluation run, so nothing is retried or skipped.
#[derive(Error, Debug)]
pub enum EvalError {
    /// File system I/O errors (input file missing or unreadable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input document failed to parse into the expected records
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dialogue present in model output but absent from ground truth
    #[error("dialogue {0} in model scores has no ground-truth counterpart")]
    DialogueNotFound(i64),

    /// Model turn_id does not index into the ground-truth turn sequence
    #[error(
        "turn {turn_id} out of range for dialogue {dialog_id} ({num_turns} ground-truth turns)"
    )]
    TurnOutOfRange {
        dialog_id: i64,
        turn_id: usize,
        num_turns: usize,
    },

    /// Ground-truth candidate index does not index into the model's scores
    #[error(
        "gt_index {gt_index} out of range for {num_scores} candidate scores (dialogue {dialog_id}, turn {turn_id})"
    )]
    GtIndexOutOfRange {
        dialog_id: i64,
        turn_id: usize,
        gt_index: usize,
        num_scores: usize,
    },

    /// Zero turns evaluated, so every statistic would divide by zero
    #[error("no turns evaluated; metrics are undefined for an empty rank pool")]
    EmptyEvaluation,
}

/// Convenient Result type using EvalError
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::DialogueNotFound(42);
        assert!(err.to_string().contains("dialogue 42"));
        assert!(err.to_string().contains("no ground-truth counterpart"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let eval_err: EvalError = io_err.into();
        assert!(matches!(eval_err, EvalError::Io(_)));
    }

    #[test]
    fn test_index_error_display_carries_bounds() {
        let err = EvalError::GtIndexOutOfRange {
            dialog_id: 7,
            turn_id: 3,
            gt_index: 100,
            num_scores: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("gt_index 100"));
        assert!(msg.contains("100 candidate scores"));
        assert!(msg.contains("dialogue 7"));
    }
}
