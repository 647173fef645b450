//! Typed records for the two input JSON documents and their loaders.
//!
//! The ground-truth document carries, per dialogue and per turn, the 0-based
//! index of the correct response within that turn's candidate list. The
//! model-score document carries one score per candidate, positionally aligned
//! with the same candidate list. Both are fully materialized in memory before
//! evaluation starts.

use crate::error::Result;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Top-level ground-truth document.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundTruthFile {
    /// One record per dialogue, in dataset order.
    pub retrieval_candidates: Vec<GroundTruthDialogue>,
}

/// Ground-truth record for one dialogue.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundTruthDialogue {
    /// Integer dialogue identifier, matched against model `dialog_id`.
    pub dialogue_idx: i64,
    /// One record per conversation turn, in turn order.
    pub retrieval_candidates: Vec<GroundTruthTurn>,
}

/// Ground-truth record for one turn.
#[derive(Debug, Clone, Deserialize)]
pub struct GroundTruthTurn {
    /// 0-based position of the correct response in the candidate list.
    pub gt_index: usize,
}

/// Model scores for one dialogue.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelDialogueScores {
    /// Must match a `dialogue_idx` in the ground truth.
    pub dialog_id: i64,
    /// One score bundle per scored turn.
    pub candidate_scores: Vec<ModelTurnScores>,
}

/// Model scores for one turn: one float per candidate, positionally aligned
/// with the ground-truth candidate list (conventionally 100 candidates).
#[derive(Debug, Clone, Deserialize)]
pub struct ModelTurnScores {
    /// Index into the ground-truth turn sequence for this dialogue.
    pub turn_id: usize,
    pub scores: Vec<f64>,
}

/// Ground-truth dialogues indexed by dialogue identifier.
pub type GroundTruthSet = HashMap<i64, GroundTruthDialogue>;

impl GroundTruthFile {
    /// Index the dialogues by `dialogue_idx`. If the file repeats an
    /// identifier, the last occurrence wins.
    pub fn into_index(self) -> GroundTruthSet {
        self.retrieval_candidates
            .into_iter()
            .map(|d| (d.dialogue_idx, d))
            .collect()
    }
}

/// Read and parse the ground-truth document, returning the dialogue index.
pub fn load_ground_truth(path: &Path) -> Result<GroundTruthSet> {
    info!("Reading: {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let file: GroundTruthFile = serde_json::from_str(&raw)?;
    Ok(file.into_index())
}

/// Read and parse the model-score document.
pub fn load_model_scores(path: &Path) -> Result<Vec<ModelDialogueScores>> {
    info!("Reading: {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let scores: Vec<ModelDialogueScores> = serde_json::from_str(&raw)?;
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_ground_truth_into_index() {
        let file = write_temp(
            r#"{
                "retrieval_candidates": [
                    {
                        "dialogue_idx": 7,
                        "retrieval_candidates": [
                            {"gt_index": 0},
                            {"gt_index": 42}
                        ]
                    },
                    {
                        "dialogue_idx": 12,
                        "retrieval_candidates": [{"gt_index": 3}]
                    }
                ]
            }"#,
        );

        let index = load_ground_truth(file.path()).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index[&7].retrieval_candidates.len(), 2);
        assert_eq!(index[&7].retrieval_candidates[1].gt_index, 42);
        assert_eq!(index[&12].retrieval_candidates[0].gt_index, 3);
    }

    #[test]
    fn loads_model_scores() {
        let file = write_temp(
            r#"[
                {
                    "dialog_id": 7,
                    "candidate_scores": [
                        {"turn_id": 0, "scores": [0.5, 1.5, -2.0]}
                    ]
                }
            ]"#,
        );

        let scores = load_model_scores(file.path()).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].dialog_id, 7);
        assert_eq!(scores[0].candidate_scores[0].turn_id, 0);
        assert_eq!(scores[0].candidate_scores[0].scores, vec![0.5, 1.5, -2.0]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_ground_truth(Path::new("/nonexistent/gt.json")).unwrap_err();
        assert!(matches!(err, EvalError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_temp("{\"retrieval_candidates\": [{\"dialogue_idx\": \"oops\"}]}");
        let err = load_ground_truth(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::Json(_)));
    }

    #[test]
    fn duplicate_dialogue_idx_last_wins() {
        let file = write_temp(
            r#"{
                "retrieval_candidates": [
                    {"dialogue_idx": 1, "retrieval_candidates": [{"gt_index": 0}]},
                    {"dialogue_idx": 1, "retrieval_candidates": [{"gt_index": 9}]}
                ]
            }"#,
        );

        let index = load_ground_truth(file.path()).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index[&1].retrieval_candidates[0].gt_index, 9);
    }
}
