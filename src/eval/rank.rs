//! The core evaluation pass: per-turn rank computation and aggregation.

use crate::data::{GroundTruthSet, ModelDialogueScores};
use crate::error::{EvalError, Result};
use crate::eval::MetricsReport;
use log::info;

/// 1-based rank of the ground-truth candidate within one turn's score list.
///
/// Only candidates scored strictly higher than the ground truth push its rank
/// down; ties resolve in favour of the ground truth.
fn rank_of_ground_truth(scores: &[f64], gt_score: f64) -> u32 {
    1 + scores.iter().filter(|&&s| s > gt_score).count() as u32
}

/// Evaluate response retrieval: rank the ground-truth candidate for every
/// (dialogue, turn) pair in `model_scores` and aggregate the ranks into a
/// [`MetricsReport`].
///
/// With `single_round_only`, only the final ground-truth turn of each
/// dialogue contributes; earlier turns in the model output are skipped.
///
/// Fails on the first misaligned input: a model dialogue absent from the
/// ground truth, a `turn_id` outside the ground-truth turn sequence, or a
/// `gt_index` outside the turn's score list. An empty rank pool (nothing
/// evaluated) is rejected with [`EvalError::EmptyEvaluation`] rather than
/// producing NaN statistics.
pub fn evaluate(
    ground_truth: &GroundTruthSet,
    model_scores: &[ModelDialogueScores],
    single_round_only: bool,
) -> Result<MetricsReport> {
    let mut ranks: Vec<u32> = Vec::new();

    for dialogue in model_scores {
        let gt_dialogue = ground_truth
            .get(&dialogue.dialog_id)
            .ok_or(EvalError::DialogueNotFound(dialogue.dialog_id))?;
        let num_gt_rounds = gt_dialogue.retrieval_candidates.len();

        for turn in &dialogue.candidate_scores {
            // checked_sub: a dialogue with zero ground-truth turns has no
            // final turn, so nothing can match.
            if single_round_only && Some(turn.turn_id) != num_gt_rounds.checked_sub(1) {
                continue;
            }

            let gt_turn = gt_dialogue
                .retrieval_candidates
                .get(turn.turn_id)
                .ok_or(EvalError::TurnOutOfRange {
                    dialog_id: dialogue.dialog_id,
                    turn_id: turn.turn_id,
                    num_turns: num_gt_rounds,
                })?;
            let gt_score = *turn.scores.get(gt_turn.gt_index).ok_or(
                EvalError::GtIndexOutOfRange {
                    dialog_id: dialogue.dialog_id,
                    turn_id: turn.turn_id,
                    gt_index: gt_turn.gt_index,
                    num_scores: turn.scores.len(),
                },
            )?;

            ranks.push(rank_of_ground_truth(&turn.scores, gt_score));
        }
    }

    info!("#Instances evaluated retrieval: {}", ranks.len());

    if ranks.is_empty() {
        return Err(EvalError::EmptyEvaluation);
    }
    Ok(MetricsReport::from_ranks(&ranks))
}
