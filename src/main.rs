//! Evaluation CLI: rank ground-truth responses against model candidate
//! scores and report Recall@K, mean rank, and MRR with standard errors.

use anyhow::Context;
use clap::Parser;
use retrieval_eval::{data, eval};
use std::path::PathBuf;

/// Response retrieval evaluation against ground-truth candidates.
#[derive(Parser, Debug)]
#[command(name = "retrieval-eval")]
struct Args {
    /// Path to the ground-truth retrieval candidates JSON.
    #[arg(long, default_value = "data/furniture_train_retrieval_candidates.json")]
    retrieval_json_path: PathBuf,

    /// Path to the candidate scores generated by the model.
    #[arg(long)]
    model_score_path: PathBuf,

    /// Evaluate only the final turn of each dialogue (hidden test split).
    #[arg(long)]
    single_round_evaluation: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let ground_truth = data::load_ground_truth(&args.retrieval_json_path)
        .with_context(|| {
            format!(
                "Failed to load ground truth from {}",
                args.retrieval_json_path.display()
            )
        })?;
    let model_scores = data::load_model_scores(&args.model_score_path).with_context(|| {
        format!(
            "Failed to load model scores from {}",
            args.model_score_path.display()
        )
    })?;

    let report = eval::evaluate(
        &ground_truth,
        &model_scores,
        args.single_round_evaluation,
    )?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
