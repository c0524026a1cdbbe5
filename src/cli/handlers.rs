//! CLI command handlers

use std::path::PathBuf;

use crate::cli::output::*;
use crate::config::AppConfig;
use crate::errors::PostPulseError;
use crate::io::read_holdout_posts;
use crate::io::read_training_posts;
use crate::io::write_scored_posts;
use crate::pipeline::Pipeline;
use crate::Result;

/// Handle predict command
pub fn handle_predict(
    config: &AppConfig,
    training: Option<PathBuf>,
    holdout: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let training_path = training.unwrap_or_else(|| config.data.training_path.clone());
    let holdout_path = holdout.unwrap_or_else(|| config.data.holdout_path.clone());
    let output_path = output.unwrap_or_else(|| config.data.output_path.clone());

    let mut training_posts = read_training_posts(&training_path)?;
    if training_posts.is_empty() {
        return Err(PostPulseError::EmptyTrainingSet(
            training_path.display().to_string(),
        ));
    }
    let mut holdout_posts = read_holdout_posts(&holdout_path)?;

    let pipeline = Pipeline::new(config.weights);
    let report = pipeline.run(&mut training_posts, &mut holdout_posts);

    write_scored_posts(&output_path, &holdout_posts)?;
    print_prediction_report(&report, &output_path);

    Ok(())
}

/// Handle evaluate command
pub fn handle_evaluate(config: &AppConfig, training: Option<PathBuf>) -> Result<()> {
    let training_path = training.unwrap_or_else(|| config.data.training_path.clone());

    let mut training_posts = read_training_posts(&training_path)?;
    if training_posts.is_empty() {
        return Err(PostPulseError::EmptyTrainingSet(
            training_path.display().to_string(),
        ));
    }

    let pipeline = Pipeline::new(config.weights);
    let report = pipeline.run(&mut training_posts, &mut []);

    print_evaluation(&report);

    Ok(())
}

/// Handle stats command
pub fn handle_stats(
    config: &AppConfig,
    training: Option<PathBuf>,
    top: usize,
    json: bool,
) -> Result<()> {
    let training_path = training.unwrap_or_else(|| config.data.training_path.clone());

    let training_posts = read_training_posts(&training_path)?;
    if training_posts.is_empty() {
        return Err(PostPulseError::EmptyTrainingSet(
            training_path.display().to_string(),
        ));
    }

    let stats = Pipeline::new(config.weights).train(&training_posts);

    if json {
        print_stats_json(&stats, top)?;
    } else {
        print_segment_tables(&stats.segments);
        print_top_keywords(&stats.keywords, top);
    }

    Ok(())
}
