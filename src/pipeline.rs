//! End-to-end prediction pipeline.
//!
//! One linear pass: aggregate the training tables once, score every
//! training post against them for error measurement, then score every
//! holdout post. Tables are built and frozen before any estimation, and
//! each post's estimate reads only the shared read-only tables.

use tracing::info;

use crate::config::WeightsConfig;
use crate::estimate::Estimator;
use crate::evaluate;
use crate::models::EstimationMode;
use crate::models::Post;
use crate::stats::TrainingStats;

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct PredictionReport {
    pub training_posts: usize,
    pub holdout_posts: usize,
    pub distinct_keywords: usize,
    pub training_mape: Option<f64>,
}

pub struct Pipeline {
    estimator: Estimator,
}

impl Pipeline {
    pub fn new(weights: WeightsConfig) -> Self {
        Self {
            estimator: Estimator::new(weights),
        }
    }

    /// Aggregate the ratio tables without scoring anything
    pub fn train(&self, training: &[Post]) -> TrainingStats {
        TrainingStats::from_posts(training)
    }

    /// Run the full pipeline: aggregate, self-score the training set,
    /// measure MAPE, then score the holdout set.
    pub fn run(&self, training: &mut [Post], holdout: &mut [Post]) -> PredictionReport {
        let stats = TrainingStats::from_posts(training);
        info!(
            "trained on {} posts with {} distinct keywords",
            training.len(),
            stats.keywords.len()
        );

        for post in training.iter_mut() {
            self.estimator.estimate(post, &stats, EstimationMode::Training);
        }

        let training_mape = evaluate::mape(training);
        if let Some(value) = training_mape {
            info!("training set MAPE: {:.3}%", value);
        }

        for post in holdout.iter_mut() {
            self.estimator.estimate(post, &stats, EstimationMode::Holdout);
        }

        PredictionReport {
            training_posts: training.len(),
            holdout_posts: holdout.len(),
            distinct_keywords: stats.keywords.len(),
            training_mape,
        }
    }
}
