//! Weighted-blend engagement estimation.
//!
//! Each post's predicted engagement ratio is the weighted average of the
//! ratios of every segment the post falls into: its weekday, its post
//! type, its hour, its month, and one term per known keyword in its
//! description.

use crate::config::WeightsConfig;
use crate::keywords::extract_keywords;
use crate::models::EstimationMode;
use crate::models::Post;
use crate::stats::TrainingStats;

pub struct Estimator {
    weights: WeightsConfig,
}

impl Estimator {
    pub fn new(weights: WeightsConfig) -> Self {
        Self { weights }
    }

    /// Estimate engagements for one post against the training tables.
    ///
    /// Sets `estimated_engagements`; in holdout mode the `engagements`
    /// field is overwritten with the estimate as well, since holdout posts
    /// have no ground truth to preserve.
    ///
    /// A dimension whose ratio is not finite (empty training bucket,
    /// unknown post type, zero follower sum) contributes nothing and is
    /// not counted toward the blend divisor, so one empty bucket cannot
    /// poison the whole estimate.
    pub fn estimate(&self, post: &mut Post, stats: &TrainingStats, mode: EstimationMode) {
        let weighted = [
            (stats.segments.weekday_ratio(post), self.weights.weekday),
            (stats.segments.kind_ratio(post), self.weights.kind),
            (stats.segments.hour_ratio(post), self.weights.hour),
            (stats.segments.month_ratio(post), self.weights.month),
        ];

        let mut total_ratio = 0.0;
        let mut criteria_count = 0.0;

        for (ratio, weight) in weighted {
            if ratio.is_finite() {
                total_ratio += ratio * weight;
                criteria_count += 1.0;
            }
        }

        if let Some(keywords) = extract_keywords(&post.description) {
            for keyword in keywords {
                // Training posts always hit the table; holdout posts can
                // carry keywords never seen during training, which are
                // excluded from the blend entirely.
                let Some(entry) = stats.keywords.get(&keyword) else {
                    continue;
                };

                let ratio = entry.ratio();
                if !ratio.is_finite() {
                    continue;
                }

                total_ratio += ratio * self.weights.keyword;
                criteria_count += 1.0;
            }
        }

        let estimated_ratio = if criteria_count > 0.0 {
            total_ratio / criteria_count
        } else {
            0.0
        };

        // Truncation toward zero, matching the follower count at post time
        let estimate = (estimated_ratio * post.followers as f64).trunc() as i64;

        post.estimated_engagements = Some(estimate);
        if mode == EstimationMode::Holdout {
            post.engagements = estimate;
        }
    }
}
