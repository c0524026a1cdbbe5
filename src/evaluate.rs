//! Prediction accuracy measurement

use tracing::warn;

use crate::models::Post;

/// Mean Absolute Percentage Error over the training set's self-predictions,
/// as a percentage.
///
/// Posts without an estimate are ignored. Posts whose recorded engagements
/// are zero would divide by zero and are excluded from the average with a
/// warning. Returns `None` when no post qualifies.
pub fn mape(posts: &[Post]) -> Option<f64> {
    let mut sum = 0.0;
    let mut counted = 0usize;
    let mut skipped = 0usize;

    for post in posts {
        let Some(estimate) = post.estimated_engagements else {
            continue;
        };

        if post.engagements == 0 {
            skipped += 1;
            continue;
        }

        let actual = post.engagements as f64;
        let predicted = estimate as f64;

        sum += ((actual - predicted) / actual).abs();
        counted += 1;
    }

    if skipped > 0 {
        warn!("excluded {} posts with zero recorded engagements from MAPE", skipped);
    }

    if counted == 0 {
        return None;
    }

    Some(sum / counted as f64 * 100.0)
}
