//! Ratio aggregation over the training corpus.
//!
//! Every post is bucketed along four fixed dimensions (hour of day, day of
//! week, month, post type) plus the open-ended keyword dimension. Each
//! bucket averages engagements and followers over its posts and keeps the
//! ratio of the two averages as the predictive signal.

use chrono::Datelike;
use chrono::Timelike;
use tracing::debug;

use crate::keywords::extract_keywords;
use crate::keywords::KeywordTable;
use crate::models::Post;

pub const HOUR_BUCKETS: usize = 24;
pub const WEEKDAY_BUCKETS: usize = 7;
pub const MONTH_BUCKETS: usize = 12;
pub const KIND_BUCKETS: usize = 3;

/// Running sums for one bucket. Sums are i128 so large corpora cannot
/// overflow the accumulation.
#[derive(Debug, Clone, Copy, Default)]
struct RatioAccumulator {
    count: u64,
    engagements: i128,
    followers: i128,
}

impl RatioAccumulator {
    fn add(&mut self, post: &Post) {
        self.count += 1;
        self.engagements += i128::from(post.engagements);
        self.followers += i128::from(post.followers);
    }

    /// Engagement-average over follower-average. An empty bucket divides
    /// zero by zero and yields NaN, which the estimator tolerates.
    fn ratio(&self) -> f64 {
        let engage_avg = self.engagements as f64 / self.count as f64;
        let follow_avg = self.followers as f64 / self.count as f64;

        engage_avg / follow_avg
    }
}

/// Per-segment engagement/follower ratios for the four fixed dimensions.
///
/// Weekdays index Sunday=0 through Saturday=6; months index January=0;
/// kinds index Photo=0, Album=1, Video=2.
#[derive(Debug, Clone)]
pub struct SegmentRatios {
    pub by_hour: [f64; HOUR_BUCKETS],
    pub by_weekday: [f64; WEEKDAY_BUCKETS],
    pub by_month: [f64; MONTH_BUCKETS],
    pub by_kind: [f64; KIND_BUCKETS],
}

impl SegmentRatios {
    pub fn from_posts(posts: &[Post]) -> Self {
        let mut hours = [RatioAccumulator::default(); HOUR_BUCKETS];
        let mut weekdays = [RatioAccumulator::default(); WEEKDAY_BUCKETS];
        let mut months = [RatioAccumulator::default(); MONTH_BUCKETS];
        let mut kinds = [RatioAccumulator::default(); KIND_BUCKETS];

        for post in posts {
            hours[post.created.hour() as usize].add(post);
            weekdays[post.created.weekday().num_days_from_sunday() as usize].add(post);
            months[post.created.month0() as usize].add(post);

            // Unknown kinds have no bucket and stay out of the kind table
            if let Some(bucket) = post.kind.bucket() {
                kinds[bucket].add(post);
            }
        }

        Self {
            by_hour: hours.map(|acc| acc.ratio()),
            by_weekday: weekdays.map(|acc| acc.ratio()),
            by_month: months.map(|acc| acc.ratio()),
            by_kind: kinds.map(|acc| acc.ratio()),
        }
    }

    pub fn hour_ratio(&self, post: &Post) -> f64 {
        self.by_hour[post.created.hour() as usize]
    }

    pub fn weekday_ratio(&self, post: &Post) -> f64 {
        self.by_weekday[post.created.weekday().num_days_from_sunday() as usize]
    }

    pub fn month_ratio(&self, post: &Post) -> f64 {
        self.by_month[post.created.month0() as usize]
    }

    /// NaN when the post's kind has no bucket
    pub fn kind_ratio(&self, post: &Post) -> f64 {
        post.kind
            .bucket()
            .map_or(f64::NAN, |bucket| self.by_kind[bucket])
    }
}

/// Everything the estimator needs from one aggregation pass: the four
/// fixed-dimension ratio tables plus the keyword table. Built once, then
/// read-only.
#[derive(Debug, Clone)]
pub struct TrainingStats {
    pub segments: SegmentRatios,
    pub keywords: KeywordTable,
}

impl TrainingStats {
    pub fn from_posts(posts: &[Post]) -> Self {
        let segments = SegmentRatios::from_posts(posts);

        let mut keywords = KeywordTable::new();
        for post in posts {
            let Some(tokens) = extract_keywords(&post.description) else {
                continue;
            };
            for token in tokens {
                keywords.observe(&token, post);
            }
        }

        debug!(
            "aggregated ratios over {} posts, {} distinct keywords",
            posts.len(),
            keywords.len()
        );

        Self { segments, keywords }
    }
}
