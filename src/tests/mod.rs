//! Unit tests for the postpulse core

pub mod evaluate_tests;
pub mod io_tests;

use chrono::NaiveDateTime;

use crate::models::Post;
use crate::models::PostKind;

/// Test helper to parse `YYYY-MM-DD HH:MM:SS` timestamps
pub fn parse_time(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Test helper to build a labeled post
pub fn make_post(
    engagements: i64,
    followers: i64,
    timestamp: &str,
    kind: PostKind,
    description: &str,
) -> Post {
    Post::new(
        engagements,
        followers,
        parse_time(timestamp),
        "EDT".to_string(),
        kind,
        description.to_string(),
    )
}
