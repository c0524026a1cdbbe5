//! Post-file ingestion.
//!
//! Training layout: Engagements, Followers at Posting, Created, Type,
//! Description. The holdout layout omits the Engagements column.
//! Descriptions can contain embedded commas and line breaks; properly
//! quoted fields arrive intact from the CSV reader, while rows whose
//! description wrapped onto further physical lines without quoting are
//! repaired by gluing each continuation onto the previous post.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use csv::StringRecord;
use tracing::debug;

use crate::errors::PostPulseError;
use crate::models::Post;
use crate::models::PostKind;
use crate::Result;

const HEADER_MARKER: &str = "Followers at Posting";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read a labeled training file
pub fn read_training_posts(path: &Path) -> Result<Vec<Post>> {
    read_posts(path, true)
}

/// Read an unlabeled holdout file; posts get the placeholder engagement
/// count until scored
pub fn read_holdout_posts(path: &Path) -> Result<Vec<Post>> {
    read_posts(path, false)
}

fn read_posts(path: &Path, labeled: bool) -> Result<Vec<Post>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut posts: Vec<Post> = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = index as u64 + 1;

        if record.iter().any(|field| field.contains(HEADER_MARKER)) {
            continue;
        }

        let first = record.get(0).unwrap_or("").trim();
        if first.parse::<i64>().is_err() {
            // Continuation of a description that wrapped across physical
            // lines without quoting
            let Some(previous) = posts.last_mut() else {
                return Err(PostPulseError::MalformedRow {
                    line,
                    reason: "continuation row with no preceding post".to_string(),
                });
            };
            previous.description.push_str(&rejoin(&record));
            continue;
        }

        let post = if labeled {
            parse_training_record(&record, line)?
        } else {
            parse_holdout_record(&record, line)?
        };
        posts.push(post);
    }

    debug!("read {} posts from {}", posts.len(), path.display());

    Ok(posts)
}

fn parse_training_record(record: &StringRecord, line: u64) -> Result<Post> {
    let engagements = parse_int(record.get(0), line, "Engagements")?;
    let followers = parse_int(record.get(1), line, "Followers at Posting")?;
    let (created, time_zone) = parse_timestamp(record.get(2).unwrap_or(""))?;
    let kind = PostKind::from_label(record.get(3).unwrap_or("").trim());
    let description = description_from(record, 4);

    Ok(Post::new(
        engagements,
        followers,
        created,
        time_zone,
        kind,
        description,
    ))
}

fn parse_holdout_record(record: &StringRecord, line: u64) -> Result<Post> {
    let followers = parse_int(record.get(0), line, "Followers at Posting")?;
    let (created, time_zone) = parse_timestamp(record.get(1).unwrap_or(""))?;
    let kind = PostKind::from_label(record.get(2).unwrap_or("").trim());
    let description = description_from(record, 3);

    Ok(Post::holdout(followers, created, time_zone, kind, description))
}

fn parse_int(field: Option<&str>, line: u64, column: &str) -> Result<i64> {
    let raw = field.unwrap_or("").trim();
    raw.parse().map_err(|_| PostPulseError::MalformedRow {
        line,
        reason: format!("{column} is not an integer: {raw:?}"),
    })
}

/// Parse `YYYY-MM-DD HH:MM:SS <zone>`; the zone label is informational
fn parse_timestamp(raw: &str) -> Result<(NaiveDateTime, String)> {
    let stamp = raw
        .get(..19)
        .ok_or_else(|| PostPulseError::InvalidTimestamp(raw.to_string()))?;

    let created = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .map_err(|_| PostPulseError::InvalidTimestamp(raw.to_string()))?;

    let time_zone = raw.get(20..).map(str::trim).unwrap_or("").to_string();

    Ok((created, time_zone))
}

/// Rejoin the description fields from `start` onward. An unquoted comma in
/// a description splits it into extra fields; restoring the commas keeps
/// the text intact.
fn description_from(record: &StringRecord, start: usize) -> String {
    record
        .iter()
        .skip(start)
        .collect::<Vec<_>>()
        .join(",")
}

fn rejoin(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(",")
}
