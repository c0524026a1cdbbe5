//! CLI output formatting
//!
//! This module provides consistent output formatting for the postpulse CLI

use std::path::Path;

use serde_json::json;
use serde_json::Value;

use crate::keywords::KeywordTable;
use crate::pipeline::PredictionReport;
use crate::stats::SegmentRatios;
use crate::stats::TrainingStats;
use crate::Result;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const KIND_NAMES: [&str; 3] = ["Photo", "Album", "Video"];

/// Print a summary of a full prediction run
pub fn print_prediction_report(report: &PredictionReport, output_path: &Path) {
    println!(
        "Trained on {} posts ({} distinct keywords)",
        report.training_posts, report.distinct_keywords
    );
    print_mape(report.training_mape);
    println!(
        "Scored {} holdout posts -> {}",
        report.holdout_posts,
        output_path.display()
    );
}

/// Print the training-set self-estimation result
pub fn print_evaluation(report: &PredictionReport) {
    println!(
        "Trained on {} posts ({} distinct keywords)",
        report.training_posts, report.distinct_keywords
    );
    print_mape(report.training_mape);
}

fn print_mape(mape: Option<f64>) {
    match mape {
        Some(value) => println!("Training set MAPE: {value:.3}%"),
        None => println!("Training set MAPE: n/a (no measurable posts)"),
    }
}

/// Print the four fixed-dimension ratio tables
pub fn print_segment_tables(segments: &SegmentRatios) {
    println!("Hour-of-day ratios:");
    for (hour, ratio) in segments.by_hour.iter().enumerate() {
        println!("  {hour:02}:00  {}", format_ratio(*ratio));
    }

    println!("Day-of-week ratios:");
    for (index, ratio) in segments.by_weekday.iter().enumerate() {
        println!("  {:<9}  {}", WEEKDAY_NAMES[index], format_ratio(*ratio));
    }

    println!("Month ratios:");
    for (index, ratio) in segments.by_month.iter().enumerate() {
        println!("  {:<9}  {}", MONTH_NAMES[index], format_ratio(*ratio));
    }

    println!("Post-type ratios:");
    for (index, ratio) in segments.by_kind.iter().enumerate() {
        println!("  {:<9}  {}", KIND_NAMES[index], format_ratio(*ratio));
    }
}

/// Print the most frequent keywords with their ratios
pub fn print_top_keywords(keywords: &KeywordTable, top: usize) {
    let entries = sorted_keywords(keywords);

    println!("Top {} of {} keywords:", top.min(entries.len()), entries.len());
    for (keyword, stats) in entries.into_iter().take(top) {
        println!(
            "  {:>6}x  {}  ratio {}",
            stats.count(),
            keyword,
            format_ratio(stats.ratio())
        );
    }
}

/// Print the full training statistics as JSON
pub fn print_stats_json(stats: &TrainingStats, top: usize) -> Result<()> {
    let keywords: Vec<Value> = sorted_keywords(&stats.keywords)
        .into_iter()
        .take(top)
        .map(|(keyword, entry)| {
            json!({
                "keyword": keyword,
                "count": entry.count(),
                "ratio": ratio_value(entry.ratio()),
            })
        })
        .collect();

    let value = json!({
        "by_hour": ratio_values(&stats.segments.by_hour),
        "by_weekday": ratio_values(&stats.segments.by_weekday),
        "by_month": ratio_values(&stats.segments.by_month),
        "by_kind": ratio_values(&stats.segments.by_kind),
        "keywords": keywords,
    });

    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

/// Keywords ordered by descending count, ties broken alphabetically
fn sorted_keywords(keywords: &KeywordTable) -> Vec<(&String, &crate::keywords::KeywordStats)> {
    let mut entries: Vec<_> = keywords.iter().collect();
    entries.sort_by(|a, b| b.1.count().cmp(&a.1.count()).then_with(|| a.0.cmp(b.0)));
    entries
}

fn format_ratio(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{ratio:.7}")
    } else {
        "n/a (no posts)".to_string()
    }
}

/// Undefined ratios render as null in JSON output
fn ratio_value(ratio: f64) -> Value {
    if ratio.is_finite() {
        json!(ratio)
    } else {
        Value::Null
    }
}

fn ratio_values(ratios: &[f64]) -> Vec<Value> {
    ratios.iter().copied().map(ratio_value).collect()
}
