//! Scored-post rendering.
//!
//! Writes the holdout set back out with the predicted engagement count in
//! the first column. Timestamps render with zero-padded two-digit fields;
//! a description is wrapped in quotes only when it contains an embedded
//! line break, matching the ingestion format.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::models::Post;
use crate::Result;

const OUTPUT_HEADER: &str = "Engagements,Followers at Posting,Created,Type,Description";

pub fn write_scored_posts(path: &Path, posts: &[Post]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{OUTPUT_HEADER}")?;
    for post in posts {
        writeln!(writer, "{}", render_post(post))?;
    }
    writer.flush()?;

    info!("wrote {} scored posts to {}", posts.len(), path.display());

    Ok(())
}

fn render_post(post: &Post) -> String {
    let created = format!(
        "{} {}",
        post.created.format("%Y-%m-%d %H:%M:%S"),
        post.time_zone
    );

    let description = if post.description.contains('\n') {
        format!("\"{}\"", post.description)
    } else {
        post.description.clone()
    };

    format!(
        "{},{},{},{},{}",
        post.engagements,
        post.followers,
        created,
        post.kind.as_label(),
        description
    )
}
