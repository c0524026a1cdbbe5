//! Keyword extraction and per-keyword engagement statistics.
//!
//! A keyword is a normalized mention (`@user`) or hashtag (`#tag`) pulled
//! out of a post description. Descriptions are messy free text, so the
//! extractor lowercases, splits out compound hashtags, and strips the
//! punctuation people glue onto tags before the token reaches the
//! [`KeywordTable`].

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::models::Post;

/// Extract the normalized keyword tokens from a post description.
///
/// Returns `None` when the description yields no tokens, either because no
/// candidate started with `@`/`#` or because every candidate cleaned away
/// to nothing. Duplicate tokens are preserved; a hashtag used twice in one
/// description contributes twice.
pub fn extract_keywords(description: &str) -> Option<Vec<String>> {
    let cleaned = clean_description(description);

    let mut keywords = Vec::new();

    for token in cleaned.split_whitespace() {
        if !token.starts_with('@') && !token.starts_with('#') {
            continue;
        }

        if token.matches('#').count() <= 1 {
            if let Some(keyword) = normalize(clean_token(token)) {
                keywords.push(keyword);
            }
        } else {
            // Compound hashtags like "#nba#basketball" split into one
            // segment per '#', each cleaned on its own.
            for segment in split_hashtags(token) {
                if let Some(keyword) = normalize(clean_token(&segment)) {
                    keywords.push(keyword);
                }
            }
        }
    }

    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

/// Lowercase and knock out the separators that run tokens together
fn clean_description(description: &str) -> String {
    description
        .to_lowercase()
        .replace(['/', '|', '-'], " ")
        .replace("...", " ")
}

/// Strip trailing punctuation and decorations from a candidate token.
///
/// The scan stops at the first terminator: closing punctuation, an
/// ellipsis, a dot inside a hashtag, or a final dot. `(` and `[` are
/// skipped without terminating; `/` becomes a space.
pub(crate) fn clean_token(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let starts_hash = chars.first() == Some(&'#');

    let mut cleaned = String::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '’' | ',' | ')' | '!' | '?' | ':' | ';' | '"' | '\'' | '*' | ']' | '•' => break,
            '(' | '[' => {}
            '.' => {
                if chars.get(i + 1) == Some(&'.') || starts_hash || i + 1 == chars.len() {
                    break;
                }
                cleaned.push('.');
            }
            '/' => cleaned.push(' '),
            _ => cleaned.push(c),
        }
    }

    cleaned
}

/// Split a compound hashtag token into segments, each keeping its `#`.
/// A `#` in the first position does not start a new segment.
fn split_hashtags(token: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for (i, c) in token.chars().enumerate() {
        if c == '#' && i > 0 {
            segments.push(current);
            current = String::new();
        }
        current.push(c);
    }
    segments.push(current);

    segments
}

/// Drop the leading sigil; empty tokens are discarded
fn normalize(cleaned: String) -> Option<String> {
    let stripped = cleaned.strip_prefix(['@', '#']).unwrap_or(&cleaned);
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Accumulated statistics for one keyword across the training corpus.
///
/// `count` equals the number of contributions folded into the sums. The
/// timestamps are retained for diagnostics only; the ratio computation
/// never reads them.
#[derive(Debug, Clone, Default)]
pub struct KeywordStats {
    count: u64,
    total_engagements: i128,
    total_followers: i128,
    post_times: Vec<NaiveDateTime>,
}

impl KeywordStats {
    /// Fold one post into the running sums
    pub fn record(&mut self, post: &Post) {
        self.count += 1;
        self.total_engagements += i128::from(post.engagements);
        self.total_followers += i128::from(post.followers);
        self.post_times.push(post.created);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total_engagements(&self) -> i128 {
        self.total_engagements
    }

    pub fn total_followers(&self) -> i128 {
        self.total_followers
    }

    pub fn post_times(&self) -> &[NaiveDateTime] {
        &self.post_times
    }

    /// Engagement-average over follower-average for this keyword.
    ///
    /// Not finite when the follower sum is zero; the estimator skips such
    /// entries.
    pub fn ratio(&self) -> f64 {
        let engage_avg = self.total_engagements as f64 / self.count as f64;
        let follow_avg = self.total_followers as f64 / self.count as f64;

        engage_avg / follow_avg
    }
}

/// Mapping from normalized keyword to its accumulated statistics.
///
/// Built once per training corpus and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: HashMap<String, KeywordStats>,
}

impl KeywordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `keyword` in `post`, creating the entry on
    /// first sighting
    pub fn observe(&mut self, keyword: &str, post: &Post) {
        self.entries.entry(keyword.to_string()).or_default().record(post);
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordStats> {
        self.entries.get(keyword)
    }

    /// Ratio for a known keyword, `None` when it was never seen
    pub fn ratio(&self, keyword: &str) -> Option<f64> {
        self.entries.get(keyword).map(KeywordStats::ratio)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &KeywordStats)> {
        self.entries.iter()
    }
}
