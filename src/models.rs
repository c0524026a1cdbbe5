use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Post media types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    Photo,
    Album,
    Video,
    Unknown,
}

impl PostKind {
    /// Parse the type column of a post file. Anything unrecognized maps to
    /// `Unknown` rather than failing the row.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Photo" => PostKind::Photo,
            "Album" => PostKind::Album,
            "Video" => PostKind::Video,
            _ => PostKind::Unknown,
        }
    }

    /// Label used when rendering the output file. `Unknown` renders empty.
    pub fn as_label(&self) -> &'static str {
        match self {
            PostKind::Photo => "Photo",
            PostKind::Album => "Album",
            PostKind::Video => "Video",
            PostKind::Unknown => "",
        }
    }

    /// Index into the kind ratio table. `Unknown` has no bucket.
    pub fn bucket(&self) -> Option<usize> {
        match self {
            PostKind::Photo => Some(0),
            PostKind::Album => Some(1),
            PostKind::Video => Some(2),
            PostKind::Unknown => None,
        }
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Whether a post carries ground-truth engagements or needs them predicted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimationMode {
    Training,
    Holdout,
}

/// One social-media post.
///
/// Training posts carry their real engagement count; holdout posts carry
/// [`Post::UNKNOWN_ENGAGEMENTS`] until the estimator overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub engagements: i64,
    pub followers: i64,
    pub created: NaiveDateTime,
    pub time_zone: String,
    pub kind: PostKind,
    pub description: String,
    pub estimated_engagements: Option<i64>,
}

impl Post {
    /// Placeholder engagement count carried by holdout posts until scored
    pub const UNKNOWN_ENGAGEMENTS: i64 = -1;

    pub fn new(
        engagements: i64,
        followers: i64,
        created: NaiveDateTime,
        time_zone: String,
        kind: PostKind,
        description: String,
    ) -> Self {
        Self {
            engagements,
            followers,
            created,
            time_zone,
            kind,
            description,
            estimated_engagements: None,
        }
    }

    /// Construct an unlabeled holdout post
    pub fn holdout(
        followers: i64,
        created: NaiveDateTime,
        time_zone: String,
        kind: PostKind,
        description: String,
    ) -> Self {
        Self::new(
            Self::UNKNOWN_ENGAGEMENTS,
            followers,
            created,
            time_zone,
            kind,
            description,
        )
    }
}
