//! Media entry kinds and the validated input DTOs handed to the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// What a tracked entry is. Serialized as `MOVIE` / `TV_SHOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaKind {
    #[default]
    Movie,
    TvShow,
}

/// Returned when a string is not one of the known media kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type '{0}' (expected MOVIE or TV_SHOW)")]
pub struct UnknownMediaKind(pub String);

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Movie, MediaKind::TvShow];

    /// Wire and storage form.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Movie => "MOVIE",
            MediaKind::TvShow => "TV_SHOW",
        }
    }

    /// Human-readable label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::TvShow => "TV Show",
        }
    }

    /// Lenient parse used on the client side: accepts labels such as
    /// `"TV Show"` or lowercase forms by mapping spaces to underscores and
    /// uppercasing before the strict parse.
    pub fn coerce(raw: &str) -> Result<Self, UnknownMediaKind> {
        raw.trim().replace(' ', "_").to_uppercase().parse()
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = UnknownMediaKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MOVIE" => Ok(MediaKind::Movie),
            "TV_SHOW" => Ok(MediaKind::TvShow),
            other => Err(UnknownMediaKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for MediaKind {
    type Error = UnknownMediaKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A fully validated entry ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub kind: MediaKind,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
}

/// A partial entry. Only `Some` fields are applied on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct EntryChanges {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    pub kind: Option<MediaKind>,
    pub director: Option<String>,
    pub budget: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    pub notes: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        *self == EntryChanges::default()
    }
}

impl NewEntry {
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            kind,
            director: None,
            budget: None,
            location: None,
            duration: None,
            year: None,
            poster_url: None,
            notes: None,
        }
    }
}
