// src/record.rs
//
// Row and record shapes shared by the reader, normalizer and writer.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Columns the sheet is expected to carry, in sheet order.
pub const COLUMNS: [&str; 8] = [
    "name", "bio", "link", "github", "linkedin", "twitter", "instagram", "image",
];

/// Social platforms kept under `socials`, in output order.
pub const SOCIAL_COLUMNS: [&str; 4] = ["github", "linkedin", "twitter", "instagram"];

/// One spreadsheet row keyed by header name. Values are kept untrimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw value for `column`; a column the sheet never had reads as empty.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value for `column`.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).trim()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Socials {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.instagram.is_none()
    }

    /// Slot for a platform column; `None` for anything outside [`SOCIAL_COLUMNS`].
    pub fn slot_mut(&mut self, platform: &str) -> Option<&mut Option<String>> {
        match platform {
            "github" => Some(&mut self.github),
            "linkedin" => Some(&mut self.linkedin),
            "twitter" => Some(&mut self.twitter),
            "instagram" => Some(&mut self.instagram),
            _ => None,
        }
    }
}

/// The persisted unit. Only `name` is guaranteed; everything else is best-effort.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Socials::is_empty")]
    pub socials: Socials,
    /// File name inside the image cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/* ---------------- Diagnostics ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFailure {
    Fetch,
    Decode,
    NotSquare,
}

impl ImageFailure {
    pub fn describe(self) -> &'static str {
        match self {
            ImageFailure::Fetch => "Unable to fetch image",
            ImageFailure::Decode => "Unable to read image",
            ImageFailure::NotSquare => "Not a square image",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    NoName,
    InvalidUrl { field: &'static str },
    Image { failure: ImageFailure, url: String },
    ImageStore { url: String },
}

/// A non-fatal finding about one sheet row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Sheet line number, header counted.
    pub ordinal: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(ordinal: usize, kind: DiagnosticKind) -> Self {
        Self { ordinal, kind }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}: ", self.ordinal)?;
        match &self.kind {
            DiagnosticKind::NoName => write!(f, "No name"),
            DiagnosticKind::InvalidUrl { field } => write!(f, "Invalid {field}"),
            DiagnosticKind::Image { failure, url } => write!(f, "{} - {url}", failure.describe()),
            DiagnosticKind::ImageStore { url } => write!(f, "Unable to save image - {url}"),
        }
    }
}
