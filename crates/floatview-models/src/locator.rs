use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the media lives: a remote URL or a local file path. Callers pass
/// plain strings; anything without a scheme is treated as a file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaLocator {
    Url { url: String },
    File { path: PathBuf },
}

impl MediaLocator {
    /// Parse a caller-supplied string. `http://`, `https://` and `file://`
    /// prefixes become URLs; everything else is a local path.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with("http://")
            || trimmed.starts_with("https://")
            || trimmed.starts_with("file://")
        {
            Some(MediaLocator::Url {
                url: trimmed.to_string(),
            })
        } else {
            Some(MediaLocator::File {
                path: PathBuf::from(trimmed),
            })
        }
    }
}

impl fmt::Display for MediaLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaLocator::Url { url } => write!(f, "{url}"),
            MediaLocator::File { path } => write!(f, "{}", path.display()),
        }
    }
}
