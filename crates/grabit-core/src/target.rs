//! A single resolved download target.

use std::fmt;

/// One concrete item to download (a media URL). Duplicates are independent jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget(String);

impl DownloadTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DownloadTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DownloadTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
