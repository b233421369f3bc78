//! Download options shared read-only by every worker.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Video quality selector: a named tier or a maximum vertical resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quality {
    #[default]
    Best,
    Worst,
    /// Best video at or below this height (e.g. `720p`).
    MaxHeight(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid quality {0:?}: expected best, worst, or a height such as 720p")]
pub struct InvalidQuality(pub String);

impl FromStr for Quality {
    type Err = InvalidQuality;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "best" => return Ok(Quality::Best),
            "worst" => return Ok(Quality::Worst),
            _ => {}
        }
        let digits = trimmed
            .strip_suffix('p')
            .or_else(|| trimmed.strip_suffix('P'))
            .unwrap_or(trimmed);
        match digits.parse::<u32>() {
            Ok(h) if h > 0 => Ok(Quality::MaxHeight(h)),
            _ => Err(InvalidQuality(s.to_string())),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Best => write!(f, "best"),
            Quality::Worst => write!(f, "worst"),
            Quality::MaxHeight(h) => write!(f, "{}p", h),
        }
    }
}

impl TryFrom<String> for Quality {
    type Error = InvalidQuality;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quality> for String {
    fn from(q: Quality) -> Self {
        q.to_string()
    }
}

impl Quality {
    /// Format selector passed to the downloader's `-f` flag.
    pub fn format_selector(&self) -> String {
        match self {
            Quality::Best => "best".to_string(),
            Quality::Worst => "worst".to_string(),
            Quality::MaxHeight(h) => format!("bestvideo[height<={}]+bestaudio/best", h),
        }
    }
}

/// Immutable per-run configuration. Built once at startup and shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    pub audio_only: bool,
    pub quality: Quality,
    pub output_dir: PathBuf,
    /// Container used when extracting audio (e.g. `m4a`).
    pub audio_format: String,
    /// Downloader program (e.g. `yt-dlp`).
    pub downloader: PathBuf,
    /// Arguments placed before every downloader invocation.
    pub downloader_args: Vec<String>,
    /// Watch-URL template for playlist entries; `{id}` is replaced by the entry id.
    pub watch_url_template: String,
    /// Kill a job's child process after this long. `None` waits indefinitely.
    pub job_timeout: Option<Duration>,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            audio_only: false,
            quality: Quality::Best,
            output_dir: PathBuf::from("downloads"),
            audio_format: "m4a".to_string(),
            downloader: PathBuf::from("yt-dlp"),
            downloader_args: Vec::new(),
            watch_url_template: "https://www.youtube.com/watch?v={id}".to_string(),
            job_timeout: None,
        }
    }
}

impl DownloadOptions {
    /// A `tokio` command for the downloader with the prefix arguments applied.
    pub(crate) fn downloader_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.downloader);
        cmd.args(&self.downloader_args);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_tiers() {
        assert_eq!("best".parse::<Quality>().unwrap(), Quality::Best);
        assert_eq!("WORST".parse::<Quality>().unwrap(), Quality::Worst);
    }

    #[test]
    fn parses_heights_with_and_without_suffix() {
        assert_eq!("720p".parse::<Quality>().unwrap(), Quality::MaxHeight(720));
        assert_eq!("1080".parse::<Quality>().unwrap(), Quality::MaxHeight(1080));
        assert_eq!(" 480P ".parse::<Quality>().unwrap(), Quality::MaxHeight(480));
    }

    #[test]
    fn rejects_garbage() {
        assert!("hd".parse::<Quality>().is_err());
        assert!("0p".parse::<Quality>().is_err());
        assert!("".parse::<Quality>().is_err());
        assert!("-720p".parse::<Quality>().is_err());
    }

    #[test]
    fn format_selectors() {
        assert_eq!(Quality::Best.format_selector(), "best");
        assert_eq!(Quality::Worst.format_selector(), "worst");
        assert_eq!(
            Quality::MaxHeight(720).format_selector(),
            "bestvideo[height<=720]+bestaudio/best"
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let q = Quality::MaxHeight(1440);
        assert_eq!(q.to_string(), "1440p");
        assert_eq!(q.to_string().parse::<Quality>().unwrap(), q);
    }
}
