use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::options::{DownloadOptions, Quality};
use crate::pool::DEFAULT_CONCURRENCY;

/// Global configuration loaded from `~/.config/grabit/config.toml`.
/// Command-line flags override these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabitConfig {
    /// Downloader program (looked up on PATH unless absolute).
    pub downloader: PathBuf,
    /// Extra arguments placed before every downloader invocation
    /// (e.g. `["-m", "yt_dlp"]` with `downloader = "python3"`).
    pub downloader_args: Vec<String>,
    /// Number of concurrent workers.
    pub concurrency: usize,
    /// Default video quality: best, worst, or a height such as 720p.
    pub quality: Quality,
    /// Default output directory.
    pub output_dir: PathBuf,
    /// Container used for audio-only downloads.
    pub audio_format: String,
    /// Watch-URL template for playlist entries; `{id}` is replaced.
    pub watch_url_template: String,
    /// Optional per-job timeout in seconds (None = wait forever).
    pub job_timeout_secs: Option<u64>,
}

impl Default for GrabitConfig {
    fn default() -> Self {
        let opts = DownloadOptions::default();
        Self {
            downloader: opts.downloader,
            downloader_args: opts.downloader_args,
            concurrency: DEFAULT_CONCURRENCY,
            quality: opts.quality,
            output_dir: opts.output_dir,
            audio_format: opts.audio_format,
            watch_url_template: opts.watch_url_template,
            job_timeout_secs: None,
        }
    }
}

impl GrabitConfig {
    /// Options seeded from this config; the CLI overrides individual fields.
    pub fn download_options(&self) -> DownloadOptions {
        DownloadOptions {
            audio_only: false,
            quality: self.quality,
            output_dir: self.output_dir.clone(),
            audio_format: self.audio_format.clone(),
            downloader: self.downloader.clone(),
            downloader_args: self.downloader_args.clone(),
            watch_url_template: self.watch_url_template.clone(),
            job_timeout: self.job_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("grabit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<GrabitConfig> {
    if !path.exists() {
        let default_cfg = GrabitConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: GrabitConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
