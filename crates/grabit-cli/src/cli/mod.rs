//! CLI for grabit.

mod about;
mod argv;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use grabit_core::config::{self, GrabitConfig};
use grabit_core::options::{DownloadOptions, Quality};
use grabit_core::resolver::split_inputs;
use std::path::PathBuf;

use commands::run_downloads;

/// Top-level CLI for grabit.
#[derive(Debug, Parser)]
#[command(name = "grabit")]
#[command(about = "Grabit: concurrent YouTube video and playlist downloader (yt-dlp front end)", long_about = None)]
#[command(disable_version_flag = true, after_help = about::EXAMPLES)]
pub struct Cli {
    /// Comma-separated YouTube URLs or playlist URLs.
    #[arg(long, value_name = "URLS")]
    pub urls: Option<String>,

    /// Download audio only (m4a by default).
    #[arg(long)]
    pub audio: bool,

    /// Video quality: best, worst, 720p, 1080p, ... (default: best).
    #[arg(long, value_name = "QUALITY")]
    pub quality: Option<Quality>,

    /// Output directory (default: downloads).
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Number of concurrent downloads (default: 3).
    #[arg(short = 'c', long, value_name = "N", value_parser = parse_concurrency)]
    pub concurrency: Option<usize>,

    /// Show grabit version and developer info.
    #[arg(long)]
    pub version: bool,
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse_from(argv::normalize(std::env::args_os()));
        cli.run().await
    }

    pub async fn run(self) -> Result<()> {
        println!("{}", about::BANNER);
        if self.version {
            println!("{}", about::version_text());
            return Ok(());
        }

        let inputs = split_inputs(self.urls.as_deref().unwrap_or_default());
        if inputs.is_empty() {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }

        let cfg = load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let options = self.download_options(&cfg);
        let concurrency = self.concurrency.unwrap_or(cfg.concurrency);
        run_downloads(&inputs, options, concurrency).await
    }

    /// Config values overridden by whatever flags were given.
    pub fn download_options(&self, cfg: &GrabitConfig) -> DownloadOptions {
        let mut options = cfg.download_options();
        options.audio_only = self.audio;
        if let Some(quality) = self.quality {
            options.quality = quality;
        }
        if let Some(out) = &self.out {
            options.output_dir = out.clone();
        }
        options
    }
}

/// Config file errors are fatal; an unresolvable config location is not.
fn load_config() -> Result<GrabitConfig> {
    match config::config_path() {
        Ok(path) => config::load_or_init_at(&path),
        Err(e) => {
            tracing::warn!("no config location ({}); using defaults", e);
            Ok(GrabitConfig::default())
        }
    }
}

#[cfg(test)]
mod tests;
