//! Fake downloader for integration tests: a POSIX shell script run through `sh`.
//!
//! Probe mode (`--flat-playlist -J <url>`):
//! - URLs containing `playlist` print a flat listing with entries a, b, c
//! - URLs containing `garbage` print non-JSON output
//! - anything else exits 1 (not a collection)
//!
//! Download mode prints a destination line and two progress lines, appends the
//! target URL to `downloads.log`, and exits 2 if the URL contains `fail`.
//! Every invocation is also recorded in `spawns.log`.

use std::fs;
use std::path::{Path, PathBuf};

use grabit_core::options::DownloadOptions;

pub struct FakeDownloader {
    pub script: PathBuf,
    pub downloads_log: PathBuf,
    pub spawns_log: PathBuf,
}

impl FakeDownloader {
    pub fn install(dir: &Path) -> Self {
        let script = dir.join("fake-yt-dlp.sh");
        let downloads_log = dir.join("downloads.log");
        let spawns_log = dir.join("spawns.log");
        let body = format!(
            r#"#!/bin/sh
echo "$*" >> '{spawns}'
if [ "$1" = "--flat-playlist" ]; then
  case "$3" in
    *playlist*) echo '{{"_type":"playlist","entries":[{{"id":"a"}},{{"id":"b"}},{{"id":"c"}}]}}' ;;
    *garbage*) echo 'WARNING: this is not json' ;;
    *) exit 1 ;;
  esac
  exit 0
fi
for last in "$@"; do :; done
echo "[download] Destination: $last"
echo "[download]  47.3% of 10.00MiB at 1.2MiB/s"
echo "[download] 100% of 10.00MiB in 00:01"
echo "$last" >> '{downloads}'
case "$last" in
  *fail*) exit 2 ;;
esac
exit 0
"#,
            spawns = spawns_log.display(),
            downloads = downloads_log.display(),
        );
        fs::write(&script, body).unwrap();
        Self {
            script,
            downloads_log,
            spawns_log,
        }
    }

    /// Options that run this script via `sh`, writing into `output_dir`.
    pub fn options(&self, output_dir: &Path) -> DownloadOptions {
        DownloadOptions {
            downloader: PathBuf::from("sh"),
            downloader_args: vec![self.script.display().to_string()],
            output_dir: output_dir.to_path_buf(),
            ..DownloadOptions::default()
        }
    }

    /// Targets the script was asked to download, sorted.
    pub fn downloaded(&self) -> Vec<String> {
        let mut lines: Vec<String> = fs::read_to_string(&self.downloads_log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect();
        lines.sort();
        lines
    }

    pub fn spawned_any(&self) -> bool {
        self.spawns_log.exists()
    }
}
