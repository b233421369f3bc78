//! Downloader argument construction.

use crate::options::DownloadOptions;
use crate::target::DownloadTarget;

/// Output template placeholder understood by the downloader.
const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Arguments for one download: output template, line-per-update progress,
/// format selection, then the target URL last.
pub fn build_args(target: &DownloadTarget, opts: &DownloadOptions) -> Vec<String> {
    let output = opts.output_dir.join(OUTPUT_TEMPLATE);
    let mut args = vec![
        "-o".to_string(),
        output.to_string_lossy().into_owned(),
        "--newline".to_string(),
    ];

    if opts.audio_only {
        args.extend([
            "-f".to_string(),
            "bestaudio".to_string(),
            "--extract-audio".to_string(),
            "--audio-format".to_string(),
            opts.audio_format.clone(),
        ]);
    } else {
        args.extend(["-f".to_string(), opts.quality.format_selector()]);
    }

    args.push(target.to_string());
    args
}
