//! Recognizes downloader progress-report lines.

/// Literal token that starts every progress report.
pub const PROGRESS_MARKER: &str = "[download]";

/// Extracts the percentage from a progress line such as
/// `[download]  47.3% of 10.00MiB at 1.2MiB/s`.
///
/// The second whitespace-separated field must be a number with an optional
/// trailing `%`; fractions are truncated. Values above 100 are returned as-is.
/// Returns `None` for anything else (not an error).
pub fn parse_progress_line(line: &str) -> Option<u64> {
    if !line.starts_with(PROGRESS_MARKER) {
        return None;
    }
    let field = line.split_whitespace().nth(1)?;
    parse_percent(field.strip_suffix('%').unwrap_or(field))
}

fn parse_percent(s: &str) -> Option<u64> {
    if let Ok(n) = s.parse::<u64>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    if !f.is_finite() || f < 0.0 {
        return None;
    }
    Some(f.trunc() as u64)
}
