//! Accept Go-style single-dash long flags (`-urls=...`, `-audio`).

use std::ffi::OsString;

const LONG_FLAGS: [&str; 7] = [
    "urls",
    "audio",
    "quality",
    "out",
    "concurrency",
    "version",
    "help",
];

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for known long
/// flags. Stops at `--`; leaves short flags such as `-c` untouched.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for (i, arg) in args.into_iter().enumerate() {
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        match arg.to_str() {
            Some(s) if is_single_dash_long(s) => out.push(OsString::from(format!("-{}", s))),
            _ => out.push(arg),
        }
    }
    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(args: &[&str]) -> Vec<String> {
        normalize(args.iter().map(OsString::from))
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn rewrites_known_single_dash_flags() {
        assert_eq!(
            norm(&["grabit", "-urls=https://youtu.be/a", "-audio", "-quality", "720p", "-out=x"]),
            vec!["grabit", "--urls=https://youtu.be/a", "--audio", "--quality", "720p", "--out=x"]
        );
    }

    #[test]
    fn leaves_short_and_double_dash_flags() {
        assert_eq!(
            norm(&["grabit", "-c", "4", "--urls", "u", "-version"]),
            vec!["grabit", "-c", "4", "--urls", "u", "--version"]
        );
    }

    #[test]
    fn ignores_unknown_and_values() {
        assert_eq!(
            norm(&["grabit", "-x", "--urls", "-audio-like-value"]),
            vec!["grabit", "-x", "--urls", "-audio-like-value"]
        );
    }

    #[test]
    fn stops_at_double_dash() {
        assert_eq!(
            norm(&["grabit", "--", "-audio"]),
            vec!["grabit", "--", "-audio"]
        );
    }
}
