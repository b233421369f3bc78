//! Display sanitization for downloader output lines.

/// Characters not allowed in Windows/portable file paths.
const ILLEGAL: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every path-illegal character (`< > : " / \ | ? *`) with `_`.
///
/// Total and idempotent: the output never contains an illegal character, so a
/// second pass is a no-op.
pub fn sanitize_line(line: &str) -> String {
    line.chars()
        .map(|c| if ILLEGAL.contains(&c) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_each_illegal_char() {
        assert_eq!(sanitize_line(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
    }

    #[test]
    fn leaves_other_text_alone() {
        let line = "[download]  47.3% of 10.00MiB at 1.2MiB_s ETA 00_05";
        assert_eq!(sanitize_line(line), line);
        assert_eq!(sanitize_line("ünïcödé 🎵"), "ünïcödé 🎵");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "https://www.youtube.com/watch?v=abc",
            r#"[download] Destination: C:\Videos\"x"*.mp4"#,
            "____",
        ];
        for input in inputs {
            let once = sanitize_line(input);
            assert_eq!(sanitize_line(&once), once);
            assert!(!once.contains(ILLEGAL));
        }
    }

    #[test]
    fn destination_line() {
        assert_eq!(
            sanitize_line("[download] Destination: downloads/foo.mp4"),
            "[download] Destination_ downloads_foo.mp4"
        );
    }
}
