//! Shared utility functions.

use std::time::Duration;

/// Truncate a string to at most `max_bytes` without splitting a UTF-8
/// character.
///
/// Returns a sub-slice of the original string; shorter inputs come back
/// unchanged. Used to keep log lines bounded when previewing model output.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Format a duration for display: sub-second values in milliseconds,
/// anything longer in seconds with one decimal.
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("photosynthesis", 5), "photo");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("ok", 10), "ok");
    }

    #[test]
    fn truncate_backs_up_to_char_boundary() {
        // Each char is 3 bytes; cutting at 4 must back up to 3
        let s = "光合成";
        assert_eq!(truncate_str(s, 4), "光");
        assert_eq!(truncate_str(s, 6), "光合");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_str("", 8), "");
    }

    #[test]
    fn elapsed_sub_second_in_millis() {
        assert_eq!(format_elapsed(Duration::from_millis(850)), "850ms");
    }

    #[test]
    fn elapsed_seconds_one_decimal() {
        assert_eq!(format_elapsed(Duration::from_millis(2340)), "2.3s");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "61.0s");
    }
}
