//! Small text formatting helpers shared by the renderer.

use chrono::{SecondsFormat, TimeZone, Utc};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Returns the fallback when the value is absent, the value otherwise.
pub fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.unwrap_or(fallback)
}

/// ISO-8601 UTC string with millisecond precision for a non-zero epoch
/// timestamp. Zero, absent or out-of-range timestamps format as empty.
pub fn human_date(millis: Option<i64>) -> String {
    let Some(millis) = millis.filter(|ts| *ts != 0) else {
        return String::new();
    };
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Human-readable byte size with base-1024 scaling and two decimals.
/// Sizes at or beyond 1024^4 stay in TB.
pub fn bytes_to_size(bytes: Option<u64>) -> String {
    let count = bytes.unwrap_or(0);
    if count == 0 {
        return "0 B".to_string();
    }
    let exponent = ((count as f64).ln() / 1024f64.ln()).floor() as usize;
    let index = exponent.min(SIZE_UNITS.len() - 1);
    let scaled = count as f64 / 1024f64.powi(index as i32);
    format!("{:.2} {}", scaled, SIZE_UNITS[index])
}

/// Wraps trimmed text in a fenced code block whose fence is one backtick
/// longer than the longest backtick run in the content (minimum three), so
/// the fence can never collide with the embedded text. Blank input yields
/// an empty string.
pub fn wrap_in_code_block(text: &str, language: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let fence = "`".repeat((longest_backtick_run(trimmed) + 1).max(3));
    format!("{fence}{language}\n{trimmed}\n{fence}")
}

fn longest_backtick_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for ch in text.chars() {
        if ch == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::{bytes_to_size, human_date, or_default, wrap_in_code_block};

    #[test]
    fn or_default_only_replaces_absent_values() {
        assert_eq!(or_default(Some("PRJ"), "fallback"), "PRJ");
        assert_eq!(or_default(Some(""), "fallback"), "");
        assert_eq!(or_default(None, "fallback"), "fallback");
    }

    #[test]
    fn human_date_formats_positive_timestamps_as_iso() {
        assert_eq!(human_date(Some(0)), "");
        assert_eq!(human_date(None), "");
        assert_eq!(human_date(Some(1000)), "1970-01-01T00:00:01.000Z");
        assert_eq!(
            human_date(Some(1_700_000_000_000)),
            "2023-11-14T22:13:20.000Z"
        );
    }

    #[test]
    fn human_date_round_trips_through_rfc3339() {
        let formatted = human_date(Some(1_700_000_000_123));
        let parsed = chrono::DateTime::parse_from_rfc3339(&formatted).expect("parses back");
        assert_eq!(parsed.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn bytes_to_size_scales_by_powers_of_1024() {
        assert_eq!(bytes_to_size(None), "0 B");
        assert_eq!(bytes_to_size(Some(0)), "0 B");
        assert_eq!(bytes_to_size(Some(512)), "512.00 B");
        assert_eq!(bytes_to_size(Some(1024)), "1.00 KB");
        assert_eq!(bytes_to_size(Some(1536)), "1.50 KB");
        assert_eq!(bytes_to_size(Some(5 * 1024 * 1024)), "5.00 MB");
    }

    #[test]
    fn bytes_to_size_stays_in_terabytes_beyond_the_table() {
        let huge = 1024u64.pow(5) * 3;
        assert_eq!(bytes_to_size(Some(huge)), "3072.00 TB");
    }

    #[test]
    fn wrap_in_code_block_uses_minimum_three_backticks() {
        let block = wrap_in_code_block("plain text", "markdown");
        assert_eq!(block, "```markdown\nplain text\n```");
    }

    #[test]
    fn wrap_in_code_block_outgrows_embedded_fences() {
        let block = wrap_in_code_block("has ```` backticks", "");
        assert!(block.starts_with("`````\n"));
        assert!(block.ends_with("\n`````"));
        let inner = &block[6..block.len() - 6];
        assert!(!inner.contains("`````"));
    }

    #[test]
    fn wrap_in_code_block_rejects_blank_input() {
        assert_eq!(wrap_in_code_block("", "markdown"), "");
        assert_eq!(wrap_in_code_block("   ", "markdown"), "");
    }
}
