//! Fixed-width field primitives.
//!
//! Every record builder renders its fields through these helpers, so
//! column widths live in builder tables rather than scattered format
//! strings. Overlong values are truncated, not rejected: CWR fields are
//! rigid-width, and length policy is enforced earlier by the validators.

use chrono::{NaiveDate, NaiveTime};

/// Left-justified, space-padded text field.
pub fn alpha(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(' ');
    }
    out
}

/// Optional text field; absent renders as spaces.
pub fn alpha_opt(value: Option<&str>, width: usize) -> String {
    alpha(value.unwrap_or(""), width)
}

/// Zero-padded, right-justified numeric field.
///
/// Overflow keeps the low-order digits, consistent with the
/// truncate-on-overflow policy.
pub fn num(value: u64, width: usize) -> String {
    let digits = value.to_string();
    if digits.len() > width {
        digits[digits.len() - width..].to_string()
    } else {
        format!("{digits:0>width$}")
    }
}

/// Date as `YYYYMMDD`; absent renders as spaces.
pub fn date(value: Option<NaiveDate>) -> String {
    match value {
        Some(d) => d.format("%Y%m%d").to_string(),
        None => " ".repeat(8),
    }
}

/// Time of day as `HHMMSS`.
pub fn time(value: NaiveTime) -> String {
    value.format("%H%M%S").to_string()
}

/// Duration in seconds as `HHMMSS`; absent renders as spaces.
pub fn duration(seconds: Option<u32>) -> String {
    match seconds {
        Some(total) => {
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            let secs = total % 60;
            format!("{:02}{:02}{:02}", hours.min(99), minutes, secs)
        }
        None => " ".repeat(6),
    }
}

/// Percentage share as a 5-digit integer of hundredths.
///
/// `50.5` encodes as `05050`, `100` as `10000`. Negative input clamps
/// to zero.
pub fn share(percent: f64) -> String {
    let hundredths = (percent.max(0.0) * 100.0).round() as u64;
    num(hundredths, 5)
}

/// Society code, zero-padded to the version's width; absent is spaces.
pub fn society(code: Option<u16>, digits: usize) -> String {
    match code {
        Some(c) => num(u64::from(c), digits),
        None => " ".repeat(digits),
    }
}

/// Boolean flag as `Y`/`N`.
pub fn flag(value: bool) -> String {
    if value { "Y" } else { "N" }.to_string()
}

/// Optional flag; absent renders as a space.
pub fn flag_opt(value: Option<bool>) -> String {
    match value {
        Some(v) => flag(v),
        None => " ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_pads_and_truncates() {
        assert_eq!(alpha("ABC", 5), "ABC  ");
        assert_eq!(alpha("ABCDEFG", 5), "ABCDE");
        assert_eq!(alpha("", 3), "   ");
        assert_eq!(alpha_opt(None, 4), "    ");
        assert_eq!(alpha_opt(Some("HI"), 4), "HI  ");
    }

    #[test]
    fn num_pads_and_truncates() {
        assert_eq!(num(7, 5), "00007");
        assert_eq!(num(12345, 5), "12345");
        // truncate-on-overflow keeps low-order digits
        assert_eq!(num(123456, 5), "23456");
    }

    #[test]
    fn date_and_time_encoding() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(date(Some(d)), "20241201");
        assert_eq!(date(None), "        ");
        let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(time(t), "090503");
    }

    #[test]
    fn duration_encoding() {
        assert_eq!(duration(Some(0)), "000000");
        assert_eq!(duration(Some(185)), "000305");
        assert_eq!(duration(Some(3 * 3600 + 25 * 60 + 7)), "032507");
        assert_eq!(duration(None), "      ");
    }

    #[test]
    fn share_encoding() {
        assert_eq!(share(50.5), "05050");
        assert_eq!(share(100.0), "10000");
        assert_eq!(share(0.0), "00000");
        assert_eq!(share(33.33), "03333");
        assert_eq!(share(-5.0), "00000");
    }

    #[test]
    fn society_widths() {
        assert_eq!(society(Some(21), 3), "021");
        assert_eq!(society(Some(21), 4), "0021");
        assert_eq!(society(None, 3), "   ");
        assert_eq!(society(None, 4), "    ");
    }

    #[test]
    fn flags() {
        assert_eq!(flag(true), "Y");
        assert_eq!(flag(false), "N");
        assert_eq!(flag_opt(None), " ");
        assert_eq!(flag_opt(Some(true)), "Y");
    }
}
