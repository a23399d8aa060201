//! Identifier checksums and validators.
//!
//! Pure, total functions over the identifier schemes CWR records carry:
//! IPI Name Number, IPI Base Number, ISWC, ISRC, EAN-13, society codes,
//! and the CWR-safe character set. Blank input is always valid because
//! every identifier field is optional; invalid input returns a structured
//! error describing expected versus actual, never a panic.

use thiserror::Error;

/// Validation failures for identifier fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentError {
    #[error("IPI name number '{value}' must be 11 digits")]
    IpiFormat { value: String },

    #[error("IPI name number '{value}': expected check digits {expected:02}, found {found:02}")]
    IpiChecksum {
        value: String,
        expected: u32,
        found: u32,
    },

    #[error("IPI base number '{value}' must be 10 digits (optionally prefixed with I)")]
    IpiBaseFormat { value: String },

    #[error("IPI base number '{value}': expected check digit {expected}, found {found}")]
    IpiBaseChecksum {
        value: String,
        expected: u32,
        found: u32,
    },

    #[error("ISWC '{value}' must be a T prefix followed by 10 digits")]
    IswcFormat { value: String },

    #[error("ISWC '{value}': expected check digit {expected}, found {found}")]
    IswcChecksum {
        value: String,
        expected: u32,
        found: u32,
    },

    #[error("ISRC '{value}' is invalid: {reason}")]
    IsrcFormat {
        value: String,
        reason: &'static str,
    },

    #[error("EAN-13 '{value}' must be 13 digits")]
    EanFormat { value: String },

    #[error("EAN-13 '{value}': expected check digit {expected}, found {found}")]
    EanChecksum {
        value: String,
        expected: u32,
        found: u32,
    },

    #[error("society code '{value}' must be numeric in 1..=999")]
    SocietyCode { value: String },
}

fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect()
}

fn digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

/// Expected IPI name-number check digits for a 9-digit base.
///
/// `101 - (base mod 101)`, or 0 when the remainder is 0. A remainder of 1
/// yields 100, which no two-digit suffix can encode; such bases have no
/// valid IPI name number.
fn ipi_expected(first9: u64) -> u32 {
    let remainder = (first9 % 101) as u32;
    if remainder == 0 { 0 } else { 101 - remainder }
}

/// Validate and normalize an 11-digit IPI Name Number.
///
/// Returns `Ok(None)` for blank input, the normalized digit string
/// otherwise.
pub fn validate_ipi(value: &str) -> Result<Option<String>, IdentError> {
    let stripped = strip_separators(value.trim());
    if stripped.is_empty() {
        return Ok(None);
    }
    if stripped.len() != 11 || digits(&stripped).is_none() {
        return Err(IdentError::IpiFormat {
            value: value.trim().to_string(),
        });
    }

    let first9: u64 = stripped[..9].parse().unwrap_or(0);
    let found: u32 = stripped[9..].parse().unwrap_or(0);
    let expected = ipi_expected(first9);
    if expected != found {
        return Err(IdentError::IpiChecksum {
            value: stripped,
            expected,
            found,
        });
    }
    Ok(Some(stripped))
}

/// Append the check digits to a 9-digit IPI base.
///
/// Returns `None` when the base is not 9 digits or admits no valid
/// two-digit checksum (remainder of 1).
pub fn generate_ipi_checksum(base9: &str) -> Option<String> {
    if base9.len() != 9 || digits(base9).is_none() {
        return None;
    }
    let expected = ipi_expected(base9.parse().ok()?);
    if expected > 99 {
        return None;
    }
    Some(format!("{base9}{expected:02}"))
}

/// Weighted 1,2-alternating sum, weight 1 on the first digit.
///
/// When `fold` is set, two-digit products contribute their digit sum.
fn alternating_sum(digits: &[u32], fold: bool) -> u32 {
    digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let p = if i % 2 == 0 { d } else { 2 * d };
            if fold { p / 10 + p % 10 } else { p }
        })
        .sum()
}

/// Validate an IPI Base Number, normalizing to `I-XXXXXXXXX-C`.
pub fn validate_ipi_base(value: &str) -> Result<Option<String>, IdentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let stripped = strip_separators(trimmed);
    let stripped = stripped
        .strip_prefix(['I', 'i'])
        .unwrap_or(&stripped)
        .to_string();
    let Some(all) = digits(&stripped).filter(|d| d.len() == 10) else {
        return Err(IdentError::IpiBaseFormat {
            value: trimmed.to_string(),
        });
    };

    let sum = alternating_sum(&all[..9], false);
    let expected = (10 - sum % 10) % 10;
    let found = all[9];
    if expected != found {
        return Err(IdentError::IpiBaseChecksum {
            value: trimmed.to_string(),
            expected,
            found,
        });
    }
    Ok(Some(format!("I-{}-{}", &stripped[..9], found)))
}

/// Validate an ISWC, normalizing to `T-XXXXXXXXX-C`.
///
/// Accepts `T` prefix variants with or without separators. The running
/// sum is seeded with 1 for the `T` itself, then the 9 digits contribute
/// their 1,2-weighted products folded to digit sums.
pub fn validate_iswc(value: &str) -> Result<Option<String>, IdentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let stripped = strip_separators(trimmed).to_uppercase();
    let stripped = stripped.strip_prefix('T').unwrap_or(&stripped).to_string();
    let Some(all) = digits(&stripped).filter(|d| d.len() == 10) else {
        return Err(IdentError::IswcFormat {
            value: trimmed.to_string(),
        });
    };

    let sum = 1 + alternating_sum(&all[..9], true);
    let expected = (10 - sum % 10) % 10;
    let found = all[9];
    if expected != found {
        return Err(IdentError::IswcChecksum {
            value: trimmed.to_string(),
            expected,
            found,
        });
    }
    Ok(Some(format!("T-{}-{}", &stripped[..9], found)))
}

/// Build a normalized ISWC from a 9-digit base.
pub fn generate_iswc_checksum(base9: &str) -> Option<String> {
    let all = digits(base9).filter(|d| d.len() == 9)?;
    let sum = 1 + alternating_sum(&all, true);
    let check = (10 - sum % 10) % 10;
    Some(format!("T-{base9}-{check}"))
}

/// Validate an ISRC, normalizing to `CC-XXX-YY-NNNNN`.
///
/// Structural validation only; the ISRC scheme has no check digit.
pub fn validate_isrc(value: &str) -> Result<Option<String>, IdentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let stripped = strip_separators(trimmed).to_uppercase();
    if stripped.len() != 12 {
        return Err(IdentError::IsrcFormat {
            value: trimmed.to_string(),
            reason: "must be 12 characters",
        });
    }
    let bytes = stripped.as_bytes();
    if !bytes[..2].iter().all(u8::is_ascii_uppercase) {
        return Err(IdentError::IsrcFormat {
            value: trimmed.to_string(),
            reason: "country code must be 2 letters",
        });
    }
    if !bytes[2..5].iter().all(u8::is_ascii_alphanumeric) {
        return Err(IdentError::IsrcFormat {
            value: trimmed.to_string(),
            reason: "registrant code must be 3 alphanumerics",
        });
    }
    if !bytes[5..].iter().all(u8::is_ascii_digit) {
        return Err(IdentError::IsrcFormat {
            value: trimmed.to_string(),
            reason: "year and designation must be 7 digits",
        });
    }
    Ok(Some(format!(
        "{}-{}-{}-{}",
        &stripped[..2],
        &stripped[2..5],
        &stripped[5..7],
        &stripped[7..]
    )))
}

/// Validate an EAN-13 barcode number.
pub fn validate_ean13(value: &str) -> Result<Option<String>, IdentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let stripped = strip_separators(trimmed);
    let Some(all) = digits(&stripped).filter(|d| d.len() == 13) else {
        return Err(IdentError::EanFormat {
            value: trimmed.to_string(),
        });
    };

    // Weights alternate 1,3 over the first 12 digits.
    let sum: u32 = all[..12]
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d } else { 3 * d })
        .sum();
    let expected = (10 - sum % 10) % 10;
    let found = all[12];
    if expected != found {
        return Err(IdentError::EanChecksum {
            value: trimmed.to_string(),
            expected,
            found,
        });
    }
    Ok(Some(stripped))
}

/// Validate a CISAC society code (numeric, 1..=999).
pub fn validate_society(value: &str) -> Result<Option<u16>, IdentError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<u16>() {
        Ok(code) if (1..=999).contains(&code) => Ok(Some(code)),
        _ => Err(IdentError::SocietyCode {
            value: trimmed.to_string(),
        }),
    }
}

/// Result of cleansing free text for a CWR field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    /// Uppercased, accent-folded, charset-restricted text.
    pub text: String,
    /// Distinct characters outside the CWR-safe set, replaced by spaces.
    pub dropped: Vec<char>,
    /// True when the input exceeded `max_len` and was cut.
    pub truncated: bool,
}

/// Uppercase, fold accents to ASCII, restrict to the CWR-safe character
/// set, and truncate to `max_len`.
pub fn cwr_text(value: &str, max_len: usize) -> CleanedText {
    let mut text = String::with_capacity(value.len());
    let mut dropped = Vec::new();

    for ch in value.chars() {
        if let Some(folded) = fold_accent(ch) {
            text.push_str(folded);
            continue;
        }
        let upper = ch.to_ascii_uppercase();
        if is_cwr_safe(upper) {
            text.push(upper);
        } else {
            if !dropped.contains(&ch) {
                dropped.push(ch);
            }
            text.push(' ');
        }
    }

    let truncated = text.chars().count() > max_len;
    if truncated {
        text = text.chars().take(max_len).collect();
    }

    CleanedText {
        text,
        dropped,
        truncated,
    }
}

/// The CWR-safe set: uppercase letters, digits, space, and ASCII
/// punctuation.
fn is_cwr_safe(c: char) -> bool {
    c == ' '
        || c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || matches!(
            c,
            '!' | '"'
                | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '<'
                | '='
                | '>'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// Fixed accent substitution table, both cases folded to uppercase ASCII.
fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "A",
        'Æ' | 'æ' => "AE",
        'Ç' | 'ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' | 'è' | 'é' | 'ê' | 'ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'ì' | 'í' | 'î' | 'ï' => "I",
        'Ñ' | 'ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'ù' | 'ú' | 'û' | 'ü' => "U",
        'Ý' | 'ý' | 'ÿ' => "Y",
        'ß' => "SS",
        'Œ' | 'œ' => "OE",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipi_known_vector() {
        // 123456789 % 101 == 45, check digits 101 - 45 == 56
        assert_eq!(
            validate_ipi("12345678956").unwrap(),
            Some("12345678956".to_string())
        );
        assert_eq!(
            validate_ipi("123 456 789 56").unwrap(),
            Some("12345678956".to_string())
        );
    }

    #[test]
    fn ipi_blank_is_valid() {
        assert_eq!(validate_ipi("").unwrap(), None);
        assert_eq!(validate_ipi("   ").unwrap(), None);
    }

    #[test]
    fn ipi_checksum_mismatch_is_structured() {
        let err = validate_ipi("12345678957").unwrap_err();
        assert_eq!(
            err,
            IdentError::IpiChecksum {
                value: "12345678957".to_string(),
                expected: 56,
                found: 57,
            }
        );
    }

    #[test]
    fn ipi_generate_and_validate() {
        let full = generate_ipi_checksum("123456789").unwrap();
        assert_eq!(full, "12345678956");
        assert!(validate_ipi(&full).is_ok());

        // remainder 0 -> check 00
        assert_eq!(generate_ipi_checksum("000000101").unwrap(), "00000010100");
        // remainder 1 admits no two-digit check
        assert_eq!(generate_ipi_checksum("000000001"), None);
    }

    #[test]
    fn ipi_base_known_vector() {
        // weights 1,2,... over 123456789 sum to 65, check (10 - 5) % 10 == 5
        assert_eq!(
            validate_ipi_base("I-123456789-5").unwrap(),
            Some("I-123456789-5".to_string())
        );
        assert_eq!(
            validate_ipi_base("1234567895").unwrap(),
            Some("I-123456789-5".to_string())
        );
        assert!(validate_ipi_base("I-123456789-4").is_err());
    }

    #[test]
    fn iswc_known_vector() {
        // seed 1 + folded weighted digits of 123456789 sum to 48, check 2
        assert_eq!(
            validate_iswc("T-123.456.789-2").unwrap(),
            Some("T-123456789-2".to_string())
        );
        assert_eq!(
            validate_iswc("T1234567892").unwrap(),
            Some("T-123456789-2".to_string())
        );
        assert!(validate_iswc("T-123456789-3").is_err());
        assert!(validate_iswc("T-12345678-2").is_err());
    }

    #[test]
    fn iswc_generate_matches_validate() {
        let iswc = generate_iswc_checksum("123456789").unwrap();
        assert_eq!(iswc, "T-123456789-2");
        assert_eq!(validate_iswc(&iswc).unwrap(), Some(iswc));
    }

    #[test]
    fn isrc_structure() {
        assert_eq!(
            validate_isrc("USRC17607839").unwrap(),
            Some("US-RC1-76-07839".to_string())
        );
        assert_eq!(
            validate_isrc("us-rc1-76-07839").unwrap(),
            Some("US-RC1-76-07839".to_string())
        );
        assert!(validate_isrc("1SRC17607839").is_err());
        assert!(validate_isrc("USRC1760783").is_err());
    }

    #[test]
    fn ean13_known_vector() {
        assert_eq!(
            validate_ean13("4006381333931").unwrap(),
            Some("4006381333931".to_string())
        );
        assert!(validate_ean13("4006381333932").is_err());
        assert!(validate_ean13("400638133393").is_err());
    }

    #[test]
    fn society_codes() {
        assert_eq!(validate_society("21").unwrap(), Some(21));
        assert_eq!(validate_society("").unwrap(), None);
        assert!(validate_society("0").is_err());
        assert!(validate_society("1000").is_err());
        assert!(validate_society("PRS").is_err());
    }

    #[test]
    fn cwr_text_folds_and_uppercases() {
        let cleaned = cwr_text("Café Déjà Vu", 60);
        assert_eq!(cleaned.text, "CAFE DEJA VU");
        assert!(cleaned.dropped.is_empty());
        assert!(!cleaned.truncated);
    }

    #[test]
    fn cwr_text_flags_unsafe_chars() {
        let cleaned = cwr_text("SONG \u{2764} TITLE \u{2764}", 60);
        assert_eq!(cleaned.dropped, vec!['\u{2764}']);
        assert_eq!(cleaned.text, "SONG   TITLE  ");
    }

    #[test]
    fn cwr_text_truncates() {
        let cleaned = cwr_text("ABCDEFGH", 5);
        assert_eq!(cleaned.text, "ABCDE");
        assert!(cleaned.truncated);
    }
}
