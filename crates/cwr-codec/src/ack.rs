//! Acknowledgement file decoding.
//!
//! Societies answer a submission with an ACK file in the same fixed-width
//! EDI shape as the submission itself. The parser is deliberately
//! tolerant: a malformed body line becomes a `"Line N: reason"` entry on
//! the summary and parsing continues, so a single bad record never hides
//! the rest of the file.

use std::ops::Range;

use chrono::NaiveDate;
use tracing::warn;

use cwr_model::{AckRecord, AckRecordType, AckStatus, AckSummary, CwrVersion};

use crate::error::AckError;

// ACK record offsets, shared by the 2.x and 3.x layouts.
const ACK_TX_SEQ: Range<usize> = 3..11;
const ACK_REC_SEQ: Range<usize> = 11..19;
const ACK_ORIGINAL_TX_SEQ: Range<usize> = 38..46;
const ACK_TITLE: Range<usize> = 49..109;
const ACK_WORK_CODE: Range<usize> = 109..123;
const ACK_SOCIETY_WORK_ID: Range<usize> = 123..137;
const ACK_ISWC: Range<usize> = 137..148;
const ACK_PROCESSING_DATE: Range<usize> = 148..156;
const ACK_STATUS: Range<usize> = 156..158;

// MSG record offsets.
const MSG_LEVEL: usize = 31;
const MSG_VALIDATION: Range<usize> = 32..35;
const MSG_TEXT_START: usize = 35;

// HDR offsets.
const HDR_SENDER: Range<usize> = 5..14;
const HDR_DATE: Range<usize> = 64..72;
const HDR_RECEIVER: Range<usize> = 86..95;

/// Parse an acknowledgement file into per-transaction outcomes.
///
/// Fatal only when the file is too short to be an ACK at all; everything
/// else degrades to line-level errors on the returned summary.
pub fn parse_ack(content: &str, filename: &str) -> Result<AckSummary, AckError> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();
    if lines.len() < 3 {
        return Err(AckError::TooShort { lines: lines.len() });
    }

    let (_, header) = lines[0];
    let mut summary = AckSummary {
        filename: filename.to_string(),
        version: sniff_version(header),
        sender_code: field(header, HDR_SENDER).unwrap_or_default().to_string(),
        receiver_code: field(header, HDR_RECEIVER).unwrap_or_default().to_string(),
        processing_date: field(header, HDR_DATE).and_then(parse_date),
        records: Vec::new(),
        accepted: 0,
        rejected: 0,
        conflicts: 0,
        duplicates: 0,
        errors: Vec::new(),
    };

    // Body excludes the header and the trailer line.
    for &(number, line) in &lines[1..lines.len() - 1] {
        match line.get(..3) {
            Some("ACK") => match parse_ack_line(line) {
                Ok(record) => summary.records.push(record),
                Err(reason) => summary.errors.push(format!("Line {number}: {reason}")),
            },
            Some("MSG") => match parse_msg_line(line) {
                Ok(record) => summary.records.push(record),
                Err(reason) => summary.errors.push(format!("Line {number}: {reason}")),
            },
            Some("HDR" | "GRH" | "GRT" | "TRL") => {}
            prefix => {
                warn!(line = number, prefix = prefix.unwrap_or(""), "skipping unknown record type");
            }
        }
    }

    summary.tally();
    Ok(summary)
}

/// Version heuristic over the header line.
///
/// There is no canonical version marker in an ACK header, so this checks
/// for the group version literals and falls back to 2.1. Kept permissive
/// on purpose.
fn sniff_version(header: &str) -> CwrVersion {
    if header.contains("3.10") {
        CwrVersion::V31
    } else if header.contains("3.00") {
        CwrVersion::V30
    } else if header.contains("2.20") {
        CwrVersion::V22
    } else {
        CwrVersion::V21
    }
}

fn parse_ack_line(line: &str) -> Result<AckRecord, String> {
    let status_code =
        field(line, ACK_STATUS).ok_or_else(|| format!("ACK record too short ({} chars)", line.len()))?;
    let status: AckStatus = status_code
        .parse()
        .map_err(|_| format!("unknown ACK status '{status_code}'"))?;

    Ok(AckRecord {
        record_type: AckRecordType::Ack,
        transaction_sequence: number(line, ACK_TX_SEQ),
        record_sequence: number(line, ACK_REC_SEQ),
        original_transaction_sequence: number(line, ACK_ORIGINAL_TX_SEQ),
        creation_title: text(line, ACK_TITLE),
        work_code: text(line, ACK_WORK_CODE),
        iswc: text(line, ACK_ISWC),
        status,
        society_work_id: text(line, ACK_SOCIETY_WORK_ID),
        processing_date: field(line, ACK_PROCESSING_DATE).and_then(parse_date),
        message: None,
        message_level: None,
        validation_code: None,
    })
}

fn parse_msg_line(line: &str) -> Result<AckRecord, String> {
    let message = line
        .get(MSG_TEXT_START..)
        .ok_or_else(|| format!("MSG record too short ({} chars)", line.len()))?;
    let level = line.as_bytes()[MSG_LEVEL] as char;
    // Error-level messages count against the transaction.
    let status = if level == 'E' {
        AckStatus::Rejected
    } else {
        AckStatus::RegistrationAccepted
    };

    Ok(AckRecord {
        record_type: AckRecordType::Msg,
        transaction_sequence: number(line, ACK_TX_SEQ),
        record_sequence: number(line, ACK_REC_SEQ),
        original_transaction_sequence: 0,
        creation_title: None,
        work_code: None,
        iswc: None,
        status,
        society_work_id: None,
        processing_date: None,
        message: Some(message.trim_end().to_string()),
        message_level: Some(level),
        validation_code: text(line, MSG_VALIDATION),
    })
}

/// Slice a fixed-width field, `None` when the line is too short.
fn field(line: &str, range: Range<usize>) -> Option<&str> {
    if line.len() < range.end {
        return None;
    }
    line.get(range)
}

/// Trimmed field, `None` when absent or all spaces.
fn text(line: &str, range: Range<usize>) -> Option<String> {
    let value = field(line, range)?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Zero-padded numeric field; unparsable or missing reads as 0.
fn number(line: &str, range: Range<usize>) -> u32 {
    field(line, range)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y%m%d").ok()
}
