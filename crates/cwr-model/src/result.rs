//! Result values returned by the generator and the ACK parser.

use chrono::NaiveDate;
use serde::Serialize;

use crate::enums::{AckRecordType, AckStatus, CwrVersion};

/// Outcome of a successful CWR export.
///
/// Owned by the caller; the codec keeps nothing between calls. A result
/// is only produced when no fatal validation error occurred, so the
/// caller inspects `warnings` but never an error list here.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub filename: String,
    /// Full rendered file, one fixed-width record per line.
    pub content: String,
    pub version: CwrVersion,
    /// Number of work transactions in the file.
    pub transaction_count: usize,
    /// Transaction records plus the GRT and TRL lines.
    pub record_count: usize,
    /// Work codes in emission order.
    pub works: Vec<String>,
    /// Non-fatal business issues (share totals, missing publishers, ...).
    pub warnings: Vec<String>,
}

/// One decoded line of an acknowledgement file.
#[derive(Debug, Clone, Serialize)]
pub struct AckRecord {
    pub record_type: AckRecordType,
    pub transaction_sequence: u32,
    pub record_sequence: u32,
    /// Transaction sequence of the original submission this answers.
    pub original_transaction_sequence: u32,
    pub creation_title: Option<String>,
    /// Submitter work code echoed by the society.
    pub work_code: Option<String>,
    pub iswc: Option<String>,
    pub status: AckStatus,
    /// Identifier the society assigned to the work, when accepted.
    pub society_work_id: Option<String>,
    pub processing_date: Option<NaiveDate>,
    /// MSG record free text.
    pub message: Option<String>,
    /// MSG record level (`E` error, `W` warning, ...).
    pub message_level: Option<char>,
    /// MSG record validation rule number.
    pub validation_code: Option<String>,
}

/// Parsed acknowledgement file with aggregate statistics.
///
/// A non-empty `errors` list means some lines were skipped, not that the
/// parse failed: partial results are always returned.
#[derive(Debug, Clone, Serialize)]
pub struct AckSummary {
    pub filename: String,
    /// Version sniffed from the header line, defaulting to 2.1.
    pub version: CwrVersion,
    pub sender_code: String,
    pub receiver_code: String,
    pub processing_date: Option<NaiveDate>,
    pub records: Vec<AckRecord>,
    /// Count of `RA`/`SR` statuses.
    pub accepted: usize,
    /// Count of `RJ`/`CR` statuses.
    pub rejected: usize,
    /// Count of `CO` statuses.
    pub conflicts: usize,
    /// Count of `DU` statuses.
    pub duplicates: usize,
    /// `"Line N: reason"` entries for tolerated malformed lines.
    pub errors: Vec<String>,
}

impl AckSummary {
    /// Recompute the aggregate counters from the decoded records.
    pub fn tally(&mut self) {
        self.accepted = 0;
        self.rejected = 0;
        self.conflicts = 0;
        self.duplicates = 0;
        for record in &self.records {
            match record.status {
                AckStatus::RegistrationAccepted | AckStatus::SocietyRegistration => {
                    self.accepted += 1;
                }
                AckStatus::Rejected | AckStatus::ClaimRejected => self.rejected += 1,
                AckStatus::Conflict => self.conflicts += 1,
                AckStatus::Duplicate => self.duplicates += 1,
                AckStatus::AgreementStarts
                | AckStatus::AgreementClaim
                | AckStatus::NotInPortfolio => {}
            }
        }
    }
}
