//! Export parameters, fixed for the duration of one generation call.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::{CwrVersion, TransactionType};

/// Immutable parameters for a single CWR export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    pub version: CwrVersion,
    pub transaction_type: TransactionType,
    /// Short submitter code, also the sender identity in the filename.
    pub submitter_code: String,
    pub submitter_name: String,
    /// Submitter's 11-digit IPI Name Number.
    #[serde(default)]
    pub submitter_ipi: Option<String>,
    /// Receiving society or agency code.
    pub receiver_code: String,
    /// Timestamp stamped into the HDR record and the filename.
    pub created_at: NaiveDateTime,
}

impl GenerationContext {
    pub fn new(
        version: CwrVersion,
        transaction_type: TransactionType,
        submitter_code: impl Into<String>,
        submitter_name: impl Into<String>,
        receiver_code: impl Into<String>,
    ) -> Self {
        Self {
            version,
            transaction_type,
            submitter_code: submitter_code.into(),
            submitter_name: submitter_name.into(),
            submitter_ipi: None,
            receiver_code: receiver_code.into(),
            created_at: Local::now().naive_local(),
        }
    }

    /// Set the submitter IPI Name Number.
    #[must_use]
    pub fn with_submitter_ipi(mut self, ipi: impl Into<String>) -> Self {
        self.submitter_ipi = Some(ipi.into());
        self
    }

    /// Pin the creation timestamp (defaults to the local clock).
    #[must_use]
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }

    /// Delivery filename: `CW{YYMMDD}{SUBMITTER}{RECEIVER}.V{version}`.
    pub fn filename(&self) -> String {
        format!(
            "CW{}{}{}.V{}",
            self.created_at.format("%y%m%d"),
            self.submitter_code.to_uppercase(),
            self.receiver_code.to_uppercase(),
            self.version.filename_suffix()
        )
    }
}
