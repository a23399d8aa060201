//! Type-safe enumerations for CWR concepts.
//!
//! These enums provide compile-time type safety for codes that are
//! represented as short literal strings on the wire.
//!
//! # CWR Reference
//!
//! - Writer designation codes: CWR user manual, SWR/OWR record
//! - Publisher type codes: CWR user manual, SPU/OPU record
//! - Transaction status codes: CWR user manual, ACK record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// CWR file format version.
///
/// Four incompatible wire layouts share the same logical record types.
/// 2.1 and 2.2 are close siblings; 3.0 and 3.1 share a distinct, denser
/// layout that moves collection detail into companion territory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CwrVersion {
    /// CWR 2.1, the most widely accepted layout.
    V21,
    /// CWR 2.2, adds the PWR publisher-sequence field and richer REC.
    V22,
    /// CWR 3.0, restructured headers and territory records.
    V30,
    /// CWR 3.1, same layout family as 3.0.
    V31,
}

impl CwrVersion {
    /// True for the 3.0/3.1 layout family.
    pub fn is_v3(self) -> bool {
        matches!(self, CwrVersion::V30 | CwrVersion::V31)
    }

    /// Width of society code fields: 3 digits pre-3.0, 4 digits at 3.0+.
    pub fn society_digits(self) -> usize {
        if self.is_v3() { 4 } else { 3 }
    }

    /// Version literal carried by the GRH record.
    pub fn group_version_literal(self) -> &'static str {
        match self {
            CwrVersion::V21 => "02.10",
            CwrVersion::V22 => "02.20",
            CwrVersion::V30 => "03.00",
            CwrVersion::V31 => "03.10",
        }
    }

    /// Version literal embedded in the 3.x HDR record.
    ///
    /// Pre-3.0 headers do not carry a version field.
    pub fn header_version_literal(self) -> Option<&'static str> {
        match self {
            CwrVersion::V21 | CwrVersion::V22 => None,
            CwrVersion::V30 => Some("3.0000"),
            CwrVersion::V31 => Some("3.1000"),
        }
    }

    /// Suffix used in the delivery filename (`.V21`, `.V22`, ...).
    pub fn filename_suffix(self) -> &'static str {
        match self {
            CwrVersion::V21 => "21",
            CwrVersion::V22 => "22",
            CwrVersion::V30 => "30",
            CwrVersion::V31 => "31",
        }
    }
}

impl fmt::Display for CwrVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CwrVersion::V21 => "2.1",
            CwrVersion::V22 => "2.2",
            CwrVersion::V30 => "3.0",
            CwrVersion::V31 => "3.1",
        };
        f.write_str(label)
    }
}

impl FromStr for CwrVersion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2.1" | "21" | "V21" | "v21" => Ok(CwrVersion::V21),
            "2.2" | "22" | "V22" | "v22" => Ok(CwrVersion::V22),
            "3.0" | "30" | "V30" | "v30" => Ok(CwrVersion::V30),
            "3.1" | "31" | "V31" | "v31" => Ok(CwrVersion::V31),
            _ => Err(ModelError::UnknownVersion(s.to_string())),
        }
    }
}

/// Transaction type for a registration export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// New work registration.
    NewWork,
    /// Revision of a previously registered work.
    Revision,
}

impl TransactionType {
    /// Record type literal for the work transaction header record.
    ///
    /// Pre-3.0 this is `NWR` or `REV`; 3.0+ collapses both to `WRK`.
    pub fn record_type(self, version: CwrVersion) -> &'static str {
        if version.is_v3() {
            "WRK"
        } else {
            match self {
                TransactionType::NewWork => "NWR",
                TransactionType::Revision => "REV",
            }
        }
    }
}

impl FromStr for TransactionType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NWR" | "NEW" | "NEWWORK" | "NEW_WORK" => Ok(TransactionType::NewWork),
            "REV" | "REVISION" => Ok(TransactionType::Revision),
            _ => Err(ModelError::UnknownTransactionType(s.to_string())),
        }
    }
}

/// Writer designation code (SWR/OWR records).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum WriterRole {
    Composer,
    Author,
    ComposerAuthor,
    Arranger,
    Adaptor,
    Translator,
    SubAuthor,
    SubArranger,
}

impl WriterRole {
    /// Two-character designation code as written on the wire.
    pub fn as_code(self) -> &'static str {
        match self {
            WriterRole::Composer => "C",
            WriterRole::Author => "A",
            WriterRole::ComposerAuthor => "CA",
            WriterRole::Arranger => "AR",
            WriterRole::Adaptor => "AD",
            WriterRole::Translator => "TR",
            WriterRole::SubAuthor => "SA",
            WriterRole::SubArranger => "SR",
        }
    }
}

impl fmt::Display for WriterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for WriterRole {
    type Err = ModelError;

    /// Parse a designation code or full name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "C" | "COMPOSER" => Ok(WriterRole::Composer),
            "A" | "AUTHOR" => Ok(WriterRole::Author),
            "CA" | "COMPOSER/AUTHOR" | "COMPOSERAUTHOR" => Ok(WriterRole::ComposerAuthor),
            "AR" | "ARRANGER" => Ok(WriterRole::Arranger),
            "AD" | "ADAPTOR" | "ADAPTER" => Ok(WriterRole::Adaptor),
            "TR" | "TRANSLATOR" => Ok(WriterRole::Translator),
            "SA" | "SUB-AUTHOR" | "SUBAUTHOR" => Ok(WriterRole::SubAuthor),
            "SR" | "SUB-ARRANGER" | "SUBARRANGER" => Ok(WriterRole::SubArranger),
            _ => Err(ModelError::UnknownWriterRole(s.to_string())),
        }
    }
}

/// Publisher type code (SPU/OPU records).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PublisherRole {
    OriginalPublisher,
    Administrator,
    SubPublisher,
    IncomeParticipant,
}

impl PublisherRole {
    /// Publisher type code as written on the wire.
    pub fn as_code(self) -> &'static str {
        match self {
            PublisherRole::OriginalPublisher => "E",
            PublisherRole::Administrator => "AM",
            PublisherRole::SubPublisher => "SE",
            PublisherRole::IncomeParticipant => "PA",
        }
    }
}

impl fmt::Display for PublisherRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for PublisherRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "E" | "ORIGINAL" | "ORIGINALPUBLISHER" | "ORIGINAL PUBLISHER" => {
                Ok(PublisherRole::OriginalPublisher)
            }
            "AM" | "ADMINISTRATOR" => Ok(PublisherRole::Administrator),
            "SE" | "SUBPUBLISHER" | "SUB-PUBLISHER" => Ok(PublisherRole::SubPublisher),
            "PA" | "INCOMEPARTICIPANT" | "INCOME PARTICIPANT" => {
                Ok(PublisherRole::IncomeParticipant)
            }
            _ => Err(ModelError::UnknownPublisherRole(s.to_string())),
        }
    }
}

/// Transaction status reported by a society in an ACK file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckStatus {
    /// Conflict with an existing registration.
    Conflict,
    /// Duplicate of an existing registration.
    Duplicate,
    /// Registration accepted.
    RegistrationAccepted,
    /// Agreement starts.
    AgreementStarts,
    /// Agreement claim.
    AgreementClaim,
    /// Society registration complete.
    SocietyRegistration,
    /// Claim rejected.
    ClaimRejected,
    /// Transaction rejected.
    Rejected,
    /// Work not in the society's portfolio.
    NotInPortfolio,
}

impl AckStatus {
    /// Two-character status code as it appears in the ACK record.
    pub fn as_code(self) -> &'static str {
        match self {
            AckStatus::Conflict => "CO",
            AckStatus::Duplicate => "DU",
            AckStatus::RegistrationAccepted => "RA",
            AckStatus::AgreementStarts => "AS",
            AckStatus::AgreementClaim => "AC",
            AckStatus::SocietyRegistration => "SR",
            AckStatus::ClaimRejected => "CR",
            AckStatus::Rejected => "RJ",
            AckStatus::NotInPortfolio => "NP",
        }
    }

    /// True when the society accepted the transaction in some form.
    pub fn is_success(self) -> bool {
        matches!(
            self,
            AckStatus::RegistrationAccepted
                | AckStatus::AgreementStarts
                | AckStatus::AgreementClaim
                | AckStatus::SocietyRegistration
        )
    }

    /// True when the transaction needs a human to look at it.
    pub fn requires_attention(self) -> bool {
        matches!(
            self,
            AckStatus::Conflict
                | AckStatus::Duplicate
                | AckStatus::ClaimRejected
                | AckStatus::Rejected
                | AckStatus::NotInPortfolio
        )
    }
}

impl fmt::Display for AckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for AckStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO" => Ok(AckStatus::Conflict),
            "DU" => Ok(AckStatus::Duplicate),
            "RA" => Ok(AckStatus::RegistrationAccepted),
            "AS" => Ok(AckStatus::AgreementStarts),
            "AC" => Ok(AckStatus::AgreementClaim),
            "SR" => Ok(AckStatus::SocietyRegistration),
            "CR" => Ok(AckStatus::ClaimRejected),
            "RJ" => Ok(AckStatus::Rejected),
            "NP" => Ok(AckStatus::NotInPortfolio),
            _ => Err(ModelError::UnknownAckStatus(s.to_string())),
        }
    }
}

/// Record kind inside an ACK file body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckRecordType {
    /// Per-transaction acknowledgement.
    Ack,
    /// Free-text message attached to a transaction.
    Msg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_from_str() {
        assert_eq!("2.1".parse::<CwrVersion>().unwrap(), CwrVersion::V21);
        assert_eq!("v22".parse::<CwrVersion>().unwrap(), CwrVersion::V22);
        assert_eq!("31".parse::<CwrVersion>().unwrap(), CwrVersion::V31);
        assert!("4.0".parse::<CwrVersion>().is_err());
    }

    #[test]
    fn version_properties() {
        assert!(!CwrVersion::V22.is_v3());
        assert!(CwrVersion::V30.is_v3());
        assert_eq!(CwrVersion::V21.society_digits(), 3);
        assert_eq!(CwrVersion::V31.society_digits(), 4);
        assert_eq!(CwrVersion::V30.header_version_literal(), Some("3.0000"));
        assert_eq!(CwrVersion::V21.header_version_literal(), None);
    }

    #[test]
    fn transaction_record_type_collapses_at_v3() {
        assert_eq!(TransactionType::NewWork.record_type(CwrVersion::V21), "NWR");
        assert_eq!(TransactionType::Revision.record_type(CwrVersion::V22), "REV");
        assert_eq!(TransactionType::NewWork.record_type(CwrVersion::V30), "WRK");
        assert_eq!(TransactionType::Revision.record_type(CwrVersion::V31), "WRK");
    }

    #[test]
    fn ack_status_predicates() {
        assert!(AckStatus::RegistrationAccepted.is_success());
        assert!(AckStatus::SocietyRegistration.is_success());
        assert!(!AckStatus::Conflict.is_success());
        assert!(AckStatus::Conflict.requires_attention());
        assert!(AckStatus::Rejected.requires_attention());
        assert!(!AckStatus::AgreementClaim.requires_attention());
    }

    #[test]
    fn role_codes_round_trip() {
        assert_eq!("composer".parse::<WriterRole>().unwrap(), WriterRole::Composer);
        assert_eq!(WriterRole::ComposerAuthor.as_code(), "CA");
        assert_eq!("AM".parse::<PublisherRole>().unwrap(), PublisherRole::Administrator);
        assert_eq!(PublisherRole::OriginalPublisher.as_code(), "E");
    }
}
