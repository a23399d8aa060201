//! Catalog work entities submitted for registration.
//!
//! All types here are transient value objects: an external catalog store
//! constructs them per export call and the codec never retains them.

use serde::{Deserialize, Serialize};

use crate::enums::{PublisherRole, WriterRole};

/// Ownership/collection shares per right, expressed as percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Shares {
    /// Performance right share (0.0–100.0).
    #[serde(default)]
    pub performance: f64,
    /// Mechanical right share (0.0–100.0).
    #[serde(default)]
    pub mechanical: f64,
    /// Synchronization right share (0.0–100.0).
    #[serde(default)]
    pub synchronization: f64,
}

impl Shares {
    pub fn new(performance: f64, mechanical: f64, synchronization: f64) -> Self {
        Self {
            performance,
            mechanical,
            synchronization,
        }
    }

    /// Equal share on all three rights.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }
}

/// Society affiliations per right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocietyAffiliations {
    #[serde(default)]
    pub performance: Option<u16>,
    #[serde(default)]
    pub mechanical: Option<u16>,
    #[serde(default)]
    pub synchronization: Option<u16>,
}

/// A writer (composer, author, arranger, ...) attached to a work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Writer {
    pub last_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    pub role: WriterRole,
    /// 11-digit IPI Name Number, if known.
    #[serde(default)]
    pub ipi_name_number: Option<String>,
    /// IPI Base Number (`I-XXXXXXXXX-C`), if known.
    #[serde(default)]
    pub ipi_base_number: Option<String>,
    #[serde(default)]
    pub shares: Shares,
    /// True when the submitter administers this writer's rights.
    #[serde(default)]
    pub controlled: bool,
    /// Code of the publisher collecting for this writer, when linked.
    #[serde(default)]
    pub publisher_code: Option<String>,
    #[serde(default)]
    pub societies: SocietyAffiliations,
}

impl Writer {
    pub fn new(last_name: impl Into<String>, role: WriterRole) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: None,
            role,
            ipi_name_number: None,
            ipi_base_number: None,
            shares: Shares::default(),
            controlled: false,
            publisher_code: None,
            societies: SocietyAffiliations::default(),
        }
    }
}

/// A publisher attached to a work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publisher {
    pub name: String,
    /// Submitter's interested-party code for this publisher.
    pub code: String,
    pub role: PublisherRole,
    #[serde(default)]
    pub ipi_name_number: Option<String>,
    #[serde(default)]
    pub ipi_base_number: Option<String>,
    #[serde(default)]
    pub shares: Shares,
    #[serde(default)]
    pub controlled: bool,
    /// Ordering among co-publishers in the chain of title.
    #[serde(default = "default_chain_sequence")]
    pub chain_sequence: u8,
    #[serde(default)]
    pub societies: SocietyAffiliations,
}

fn default_chain_sequence() -> u8 {
    1
}

impl Publisher {
    pub fn new(name: impl Into<String>, code: impl Into<String>, role: PublisherRole) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            role,
            ipi_name_number: None,
            ipi_base_number: None,
            shares: Shares::default(),
            controlled: false,
            chain_sequence: 1,
            societies: SocietyAffiliations::default(),
        }
    }
}

/// An alternate title for a work (translations, abbreviations).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternateTitle {
    pub title: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// A performing artist associated with a work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performer {
    pub last_name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub ipi_name_number: Option<String>,
}

/// A released recording of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recording {
    #[serde(default)]
    pub release_date: Option<chrono::NaiveDate>,
    /// Playing time in seconds.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub isrc: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version_title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    /// ISNI of the display artist, carried only by the 3.x layout.
    #[serde(default)]
    pub artist_isni: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// Submitter's recording identifier.
    #[serde(default)]
    pub code: Option<String>,
}

/// A musical work to register.
///
/// Invariants enforced by the generator rather than construction:
/// at least one writer (fatal), and a controlled writer implies at least
/// one publisher (warning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    /// Submitter's internal work code, echoed back in ACK files.
    pub code: String,
    #[serde(default)]
    pub iswc: Option<String>,
    /// ISO 639-1 language code of the title.
    #[serde(default)]
    pub language: Option<String>,
    /// Playing time in seconds.
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    /// True when this is a modified version of an existing work.
    #[serde(default)]
    pub modified_version: bool,
    /// True when a commercial recording exists.
    #[serde(default)]
    pub recorded: bool,
    pub writers: Vec<Writer>,
    #[serde(default)]
    pub publishers: Vec<Publisher>,
    #[serde(default)]
    pub alternate_titles: Vec<AlternateTitle>,
    #[serde(default)]
    pub performers: Vec<Performer>,
    #[serde(default)]
    pub recordings: Vec<Recording>,
}

impl Work {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            iswc: None,
            language: None,
            duration_seconds: None,
            modified_version: false,
            recorded: false,
            writers: Vec::new(),
            publishers: Vec::new(),
            alternate_titles: Vec::new(),
            performers: Vec::new(),
            recordings: Vec::new(),
        }
    }

    /// Writers whose rights the submitter administers.
    pub fn controlled_writers(&self) -> impl Iterator<Item = &Writer> {
        self.writers.iter().filter(|w| w.controlled)
    }

    /// Publishers whose rights the submitter administers.
    pub fn controlled_publishers(&self) -> impl Iterator<Item = &Publisher> {
        self.publishers.iter().filter(|p| p.controlled)
    }

    /// Sum of writer performance shares, used for the 100% business check.
    pub fn writer_performance_total(&self) -> f64 {
        self.writers.iter().map(|w| w.shares.performance).sum()
    }
}
