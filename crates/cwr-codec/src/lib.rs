//! Common Works Registration (CWR) file generation and ACK parsing.
//!
//! This crate renders a catalog of musical works into the fixed-width EDI
//! format that CISAC collection societies accept (CWR 2.1, 2.2, 3.0 and
//! 3.1), and decodes the acknowledgement files they send back.
//!
//! # Example
//!
//! ```
//! use cwr_codec::generate;
//! use cwr_model::{
//!     CwrVersion, GenerationContext, Shares, TransactionType, Work, Writer,
//!     WriterRole,
//! };
//!
//! let mut work = Work::new("Yesterday", "WRK0001");
//! let mut writer = Writer::new("MCCARTNEY", WriterRole::ComposerAuthor);
//! writer.shares = Shares::uniform(100.0);
//! work.writers.push(writer);
//!
//! let ctx = GenerationContext::new(
//!     CwrVersion::V21,
//!     TransactionType::NewWork,
//!     "ABC",
//!     "ABC MUSIC PUBLISHING",
//!     "052",
//! );
//! let result = generate(&[work], &ctx).unwrap();
//! assert_eq!(result.transaction_count, 1);
//! assert!(result.content.starts_with("HDR"));
//! ```
//!
//! Both entry points are pure functions over their inputs; nothing is
//! retained between calls, so concurrent exports and parses need no
//! coordination.

pub mod ack;
pub mod error;
pub mod field;
pub mod generator;
pub mod ident;
pub mod records;

pub use ack::parse_ack;
pub use error::{AckError, GenerateError, Result};
pub use generator::generate;
pub use ident::{
    CleanedText, IdentError, cwr_text, generate_ipi_checksum, generate_iswc_checksum,
    validate_ean13, validate_ipi, validate_ipi_base, validate_isrc, validate_iswc,
    validate_society,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
