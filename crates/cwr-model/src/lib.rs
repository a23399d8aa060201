//! Shared data model for CWR registration and acknowledgement files.
//!
//! Value types only: works, writers, publishers, the generation context
//! and the result/summary types both codec entry points return. All of
//! them are transient values owned by the caller; nothing here holds
//! cross-call state.

pub mod context;
pub mod enums;
pub mod error;
pub mod result;
pub mod work;

pub use context::GenerationContext;
pub use enums::{
    AckRecordType, AckStatus, CwrVersion, PublisherRole, TransactionType, WriterRole,
};
pub use error::{ModelError, Result};
pub use result::{AckRecord, AckSummary, GenerationResult};
pub use work::{
    AlternateTitle, Performer, Publisher, Recording, Shares, SocietyAffiliations, Work, Writer,
};
