//! JSON catalog input for the `generate` subcommand.
//!
//! A catalog file carries the submission parameters and the works to
//! register:
//!
//! ```json
//! {
//!   "version": "2.1",
//!   "transaction_type": "new",
//!   "submitter_code": "ABC",
//!   "submitter_name": "ABC MUSIC PUBLISHING",
//!   "submitter_ipi": "00123456789",
//!   "receiver_code": "052",
//!   "works": [ { "title": "Yesterday", "code": "WRK0001", "writers": [] } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use cwr_model::{CwrVersion, GenerationContext, TransactionType, Work};

/// Deserialized catalog file.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    /// CWR version label (`"2.1"`, `"2.2"`, `"3.0"`, `"3.1"`).
    #[serde(default = "default_version")]
    pub version: String,
    /// `"new"` or `"revision"`.
    #[serde(default = "default_transaction_type")]
    pub transaction_type: String,
    pub submitter_code: String,
    pub submitter_name: String,
    #[serde(default)]
    pub submitter_ipi: Option<String>,
    pub receiver_code: String,
    pub works: Vec<Work>,
}

fn default_version() -> String {
    "2.1".to_string()
}

fn default_transaction_type() -> String {
    "new".to_string()
}

/// Read and deserialize a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read catalog {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&raw)
        .with_context(|| format!("parse catalog {}", path.display()))?;
    Ok(catalog)
}

impl Catalog {
    /// Build the generation context, optionally overriding the catalog's
    /// version from the command line.
    pub fn context(&self, version_override: Option<CwrVersion>) -> Result<GenerationContext> {
        let version = match version_override {
            Some(version) => version,
            None => self
                .version
                .parse()
                .with_context(|| format!("catalog version '{}'", self.version))?,
        };
        let transaction_type: TransactionType = self
            .transaction_type
            .parse()
            .with_context(|| format!("catalog transaction type '{}'", self.transaction_type))?;

        let mut ctx = GenerationContext::new(
            version,
            transaction_type,
            &self.submitter_code,
            &self.submitter_name,
            &self.receiver_code,
        );
        if let Some(ipi) = &self.submitter_ipi {
            ctx = ctx.with_submitter_ipi(ipi);
        }
        Ok(ctx)
    }
}
