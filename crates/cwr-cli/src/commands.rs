//! Subcommand implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use cwr_codec::{generate, parse_ack};
use cwr_cli::catalog::load_catalog;
use cwr_model::{AckSummary, GenerationResult};

use crate::cli::{AckArgs, GenerateArgs};

/// Outcome of the `generate` subcommand.
#[derive(Debug, Serialize)]
pub struct GenerateOutcome {
    #[serde(flatten)]
    pub result: GenerationResult,
    /// Path the file was written to, absent on `--dry-run`.
    pub written: Option<PathBuf>,
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let catalog = load_catalog(&args.catalog)?;
    let ctx = catalog.context(args.cwr_version.map(Into::into))?;
    let span = info_span!("generate", version = %ctx.version, works = catalog.works.len());
    let _guard = span.enter();

    let result = generate(&catalog.works, &ctx)?;

    let written = if args.dry_run {
        info!(filename = %result.filename, "dry run, nothing written");
        None
    } else {
        let dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        fs::create_dir_all(&dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
        let path = dir.join(&result.filename);
        fs::write(&path, &result.content)
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), records = result.record_count, "file written");
        Some(path)
    };

    Ok(GenerateOutcome { result, written })
}

pub fn run_ack(args: &AckArgs) -> Result<AckSummary> {
    let raw = fs::read_to_string(&args.ack_file)
        .with_context(|| format!("read {}", args.ack_file.display()))?;
    let filename = args
        .ack_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let summary = parse_ack(&raw, &filename)?;
    info!(
        records = summary.records.len(),
        accepted = summary.accepted,
        rejected = summary.rejected,
        "acknowledgement parsed"
    );
    Ok(summary)
}
