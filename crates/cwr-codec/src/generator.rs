//! Full-catalog export orchestration.
//!
//! [`generate`] is a pure function over the work batch and context: all
//! per-call state (sequence counters, emitted lines, warnings) lives in
//! locals, so arbitrarily many exports can run concurrently without
//! coordination.

use tracing::{debug, info};

use cwr_model::{
    GenerationContext, GenerationResult, Publisher, PublisherRole, Shares, Work,
};

use crate::error::GenerateError;
use crate::ident;
use crate::records;

/// Tolerance for the 100% writer performance share check.
const SHARE_TOLERANCE: f64 = 0.01;

/// Assumed publisher share when no controlled publisher is declared:
/// the conventional 50/50 publisher/writer split, capped by whatever
/// the controlled writers already claim.
const ASSUMED_PUBLISHER_SHARE: f64 = 50.0;

/// Generate a complete CWR file for a batch of works.
///
/// Fatal conditions (any work without writers) abort the export with an
/// aggregated error; business issues are returned as warnings on the
/// result. The record stream is `HDR`, `GRH`, one transaction per work,
/// `GRT`, `TRL`.
pub fn generate(
    works: &[Work],
    ctx: &GenerationContext,
) -> Result<GenerationResult, GenerateError> {
    if works.is_empty() {
        return Err(GenerateError::EmptyBatch);
    }
    let mut warnings = validate_batch(works)?;

    let mut lines = vec![records::hdr(ctx), records::grh(ctx)];
    let mut transaction_records = 0usize;

    for (index, work) in works.iter().enumerate() {
        let transaction_seq = index as u32;
        let emitted = emit_work(&mut lines, ctx, work, transaction_seq);
        debug!(
            work = %work.code,
            transaction = transaction_seq,
            records = emitted,
            "work transaction emitted"
        );
        transaction_records += emitted;
        collect_text_warnings(work, &mut warnings);
    }

    let transaction_count = works.len();
    // GRT counts GRH + transactions + itself; the file count adds TRL
    // in place of GRH, landing on the same total.
    let record_count = transaction_records + 2;
    lines.push(records::grt(ctx.version, transaction_count, record_count));
    lines.push(records::trl(transaction_count, record_count));

    let mut content = lines.join("\n");
    content.push('\n');

    info!(
        version = %ctx.version,
        transactions = transaction_count,
        records = record_count,
        warnings = warnings.len(),
        "export generated"
    );

    Ok(GenerationResult {
        filename: ctx.filename(),
        content,
        version: ctx.version,
        transaction_count,
        record_count,
        works: works.iter().map(|w| w.code.clone()).collect(),
        warnings,
    })
}

/// Batch validation: zero-writer works are fatal (aggregated), business
/// rule violations become warnings.
fn validate_batch(works: &[Work]) -> Result<Vec<String>, GenerateError> {
    let without_writers: Vec<String> = works
        .iter()
        .filter(|w| w.writers.is_empty())
        .map(|w| w.code.clone())
        .collect();
    if !without_writers.is_empty() {
        return Err(GenerateError::WorksWithoutWriters(without_writers));
    }

    let mut warnings = Vec::new();
    for work in works {
        if work.controlled_writers().count() > 0 && work.controlled_publishers().count() == 0 {
            warnings.push(format!(
                "work {}: controlled writer(s) but no controlled publisher",
                work.code
            ));
        }

        let total = work.writer_performance_total();
        if (total - 100.0).abs() > SHARE_TOLERANCE {
            warnings.push(format!(
                "work {}: writer performance shares total {total:.2}%, expected 100.00%",
                work.code
            ));
        }

        match &work.iswc {
            None => warnings.push(format!("work {}: no ISWC", work.code)),
            Some(iswc) => {
                if let Err(err) = ident::validate_iswc(iswc) {
                    warnings.push(format!("work {}: {err}", work.code));
                }
            }
        }

        for writer in &work.writers {
            if let Some(ipi) = &writer.ipi_name_number
                && let Err(err) = ident::validate_ipi(ipi)
            {
                warnings.push(format!(
                    "work {}: writer {}: {err}",
                    work.code, writer.last_name
                ));
            }
        }
        for publisher in &work.publishers {
            if let Some(ipi) = &publisher.ipi_name_number
                && let Err(err) = ident::validate_ipi(ipi)
            {
                warnings.push(format!(
                    "work {}: publisher {}: {err}",
                    work.code, publisher.name
                ));
            }
        }
        for recording in &work.recordings {
            if let Some(isrc) = &recording.isrc
                && let Err(err) = ident::validate_isrc(isrc)
            {
                warnings.push(format!("work {}: {err}", work.code));
            }
        }
    }
    Ok(warnings)
}

/// Charset and length warnings for the free-text fields of one work.
fn collect_text_warnings(work: &Work, warnings: &mut Vec<String>) {
    let title = ident::cwr_text(&work.title, 60);
    for ch in &title.dropped {
        warnings.push(format!(
            "work {}: title contains non-CWR character '{ch}'",
            work.code
        ));
    }
    if title.truncated {
        warnings.push(format!(
            "work {}: title truncated to 60 characters",
            work.code
        ));
    }
}

/// Emit one work transaction; returns the number of records written.
///
/// Record sequence numbers reset to 0 at the work record and increase
/// monotonically within the transaction.
fn emit_work(
    lines: &mut Vec<String>,
    ctx: &GenerationContext,
    work: &Work,
    transaction_seq: u32,
) -> usize {
    let start = lines.len();
    let mut record_seq = 0u32;
    lines.push(records::work(ctx, work, transaction_seq));

    let controlled: Vec<&Publisher> = work.controlled_publishers().collect();
    if controlled.is_empty() {
        let placeholder = remainder_publisher(work);
        record_seq += 1;
        lines.push(records::opu(ctx, &placeholder, 1, transaction_seq, record_seq));
    } else {
        for (index, publisher) in controlled.iter().enumerate() {
            let sequence = (index + 1) as u8;
            record_seq += 1;
            lines.push(records::spu(ctx, publisher, sequence, transaction_seq, record_seq));
            record_seq += 1;
            lines.push(records::spt(
                ctx,
                publisher,
                u16::from(sequence),
                transaction_seq,
                record_seq,
            ));
        }
    }

    for (index, writer) in work.writers.iter().enumerate() {
        let code = writer_code(index);
        if writer.controlled {
            record_seq += 1;
            lines.push(records::swr(ctx, writer, &code, transaction_seq, record_seq));
            record_seq += 1;
            lines.push(records::swt(ctx, writer, &code, 1, transaction_seq, record_seq));
            if let Some(publisher) = linked_publisher(work, writer.publisher_code.as_deref()) {
                record_seq += 1;
                lines.push(records::pwr(ctx, publisher, &code, transaction_seq, record_seq));
            }
        } else {
            record_seq += 1;
            lines.push(records::owr(ctx, writer, &code, transaction_seq, record_seq));
        }
    }

    for title in &work.alternate_titles {
        record_seq += 1;
        lines.push(records::alt(ctx, title, transaction_seq, record_seq));
    }
    for performer in &work.performers {
        record_seq += 1;
        lines.push(records::per(ctx, performer, transaction_seq, record_seq));
    }
    for recording in &work.recordings {
        record_seq += 1;
        lines.push(records::rec(ctx, recording, transaction_seq, record_seq));
    }

    lines.len() - start
}

/// Deterministic interested-party code for a writer, 1-based within the
/// work.
fn writer_code(index: usize) -> String {
    format!("W{:08}", index + 1)
}

fn linked_publisher<'a>(work: &'a Work, code: Option<&str>) -> Option<&'a Publisher> {
    let code = code?;
    work.publishers.iter().find(|p| p.code == code)
}

/// Placeholder publisher for the synthesized OPU: the uncontrolled
/// remainder per right is `min(50, 100 - controlled writer total)`.
fn remainder_publisher(work: &Work) -> Publisher {
    let controlled: Vec<&cwr_model::Writer> = work.controlled_writers().collect();
    let total = |f: fn(&Shares) -> f64| -> f64 {
        controlled.iter().map(|w| f(&w.shares)).sum()
    };
    let remainder = |claimed: f64| -> f64 {
        ASSUMED_PUBLISHER_SHARE.min((100.0 - claimed).max(0.0))
    };

    let mut publisher = Publisher::new(
        "UNKNOWN PUBLISHER",
        "",
        PublisherRole::OriginalPublisher,
    );
    publisher.shares = Shares::new(
        remainder(total(|s| s.performance)),
        remainder(total(|s| s.mechanical)),
        remainder(total(|s| s.synchronization)),
    );
    publisher
}
