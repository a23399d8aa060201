//! Writer records: SWR, OWR, SWT.

use cwr_model::{GenerationContext, Writer};

use crate::field;
use crate::ident;

use super::{collection, prefix};

/// Controlled writer record.
pub fn swr(
    ctx: &GenerationContext,
    writer: &Writer,
    writer_code: &str,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    writer_record("SWR", ctx, writer, writer_code, transaction_seq, record_seq)
}

/// Other (uncontrolled) writer record, same layout as SWR.
pub fn owr(
    ctx: &GenerationContext,
    writer: &Writer,
    writer_code: &str,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    writer_record("OWR", ctx, writer, writer_code, transaction_seq, record_seq)
}

/// Shared SWR/OWR layout.
///
/// Pre-3.0 embeds per-right society and share pairs plus the
/// reversionary and work-for-hire indicators; 3.0+ drops the inline
/// pairs (moved to SWT) and keeps the IPI base.
fn writer_record(
    record_type: &str,
    ctx: &GenerationContext,
    writer: &Writer,
    writer_code: &str,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix(record_type, transaction_seq, record_seq);
    line.push_str(&field::alpha(writer_code, 9));
    let last = ident::cwr_text(&writer.last_name, 45);
    line.push_str(&field::alpha(&last.text, 45));
    let first = ident::cwr_text(writer.first_name.as_deref().unwrap_or(""), 30);
    line.push_str(&field::alpha(&first.text, 30));
    line.push_str(&field::alpha(writer.role.as_code(), 2));
    let ipi = ident::validate_ipi(writer.ipi_name_number.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    line.push_str(&field::alpha_opt(ipi.as_deref(), 11));

    let base = ident::validate_ipi_base(writer.ipi_base_number.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    if ctx.version.is_v3() {
        line.push_str(&field::alpha_opt(base.as_deref(), 13));
    } else {
        let digits = ctx.version.society_digits();
        line.push_str(&field::society(writer.societies.performance, digits));
        line.push_str(&field::share(writer.shares.performance));
        line.push_str(&field::society(writer.societies.mechanical, digits));
        line.push_str(&field::share(writer.shares.mechanical));
        line.push_str(&field::society(writer.societies.synchronization, digits));
        line.push_str(&field::share(writer.shares.synchronization));
        // Reversionary and work-for-hire indicators
        line.push_str(&field::flag_opt(None));
        line.push_str(&field::flag_opt(None));
        line.push_str(&field::alpha_opt(base.as_deref(), 13));
    }
    line
}

/// Writer collection-territory record.
pub fn swt(
    ctx: &GenerationContext,
    writer: &Writer,
    writer_code: &str,
    sequence: u16,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    collection(
        "SWT",
        ctx.version,
        writer_code,
        &writer.shares,
        &writer.societies,
        sequence,
        transaction_seq,
        record_seq,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cwr_model::{CwrVersion, Shares, SocietyAffiliations, TransactionType, WriterRole};

    fn context(version: CwrVersion) -> GenerationContext {
        GenerationContext::new(version, TransactionType::NewWork, "ABC", "ABC MUSIC", "XYZ")
            .with_created_at(
                NaiveDate::from_ymd_opt(2024, 12, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
    }

    fn sample_writer() -> Writer {
        let mut w = Writer::new("McCartney", WriterRole::ComposerAuthor);
        w.first_name = Some("Paul".to_string());
        w.ipi_name_number = Some("12345678956".to_string());
        w.ipi_base_number = Some("I-123456789-5".to_string());
        w.shares = Shares::new(50.0, 50.0, 50.0);
        w.controlled = true;
        w.societies = SocietyAffiliations {
            performance: Some(52),
            mechanical: Some(33),
            synchronization: None,
        };
        w
    }

    #[test]
    fn swr_v2_layout() {
        let line = swr(&context(CwrVersion::V21), &sample_writer(), "W00000001", 0, 3);
        assert!(line.starts_with("SWR0000000000000003W00000001"));
        assert!(line.contains("MCCARTNEY"));
        assert!(line.contains("PAUL"));
        assert!(line.contains("CA"));
        assert!(line.contains("05205000"));
        assert!(line.ends_with("I-123456789-5"));
        assert_eq!(
            line.len(),
            19 + 9 + 45 + 30 + 2 + 11 + 3 * (3 + 5) + 2 + 13
        );
    }

    #[test]
    fn swr_v3_drops_inline_shares() {
        let v2 = swr(&context(CwrVersion::V21), &sample_writer(), "W00000001", 0, 3);
        let v3 = swr(&context(CwrVersion::V30), &sample_writer(), "W00000001", 0, 3);
        assert_eq!(v3.len(), 19 + 9 + 45 + 30 + 2 + 11 + 13);
        assert!(v3.len() < v2.len());
        assert!(!v3.contains("05000"));
        assert!(v3.ends_with("I-123456789-5"));
    }

    #[test]
    fn owr_shares_layout_with_swr() {
        let s = swr(&context(CwrVersion::V22), &sample_writer(), "W00000002", 1, 6);
        let o = owr(&context(CwrVersion::V22), &sample_writer(), "W00000002", 1, 6);
        assert_eq!(&s[..3], "SWR");
        assert_eq!(&o[..3], "OWR");
        assert_eq!(&s[3..], &o[3..]);
    }

    #[test]
    fn swt_keys_by_writer_code() {
        let line = swt(
            &context(CwrVersion::V31),
            &sample_writer(),
            "W00000001",
            1,
            0,
            4,
        );
        assert!(line.starts_with("SWT0000000000000004W00000001"));
        // 3.x trailer: post-term collection status
        assert!(line.ends_with('N'));
    }

    #[test]
    fn invalid_ipi_renders_blank() {
        let mut w = sample_writer();
        w.ipi_name_number = Some("12345678999".to_string());
        let line = swr(&context(CwrVersion::V21), &w, "W00000001", 0, 3);
        assert!(!line.contains("12345678999"));
    }
}
