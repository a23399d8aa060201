//! Publisher records: SPU, OPU, SPT, PWR.

use cwr_model::{CwrVersion, GenerationContext, Publisher};

use crate::field;
use crate::ident;

use super::{collection, prefix};

/// Controlled publisher record.
pub fn spu(
    ctx: &GenerationContext,
    publisher: &Publisher,
    sequence: u8,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    publisher_record("SPU", ctx, publisher, sequence, transaction_seq, record_seq)
}

/// Other (uncontrolled) publisher record, same layout as SPU.
pub fn opu(
    ctx: &GenerationContext,
    publisher: &Publisher,
    sequence: u8,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    publisher_record("OPU", ctx, publisher, sequence, transaction_seq, record_seq)
}

/// Shared SPU/OPU layout.
///
/// Pre-3.0 embeds the per-right society and share pairs inline; 3.0+
/// moves them to the companion SPT record and carries the IPI base and
/// agreement number slots instead.
fn publisher_record(
    record_type: &str,
    ctx: &GenerationContext,
    publisher: &Publisher,
    sequence: u8,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix(record_type, transaction_seq, record_seq);
    line.push_str(&field::num(u64::from(sequence), 2));
    line.push_str(&field::alpha(&publisher.code, 9));
    let name = ident::cwr_text(&publisher.name, 45);
    line.push_str(&field::alpha(&name.text, 45));
    line.push_str(&field::alpha(publisher.role.as_code(), 2));
    // Tax ID, never supplied by the catalog
    line.push_str(&field::alpha("", 9));
    let ipi = ident::validate_ipi(publisher.ipi_name_number.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    line.push_str(&field::alpha_opt(ipi.as_deref(), 11));

    if ctx.version.is_v3() {
        let base = ident::validate_ipi_base(publisher.ipi_base_number.as_deref().unwrap_or(""))
            .ok()
            .flatten();
        line.push_str(&field::alpha_opt(base.as_deref(), 13));
        // Submitter agreement number
        line.push_str(&field::alpha("", 14));
    } else {
        let digits = ctx.version.society_digits();
        line.push_str(&field::society(publisher.societies.performance, digits));
        line.push_str(&field::share(publisher.shares.performance));
        line.push_str(&field::society(publisher.societies.mechanical, digits));
        line.push_str(&field::share(publisher.shares.mechanical));
        line.push_str(&field::society(publisher.societies.synchronization, digits));
        line.push_str(&field::share(publisher.shares.synchronization));
        // Special agreements and first-recording-refusal indicators
        line.push_str(&field::alpha("", 1));
        line.push_str(&field::alpha("", 1));
    }
    line
}

/// Publisher collection-territory record.
pub fn spt(
    ctx: &GenerationContext,
    publisher: &Publisher,
    sequence: u16,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    collection(
        "SPT",
        ctx.version,
        &publisher.code,
        &publisher.shares,
        &publisher.societies,
        sequence,
        transaction_seq,
        record_seq,
    )
}

/// Publisher-for-writer link record.
///
/// 2.1 keys the link by publisher code and name; 2.2 inserts the
/// publisher-sequence field; 3.x drops code and name entirely and keys
/// by chain sequence.
pub fn pwr(
    ctx: &GenerationContext,
    publisher: &Publisher,
    writer_code: &str,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix("PWR", transaction_seq, record_seq);
    if ctx.version.is_v3() {
        line.push_str(&field::num(u64::from(publisher.chain_sequence), 2));
        line.push_str(&field::alpha(writer_code, 9));
        return line;
    }

    line.push_str(&field::alpha(&publisher.code, 9));
    let name = ident::cwr_text(&publisher.name, 45);
    line.push_str(&field::alpha(&name.text, 45));
    // Submitter and society agreement numbers
    line.push_str(&field::alpha("", 14));
    line.push_str(&field::alpha("", 14));
    if ctx.version == CwrVersion::V22 {
        line.push_str(&field::num(u64::from(publisher.chain_sequence), 2));
    }
    line.push_str(&field::alpha(writer_code, 9));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cwr_model::{PublisherRole, Shares, SocietyAffiliations, TransactionType};

    fn context(version: CwrVersion) -> GenerationContext {
        GenerationContext::new(version, TransactionType::NewWork, "ABC", "ABC MUSIC", "XYZ")
            .with_created_at(
                NaiveDate::from_ymd_opt(2024, 12, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
    }

    fn sample_publisher() -> Publisher {
        let mut p = Publisher::new(
            "Northern Songs",
            "PUB000001",
            PublisherRole::OriginalPublisher,
        );
        p.ipi_name_number = Some("12345678956".to_string());
        p.ipi_base_number = Some("I-123456789-5".to_string());
        p.shares = Shares::new(50.0, 100.0, 100.0);
        p.controlled = true;
        p.societies = SocietyAffiliations {
            performance: Some(52),
            mechanical: Some(33),
            synchronization: Some(33),
        };
        p
    }

    #[test]
    fn spu_v2_inlines_society_share_pairs() {
        let line = spu(&context(CwrVersion::V21), &sample_publisher(), 1, 0, 1);
        assert!(line.starts_with("SPU000000000000000101PUB000001"));
        assert!(line.contains("NORTHERN SONGS"));
        assert!(line.contains("05205000"));
        assert!(line.contains("03310000"));
        assert_eq!(line.len(), 19 + 2 + 9 + 45 + 2 + 9 + 11 + 3 * (3 + 5) + 2);
    }

    #[test]
    fn spu_v3_moves_shares_out() {
        let line = spu(&context(CwrVersion::V30), &sample_publisher(), 1, 0, 1);
        assert!(!line.contains("05000"));
        assert!(line.contains("I-123456789-5"));
        assert_eq!(line.len(), 19 + 2 + 9 + 45 + 2 + 9 + 11 + 13 + 14);
    }

    #[test]
    fn opu_shares_layout_with_spu() {
        let spu_line = spu(&context(CwrVersion::V21), &sample_publisher(), 1, 0, 1);
        let opu_line = opu(&context(CwrVersion::V21), &sample_publisher(), 1, 0, 1);
        assert_eq!(&spu_line[..3], "SPU");
        assert_eq!(&opu_line[..3], "OPU");
        assert_eq!(&spu_line[3..], &opu_line[3..]);
    }

    #[test]
    fn pwr_grows_sequence_field_at_v22() {
        let p = sample_publisher();
        let v21 = pwr(&context(CwrVersion::V21), &p, "W00000001", 0, 4);
        let v22 = pwr(&context(CwrVersion::V22), &p, "W00000001", 0, 4);
        assert_eq!(v22.len(), v21.len() + 2);
        assert!(v21.ends_with("W00000001"));
        assert!(v22.contains("01W00000001"));
    }

    #[test]
    fn pwr_v3_keys_by_chain_sequence() {
        let mut p = sample_publisher();
        p.chain_sequence = 2;
        let line = pwr(&context(CwrVersion::V30), &p, "W00000001", 0, 4);
        assert_eq!(line, format!("{}02W00000001", "PWR0000000000000004"));
        assert!(!line.contains("NORTHERN"));
    }

    #[test]
    fn spt_uses_publisher_code() {
        let line = spt(&context(CwrVersion::V21), &sample_publisher(), 1, 0, 2);
        assert!(line.starts_with("SPT0000000000000002PUB000001"));
    }
}
