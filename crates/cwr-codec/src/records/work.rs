//! Work transaction record and its secondary attachments: ALT, PER, REC.

use cwr_model::{AlternateTitle, GenerationContext, Performer, Recording, Work};

use crate::field;
use crate::ident;

use super::{compact, prefix};

/// Work registration record.
///
/// The record literal is `NWR`/`REV` pre-3.0 and always `WRK` at 3.0+;
/// the field layout is otherwise shared, with version-specific tails:
/// grand-rights indicator and composite component count on 2.x, a
/// priority flag on 3.x.
pub fn work(ctx: &GenerationContext, work: &Work, transaction_seq: u32) -> String {
    let record_type = ctx.transaction_type.record_type(ctx.version);
    let mut line = prefix(record_type, transaction_seq, 0);

    let title = ident::cwr_text(&work.title, 60);
    line.push_str(&field::alpha(&title.text, 60));
    line.push_str(&field::alpha_opt(work.language.as_deref(), 2));
    line.push_str(&field::alpha(&work.code, 14));
    let iswc = ident::validate_iswc(work.iswc.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    line.push_str(&field::alpha(&compact(iswc.as_deref()), 11));
    // Copyright date, not tracked by the catalog
    line.push_str(&field::date(None));
    // Musical work distribution category
    line.push_str(&field::alpha("POP", 3));
    line.push_str(&field::duration(work.duration_seconds));
    line.push_str(&field::flag(work.recorded));
    // Version type and excerpt type
    line.push_str(&field::alpha(
        if work.modified_version { "MOD" } else { "ORI" },
        3,
    ));
    line.push_str(&field::alpha("", 3));

    if ctx.version.is_v3() {
        // Priority flag
        line.push_str(&field::alpha("", 1));
    } else {
        // Grand rights indicator and composite component count
        line.push_str(&field::flag(false));
        line.push_str(&field::num(0, 3));
    }
    line
}

/// Alternate title record.
pub fn alt(
    _ctx: &GenerationContext,
    title: &AlternateTitle,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix("ALT", transaction_seq, record_seq);
    let cleaned = ident::cwr_text(&title.title, 60);
    line.push_str(&field::alpha(&cleaned.text, 60));
    // Title type: alternative title
    line.push_str(&field::alpha("AT", 2));
    line.push_str(&field::alpha_opt(title.language.as_deref(), 2));
    line
}

/// Performing artist record.
pub fn per(
    _ctx: &GenerationContext,
    performer: &Performer,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix("PER", transaction_seq, record_seq);
    let last = ident::cwr_text(&performer.last_name, 45);
    line.push_str(&field::alpha(&last.text, 45));
    let first = ident::cwr_text(performer.first_name.as_deref().unwrap_or(""), 30);
    line.push_str(&field::alpha(&first.text, 30));
    let ipi = ident::validate_ipi(performer.ipi_name_number.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    line.push_str(&field::alpha_opt(ipi.as_deref(), 11));
    line
}

/// Recording detail record.
///
/// The field set grows monotonically by version: 2.1 carries only
/// date/duration/ISRC, 2.2 appends titles/artist/label/recording code,
/// 3.x adds the artist ISNI and leads with the descriptive fields.
pub fn rec(
    ctx: &GenerationContext,
    recording: &Recording,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix("REC", transaction_seq, record_seq);
    let isrc = ident::validate_isrc(recording.isrc.as_deref().unwrap_or(""))
        .ok()
        .flatten();
    let isrc = compact(isrc.as_deref());

    if ctx.version.is_v3() {
        line.push_str(&cleaned_opt(recording.title.as_deref(), 60));
        line.push_str(&cleaned_opt(recording.version_title.as_deref(), 60));
        line.push_str(&cleaned_opt(recording.artist.as_deref(), 60));
        line.push_str(&field::alpha(
            &compact(recording.artist_isni.as_deref()),
            16,
        ));
        line.push_str(&cleaned_opt(recording.label.as_deref(), 60));
        line.push_str(&field::date(recording.release_date));
        line.push_str(&field::duration(recording.duration_seconds));
        line.push_str(&field::alpha(&isrc, 12));
        line.push_str(&field::alpha_opt(recording.code.as_deref(), 14));
    } else {
        line.push_str(&field::date(recording.release_date));
        line.push_str(&field::duration(recording.duration_seconds));
        line.push_str(&field::alpha(&isrc, 12));
        if ctx.version == cwr_model::CwrVersion::V22 {
            line.push_str(&cleaned_opt(recording.title.as_deref(), 60));
            line.push_str(&cleaned_opt(recording.version_title.as_deref(), 60));
            line.push_str(&cleaned_opt(recording.artist.as_deref(), 60));
            line.push_str(&cleaned_opt(recording.label.as_deref(), 60));
            line.push_str(&field::alpha_opt(recording.code.as_deref(), 14));
        }
    }
    line
}

fn cleaned_opt(value: Option<&str>, width: usize) -> String {
    field::alpha(&ident::cwr_text(value.unwrap_or(""), width).text, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cwr_model::{CwrVersion, TransactionType};

    fn context(version: CwrVersion, transaction_type: TransactionType) -> GenerationContext {
        GenerationContext::new(version, transaction_type, "ABC", "ABC MUSIC", "XYZ")
            .with_created_at(
                NaiveDate::from_ymd_opt(2024, 12, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            )
    }

    fn sample_work() -> Work {
        let mut w = Work::new("Yesterday", "W000123");
        w.iswc = Some("T-123456789-2".to_string());
        w.language = Some("EN".to_string());
        w.duration_seconds = Some(125);
        w.recorded = true;
        w
    }

    #[test]
    fn work_record_type_by_version() {
        let w = sample_work();
        let nwr = work(&context(CwrVersion::V21, TransactionType::NewWork), &w, 0);
        assert!(nwr.starts_with("NWR0000000000000000"));
        let rev = work(&context(CwrVersion::V22, TransactionType::Revision), &w, 4);
        assert!(rev.starts_with("REV0000000400000000"));
        let wrk = work(&context(CwrVersion::V30, TransactionType::NewWork), &w, 0);
        assert!(wrk.starts_with("WRK"));
    }

    #[test]
    fn work_fields_rendered() {
        let w = sample_work();
        let line = work(&context(CwrVersion::V21, TransactionType::NewWork), &w, 0);
        assert!(line.contains("YESTERDAY"));
        assert!(line.contains("W000123"));
        // ISWC in compact wire form
        assert!(line.contains("T1234567892"));
        // 125 seconds
        assert!(line.contains("000205"));
        // tail: grand rights N + composite count 000
        assert!(line.ends_with("N000"));
    }

    #[test]
    fn work_v3_tail_is_priority_flag() {
        let w = sample_work();
        let v2 = work(&context(CwrVersion::V21, TransactionType::NewWork), &w, 0);
        let v3 = work(&context(CwrVersion::V30, TransactionType::NewWork), &w, 0);
        assert_eq!(v2.len(), v3.len() + 3);
        assert!(v3.ends_with(' '));
    }

    #[test]
    fn work_invalid_iswc_renders_blank() {
        let mut w = sample_work();
        w.iswc = Some("T-123456789-9".to_string());
        let line = work(&context(CwrVersion::V21, TransactionType::NewWork), &w, 0);
        assert!(!line.contains("T123456789"));
    }

    #[test]
    fn alt_record() {
        let ctx = context(CwrVersion::V21, TransactionType::NewWork);
        let title = AlternateTitle {
            title: "Hier Encore".to_string(),
            language: Some("FR".to_string()),
        };
        let line = alt(&ctx, &title, 2, 7);
        assert!(line.starts_with("ALT0000000200000007"));
        assert!(line.contains("HIER ENCORE"));
        assert!(line.ends_with("ATFR"));
        assert_eq!(line.len(), 19 + 60 + 2 + 2);
    }

    #[test]
    fn per_record() {
        let ctx = context(CwrVersion::V21, TransactionType::NewWork);
        let performer = Performer {
            last_name: "Charles".to_string(),
            first_name: Some("Ray".to_string()),
            ipi_name_number: Some("12345678956".to_string()),
        };
        let line = per(&ctx, &performer, 0, 5);
        assert!(line.contains("CHARLES"));
        assert!(line.contains("RAY"));
        assert!(line.contains("12345678956"));
        assert_eq!(line.len(), 19 + 45 + 30 + 11);
    }

    #[test]
    fn rec_grows_by_version() {
        let recording = Recording {
            release_date: NaiveDate::from_ymd_opt(1965, 9, 13),
            duration_seconds: Some(125),
            isrc: Some("GB-AYE-65-00001".to_string()),
            title: Some("Yesterday".to_string()),
            version_title: None,
            artist: Some("The Beatles".to_string()),
            artist_isni: Some("0000 0001 2149 4428".to_string()),
            label: Some("Parlophone".to_string()),
            code: Some("R0001".to_string()),
        };

        let v21 = rec(
            &context(CwrVersion::V21, TransactionType::NewWork),
            &recording,
            0,
            8,
        );
        assert_eq!(v21.len(), 19 + 8 + 6 + 12);
        assert!(v21.contains("GBAYE6500001"));
        assert!(!v21.contains("BEATLES"));

        let v22 = rec(
            &context(CwrVersion::V22, TransactionType::NewWork),
            &recording,
            0,
            8,
        );
        assert_eq!(v22.len(), v21.len() + 60 * 4 + 14);
        assert!(v22.contains("THE BEATLES"));
        assert!(v22.contains("PARLOPHONE"));

        let v30 = rec(
            &context(CwrVersion::V30, TransactionType::NewWork),
            &recording,
            0,
            8,
        );
        assert_eq!(v30.len(), v22.len() + 16);
        assert!(v30.contains("0000000121494428"));
        // 3.x leads with the recording title, date moves later
        assert!(v30.starts_with("REC0000000000000008YESTERDAY"));
    }
}
