//! Record builders, one per CWR record type.
//!
//! Each builder is a pure function from (context, data, sequence numbers)
//! to one fixed-width line, dispatching internally on [`CwrVersion`]:
//! 2.1 and 2.2 share most layouts, 3.0 and 3.1 share a distinct one.
//! All field rendering goes through [`crate::field`] so widths stay
//! centralized.

mod control;
mod publisher;
mod work;
mod writer;

pub use control::{grh, grt, hdr, trl};
pub use publisher::{opu, pwr, spt, spu};
pub use work::{alt, per, rec, work};
pub use writer::{owr, swr, swt};

use cwr_model::{CwrVersion, Shares, SocietyAffiliations};

use crate::field;

/// 19-byte transaction record prefix: type + transaction and record
/// sequence numbers.
pub(crate) fn prefix(record_type: &str, transaction_seq: u32, record_seq: u32) -> String {
    format!(
        "{}{}{}",
        field::alpha(record_type, 3),
        field::num(u64::from(transaction_seq), 8),
        field::num(u64::from(record_seq), 8)
    )
}

/// World territory per the CISAC TIS standard.
pub(crate) const TIS_WORLD: &str = "2136";

/// Shared layout for the SPT/SWT collection-territory records.
///
/// Pre-3.0 carries only the collection shares; 3.0+ embeds the 4-digit
/// per-right societies and a post-term collection status trailer.
pub(crate) fn collection(
    record_type: &str,
    version: CwrVersion,
    ip_code: &str,
    shares: &Shares,
    societies: &SocietyAffiliations,
    sequence: u16,
    transaction_seq: u32,
    record_seq: u32,
) -> String {
    let mut line = prefix(record_type, transaction_seq, record_seq);
    line.push_str(&field::alpha(ip_code, 9));
    if version.is_v3() {
        let digits = version.society_digits();
        line.push_str(&field::society(societies.performance, digits));
        line.push_str(&field::share(shares.performance));
        line.push_str(&field::society(societies.mechanical, digits));
        line.push_str(&field::share(shares.mechanical));
        line.push_str(&field::society(societies.synchronization, digits));
        line.push_str(&field::share(shares.synchronization));
    } else {
        line.push_str(&field::share(shares.performance));
        line.push_str(&field::share(shares.mechanical));
        line.push_str(&field::share(shares.synchronization));
    }
    // Inclusion indicator, world territory, shares-change flag, sequence
    line.push_str(&field::alpha("I", 1));
    line.push_str(&field::alpha(TIS_WORLD, 4));
    line.push_str(&field::alpha("N", 1));
    line.push_str(&field::num(u64::from(sequence), 3));
    if version.is_v3() {
        // Post-term collection status
        line.push_str(&field::alpha("N", 1));
    }
    line
}

/// Compact wire form of a normalized identifier (separators stripped).
pub(crate) fn compact(value: Option<&str>) -> String {
    value
        .map(|v| v.chars().filter(|c| !matches!(c, '-' | '.' | ' ')).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_layout() {
        let p = prefix("SPU", 3, 12);
        assert_eq!(p.len(), 19);
        assert_eq!(&p[..3], "SPU");
        assert_eq!(&p[3..11], "00000003");
        assert_eq!(&p[11..19], "00000012");
    }

    #[test]
    fn compact_strips_separators() {
        assert_eq!(compact(Some("T-123456789-2")), "T1234567892");
        assert_eq!(compact(Some("US-RC1-76-07839")), "USRC17607839");
        assert_eq!(compact(None), "");
    }

    #[test]
    fn collection_widths_by_version() {
        let shares = Shares::new(50.0, 100.0, 100.0);
        let societies = SocietyAffiliations {
            performance: Some(52),
            mechanical: Some(44),
            synchronization: None,
        };
        let v2 = collection(
            "SPT",
            CwrVersion::V21,
            "PUB000001",
            &shares,
            &societies,
            1,
            0,
            2,
        );
        // prefix + ip + 3 shares + indicator + TIS + flag + sequence
        assert_eq!(v2.len(), 19 + 9 + 15 + 1 + 4 + 1 + 3);
        assert!(v2.contains("05000"));

        let v3 = collection(
            "SPT",
            CwrVersion::V30,
            "PUB000001",
            &shares,
            &societies,
            1,
            0,
            2,
        );
        // adds three 4-digit societies and the post-term status
        assert_eq!(v3.len(), v2.len() + 12 + 1);
        assert!(v3.contains("0052"));
        assert!(v3.ends_with('N'));
    }
}
