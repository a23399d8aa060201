//! Property tests for the identifier checksum pair
//! (`generate_*_checksum` / `validate_*`).

use proptest::prelude::*;

use cwr_codec::{
    generate_ipi_checksum, generate_iswc_checksum, validate_ipi, validate_iswc,
};

proptest! {
    #[test]
    fn generated_ipi_numbers_validate(base in 0u64..=999_999_999) {
        let nine = format!("{base:09}");
        // Bases whose remainder is 1 have no representable check digits.
        if let Some(full) = generate_ipi_checksum(&nine) {
            let normalized = validate_ipi(&full).unwrap();
            prop_assert_eq!(normalized, Some(full));
        }
    }

    #[test]
    fn mutated_ipi_check_digits_are_rejected(
        base in 0u64..=999_999_999,
        delta in 1u32..=99,
    ) {
        let nine = format!("{base:09}");
        if let Some(full) = generate_ipi_checksum(&nine) {
            let good: u32 = full[9..].parse().unwrap();
            let bad = (good + delta) % 100;
            let mutated = format!("{nine}{bad:02}");
            prop_assert!(validate_ipi(&mutated).is_err());
        }
    }

    #[test]
    fn generated_iswcs_validate_and_normalize(base in 0u64..=999_999_999) {
        let nine = format!("{base:09}");
        let full = generate_iswc_checksum(&nine).unwrap();
        let normalized = validate_iswc(&full).unwrap();
        prop_assert_eq!(normalized, Some(full));
    }

    #[test]
    fn iswc_accepts_separator_variants(base in 0u64..=999_999_999) {
        let nine = format!("{base:09}");
        let full = generate_iswc_checksum(&nine).unwrap();
        let check = &full[full.len() - 1..];
        let dotted = format!("T-{}.{}.{}-{check}", &nine[..3], &nine[3..6], &nine[6..]);
        let normalized = validate_iswc(&dotted).unwrap();
        prop_assert_eq!(normalized, Some(full));
    }
}
