//! File and group control records: HDR, GRH, GRT, TRL.

use cwr_model::{CwrVersion, GenerationContext};

use crate::field;
use crate::ident;

/// EDI standard version literal carried by every HDR.
const EDI_STANDARD: &str = "01.10";

/// Software identification embedded in the 3.x header.
const SOFTWARE_NAME: &str = "CWR-CODEC";
const SOFTWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transmission header.
///
/// 2.1/2.2 identify the sender by a 9-digit IPI slice and carry no
/// software fields; 3.0/3.1 use the 4-character submitter code and embed
/// the version literal, software identification, and filename.
pub fn hdr(ctx: &GenerationContext) -> String {
    let mut line = String::from("HDR");
    line.push_str(&field::alpha("PB", 2));

    if ctx.version.is_v3() {
        line.push_str(&field::alpha(&ctx.submitter_code.to_uppercase(), 4));
    } else {
        line.push_str(&sender_ipi_slice(ctx.submitter_ipi.as_deref()));
    }

    let name = ident::cwr_text(&ctx.submitter_name, 45);
    line.push_str(&field::alpha(&name.text, 45));
    line.push_str(&field::alpha(EDI_STANDARD, 5));
    line.push_str(&field::date(Some(ctx.created_at.date())));
    line.push_str(&field::time(ctx.created_at.time()));
    line.push_str(&field::date(Some(ctx.created_at.date())));
    // Character set
    line.push_str(&field::alpha("", 15));

    if let Some(version) = ctx.version.header_version_literal() {
        line.push_str(&field::alpha(version, 6));
        line.push_str(&field::num(1, 3));
        line.push_str(&field::alpha(SOFTWARE_NAME, 30));
        line.push_str(&field::alpha(SOFTWARE_VERSION, 30));
        line.push_str(&field::alpha(&ctx.filename(), 27));
    }
    line
}

/// First 9 digits of the submitter IPI, zero-filled when absent.
fn sender_ipi_slice(ipi: Option<&str>) -> String {
    let digits: String = ipi
        .unwrap_or("")
        .chars()
        .filter(char::is_ascii_digit)
        .take(9)
        .collect();
    format!("{digits:0>9}")
}

/// Group header.
pub fn grh(ctx: &GenerationContext) -> String {
    let mut line = String::from("GRH");
    line.push_str(&field::alpha(
        ctx.transaction_type.record_type(ctx.version),
        3,
    ));
    line.push_str(&field::num(1, 5));
    line.push_str(&field::alpha(ctx.version.group_version_literal(), 5));
    line.push_str(&field::num(0, 10));
    if !ctx.version.is_v3() {
        // Submission/distribution type, unused by registrations
        line.push_str(&field::alpha("", 2));
    }
    line
}

/// Group trailer with per-group counts.
///
/// The record count covers GRH, the transaction records, and the GRT
/// itself. The 2.x layout carries a currency/monetary-value tail that
/// 3.x dropped.
pub fn grt(
    version: CwrVersion,
    transaction_count: usize,
    record_count: usize,
) -> String {
    let mut line = String::from("GRT");
    line.push_str(&field::num(1, 5));
    line.push_str(&field::num(transaction_count as u64, 8));
    line.push_str(&field::num(record_count as u64, 8));
    if !version.is_v3() {
        line.push_str(&field::alpha("", 3));
        line.push_str(&field::num(0, 10));
    }
    line
}

/// Transmission trailer with file-level counts.
pub fn trl(transaction_count: usize, record_count: usize) -> String {
    let mut line = String::from("TRL");
    line.push_str(&field::num(1, 5));
    line.push_str(&field::num(transaction_count as u64, 8));
    line.push_str(&field::num(record_count as u64, 8));
    line
}
