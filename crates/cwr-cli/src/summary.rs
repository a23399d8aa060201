//! Human-readable report tables for both subcommands.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use cwr_model::{AckRecordType, AckStatus, AckSummary};

use crate::commands::GenerateOutcome;

pub fn print_generation(outcome: &GenerateOutcome) {
    let result = &outcome.result;
    println!("File: {}", result.filename);
    println!("Version: CWR {}", result.version);
    match &outcome.written {
        Some(path) => println!("Written: {}", path.display()),
        None => println!("Written: - (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Work"), header_cell("Warnings")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for code in &result.works {
        let needle = format!("work {code}:");
        let warnings = result
            .warnings
            .iter()
            .filter(|w| w.contains(&needle))
            .count();
        table.add_row(vec![
            Cell::new(code)
                .fg(comfy_table::Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(warnings, comfy_table::Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new(format!(
            "TOTAL ({} transactions, {} records)",
            result.transaction_count, result.record_count
        ))
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold),
        count_cell(result.warnings.len(), comfy_table::Color::Yellow)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.warnings {
            eprintln!("- {warning}");
        }
    }
}

pub fn print_ack(summary: &AckSummary) {
    println!("File: {}", summary.filename);
    println!("Version: CWR {}", summary.version);
    println!("Sender: {}", summary.sender_code);
    if !summary.receiver_code.is_empty() {
        println!("Receiver: {}", summary.receiver_code);
    }
    if let Some(date) = summary.processing_date {
        println!("Processed: {date}");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tx"),
        header_cell("Type"),
        header_cell("Status"),
        header_cell("Title"),
        header_cell("Work Code"),
        header_cell("Society ID"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for record in &summary.records {
        table.add_row(vec![
            Cell::new(record.transaction_sequence),
            Cell::new(match record.record_type {
                AckRecordType::Ack => "ACK",
                AckRecordType::Msg => "MSG",
            }),
            status_cell(record.status),
            text_cell(record.creation_title.as_deref()),
            text_cell(record.work_code.as_deref()),
            text_cell(record.society_work_id.as_deref()),
            text_cell(record.message.as_deref()),
        ]);
    }
    println!("{table}");
    println!(
        "Accepted: {}  Rejected: {}  Conflicts: {}  Duplicates: {}",
        summary.accepted, summary.rejected, summary.conflicts, summary.duplicates
    );

    if !summary.errors.is_empty() {
        eprintln!("Skipped lines:");
        for error in &summary.errors {
            eprintln!("- {error}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: AckStatus) -> Cell {
    let cell = Cell::new(status.as_code());
    if status.is_success() {
        cell.fg(comfy_table::Color::Green)
    } else if status.requires_attention() {
        cell.fg(comfy_table::Color::Red).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn count_cell(count: usize, color: comfy_table::Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(comfy_table::Color::DarkGrey)
}
