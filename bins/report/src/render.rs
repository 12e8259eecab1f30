//! Plain-text rendering of a report.

use std::io::{self, Write};

use rust_decimal::Decimal;
use tally_core::ledger::RowTotals;
use tally_core::reports::{LedgerReport, ReportRow};

const KEY_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 18;

const COLUMNS: [&str; 6] = [
    "Opening A",
    "Opening P",
    "Turnover A",
    "Turnover P",
    "Closing A",
    "Closing P",
];

/// Writes the report as an aligned table, amounts shown with `scale`
/// fractional digits.
pub fn write_table<W: Write>(out: &mut W, report: &LedgerReport, scale: u32) -> io::Result<()> {
    writeln!(
        out,
        "{} ({})",
        report.header.source_name, report.header.statement_date
    )?;

    write!(out, "{:<KEY_WIDTH$}", "Account")?;
    for title in COLUMNS {
        write!(out, "{title:>AMOUNT_WIDTH$}")?;
    }
    writeln!(out)?;

    for row in &report.rows {
        match row {
            ReportRow::ClassHeader { label, .. } => writeln!(out, "{label}")?,
            ReportRow::Leaf(leaf) => {
                write_amounts(out, &leaf.account_code.to_string(), &leaf.totals, scale)?;
            }
            ReportRow::GroupSubtotal { group_id, totals } => {
                write_amounts(out, &group_id.to_string(), totals, scale)?;
            }
            ReportRow::ClassSubtotal { label, totals, .. }
            | ReportRow::GrandTotal { label, totals } => {
                write_amounts(out, label, totals, scale)?;
            }
        }
    }
    Ok(())
}

fn write_amounts<W: Write>(out: &mut W, key: &str, totals: &RowTotals, scale: u32) -> io::Result<()> {
    write!(out, "{key:<KEY_WIDTH$}")?;
    for amount in totals.columns() {
        write!(out, "{:>AMOUNT_WIDTH$}", fixed(amount, scale))?;
    }
    writeln!(out)
}

fn fixed(mut amount: Decimal, scale: u32) -> String {
    amount.rescale(scale);
    amount.to_string()
}
