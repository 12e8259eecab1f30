//! Cell decoding.
//!
//! Spreadsheet numbers arrive as doubles. They are converted to `Decimal`
//! here and nowhere else.

use std::str::FromStr;

use calamine::Data;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tally_shared::{AccountCode, CellRef};

use super::error::ImportError;

/// Serial numbers below this sit before the fictitious 1900-02-29.
const LEAP_BUG_SERIAL: i64 = 60;

/// Whether a cell's text is exactly four decimal digits.
#[must_use]
pub fn is_account_code(text: &str) -> bool {
    text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit())
}

/// Reads an account code cell, `None` when the cell is not an account row.
///
/// Matching uses the cell's display text, so an integral numeric cell such
/// as `1001.0` qualifies like the text `"1001"`.
#[must_use]
pub fn decode_account_code(cell: Option<&Data>) -> Option<AccountCode> {
    let text = cell?.to_string();
    if !is_account_code(&text) {
        return None;
    }
    text.parse().ok()
}

/// Reads the source name header cell.
pub fn decode_text(cell: Option<&Data>, at: CellRef) -> Result<String, ImportError> {
    match cell {
        Some(Data::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        None | Some(Data::Empty | Data::String(_)) => Err(ImportError::MissingHeader { cell: at }),
        Some(other) => Err(ImportError::InvalidSourceName {
            cell: at,
            value: other.to_string(),
        }),
    }
}

/// Reads the statement date header cell.
///
/// Accepts native date-time cells, 1900-system serial numbers and ISO
/// `YYYY-MM-DD` text.
pub fn decode_date(cell: Option<&Data>, at: CellRef) -> Result<NaiveDate, ImportError> {
    let cell = match cell {
        None | Some(Data::Empty) => return Err(ImportError::MissingHeader { cell: at }),
        Some(cell) => cell,
    };

    let date = match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::Float(f) => Decimal::try_from(*f).ok().and_then(serial_to_date),
        Data::Int(i) => serial_to_date(Decimal::from(*i)),
        Data::DateTimeIso(s) | Data::String(s) => parse_iso_date(s),
        _ => None,
    };

    date.ok_or_else(|| ImportError::InvalidDate {
        cell: at,
        value: cell.to_string(),
    })
}

/// Reads one amount cell. Empty cells count as zero.
pub fn decode_amount(cell: Option<&Data>, at: CellRef) -> Result<Decimal, ImportError> {
    let invalid = |value: String| ImportError::InvalidAmount { cell: at, value };

    match cell {
        None | Some(Data::Empty) => Ok(Decimal::ZERO),
        Some(Data::Int(i)) => Ok(Decimal::from(*i)),
        Some(Data::Float(f)) => Decimal::try_from(*f).map_err(|_| invalid(f.to_string())),
        Some(Data::String(s)) => parse_amount_text(s).ok_or_else(|| invalid(s.clone())),
        Some(other) => Err(invalid(other.to_string())),
    }
}

fn parse_amount_text(text: &str) -> Option<Decimal> {
    let normalized: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if normalized.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(&normalized).ok()
}

fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text.get(..10)?, "%Y-%m-%d").ok()
}

/// Converts a 1900-system serial day number to a date, dropping the time of
/// day.
fn serial_to_date(serial: Decimal) -> Option<NaiveDate> {
    let days = serial.trunc().to_i64()?;
    if days < 0 {
        return None;
    }
    let epoch = if days < LEAP_BUG_SERIAL {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    epoch.checked_add_signed(Duration::try_days(days)?)
}
