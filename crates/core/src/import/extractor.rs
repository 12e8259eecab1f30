//! Statement extraction from a spreadsheet.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets};
use rust_decimal::Decimal;
use tally_shared::{AccountCode, CellRef, SheetConfig};
use tracing::{debug, info};

use super::cells::{decode_account_code, decode_amount, decode_date, decode_text};
use super::error::ImportError;
use crate::ledger::{LedgerRow, StatementHeader};

/// Column holding the account code. The four amount columns follow it.
const ACCOUNT_COLUMN: u32 = 0;

/// Number of amount cells after the account code.
const AMOUNT_COLUMNS: u32 = 4;

/// Reads statements laid out as configured in [`SheetConfig`].
#[derive(Debug, Clone, Default)]
pub struct StatementExtractor {
    layout: SheetConfig,
}

impl StatementExtractor {
    /// Creates an extractor for the given sheet layout.
    #[must_use]
    pub const fn new(layout: SheetConfig) -> Self {
        Self { layout }
    }

    /// Extracts a statement from a spreadsheet file.
    ///
    /// The file is closed before this returns, whether or not extraction
    /// succeeded.
    pub fn extract_path(&self, path: &Path) -> Result<ExtractedStatement, ImportError> {
        let workbook = calamine::open_workbook_auto(path)?;
        let range = first_worksheet(workbook)?;
        self.extract_range(&range)
    }

    /// Extracts a statement from spreadsheet bytes (e.g. an uploaded file).
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractedStatement, ImportError> {
        let workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = first_worksheet(workbook)?;
        self.extract_range(&range)
    }

    /// Extracts a statement from an already loaded worksheet.
    ///
    /// Every ledger row is decoded up front, so a malformed amount anywhere
    /// fails the whole extraction.
    pub fn extract_range(&self, range: &Range<Data>) -> Result<ExtractedStatement, ImportError> {
        let name_cell = self.layout.source_name_cell;
        let date_cell = self.layout.statement_date_cell;
        let source_name = decode_text(range.get_value((name_cell.row, name_cell.col)), name_cell)?;
        let statement_date =
            decode_date(range.get_value((date_cell.row, date_cell.col)), date_cell)?;

        let first_row = self.layout.first_ledger_row;
        let last_row = range.end().map_or(0, |(row, _)| row);

        let mut rows = Vec::new();
        for row in first_row..=last_row {
            let Some(account_code) = decode_account_code(range.get_value((row, ACCOUNT_COLUMN)))
            else {
                debug!(row, "Skipping non-ledger row");
                continue;
            };
            rows.push(LedgerRow::from_amounts(account_code, decode_amounts(range, row)?));
        }

        if rows.is_empty() {
            return Err(ImportError::NoLedgerRows { first_row });
        }

        let header = StatementHeader {
            source_name,
            statement_date,
        };
        info!(
            source_name = %header.source_name,
            statement_date = %header.statement_date,
            rows = rows.len(),
            "Extracted statement"
        );

        Ok(ExtractedStatement { header, rows })
    }
}

fn first_worksheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Range<Data>, ImportError> {
    workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoWorksheet)?
        .map_err(ImportError::from)
}

fn decode_amounts(range: &Range<Data>, row: u32) -> Result<[Decimal; 4], ImportError> {
    let mut amounts = [Decimal::ZERO; AMOUNT_COLUMNS as usize];
    for (offset, amount) in (1..=AMOUNT_COLUMNS).zip(amounts.iter_mut()) {
        let col = ACCOUNT_COLUMN + offset;
        *amount = decode_amount(range.get_value((row, col)), CellRef::new(row, col))?;
    }
    Ok(amounts)
}

/// A statement pulled out of a spreadsheet.
///
/// Holds no handle on the source document. The account id and row data
/// sequences are aligned: the n-th item of one belongs to the n-th item of
/// the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedStatement {
    header: StatementHeader,
    rows: Vec<LedgerRow>,
}

impl ExtractedStatement {
    /// Source name and statement date.
    #[must_use]
    pub const fn header(&self) -> &StatementHeader {
        &self.header
    }

    /// Account codes of the ledger rows, in document order.
    pub fn account_ids(&self) -> impl Iterator<Item = AccountCode> + '_ {
        self.rows.iter().map(|row| row.account_code)
    }

    /// Opening active, opening passive, turnover active and turnover passive
    /// of each ledger row, in document order.
    pub fn row_data(&self) -> impl Iterator<Item = [Decimal; 4]> + '_ {
        self.rows.iter().map(LedgerRow::amounts)
    }

    /// Ledger rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Number of ledger rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a successfully extracted statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Splits the statement into its header and rows.
    #[must_use]
    pub fn into_parts(self) -> (StatementHeader, Vec<LedgerRow>) {
        (self.header, self.rows)
    }
}
