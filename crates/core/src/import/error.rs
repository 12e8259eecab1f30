//! Import error types.

use tally_shared::CellRef;
use thiserror::Error;

/// Ways a statement document can fail to have the expected shape.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document could not be read as a workbook.
    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook contains no worksheet.
    #[error("Workbook has no worksheets")]
    NoWorksheet,

    /// A header cell is empty or outside the sheet.
    #[error("Header cell {cell} is empty")]
    MissingHeader {
        /// Position of the header cell.
        cell: CellRef,
    },

    /// The source name cell does not hold text.
    #[error("Cell {cell} does not hold a source name: {value}")]
    InvalidSourceName {
        /// Position of the cell.
        cell: CellRef,
        /// Cell content as text.
        value: String,
    },

    /// The statement date cell cannot be decoded into a calendar date.
    #[error("Cell {cell} does not hold a date: {value}")]
    InvalidDate {
        /// Position of the cell.
        cell: CellRef,
        /// Cell content as text.
        value: String,
    },

    /// An amount cell of a ledger row is not numeric.
    #[error("Cell {cell} does not hold an amount: {value}")]
    InvalidAmount {
        /// Position of the cell.
        cell: CellRef,
        /// Cell content as text.
        value: String,
    },

    /// No row below the header matches the account code pattern.
    #[error("No ledger rows found from row {first_row}")]
    NoLedgerRows {
        /// First row that was scanned.
        first_row: u32,
    },
}
