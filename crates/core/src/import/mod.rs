//! Statement import from spreadsheets.
//!
//! Reads the header metadata (source name, statement date) and the block of
//! ledger rows from the first worksheet. A row is a ledger row iff its first
//! cell reads as exactly four decimal digits; everything else (titles,
//! class captions, trailing totals) is skipped.

pub mod cells;
pub mod error;
pub mod extractor;

#[cfg(test)]
mod tests;

pub use error::ImportError;
pub use extractor::{ExtractedStatement, StatementExtractor};
