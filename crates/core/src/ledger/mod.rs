//! Statement ledger rows and balance derivation.
//!
//! This module implements:
//! - Ledger rows as read from a statement (opening balance and turnover)
//! - The six-column totals shared by accounts and subtotals
//! - Closing balance derivation for single-sided accounts

pub mod balance;
pub mod types;

#[cfg(test)]
mod balance_props;

pub use balance::{BalanceSide, ClosingBalance, derive_closing};
pub use types::{LedgerRow, RowTotals, StatementHeader};
