//! Ledger row types.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::AccountCode;

use super::balance::{ClosingBalance, derive_closing};

/// Identity of one imported statement.
///
/// At most one ledger is kept per `(source_name, statement_date)` pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatementHeader {
    /// Name of the institution that issued the statement.
    pub source_name: String,
    /// Date the statement was drawn up for.
    pub statement_date: NaiveDate,
}

impl StatementHeader {
    /// Creates a statement header.
    #[must_use]
    pub fn new(source_name: impl Into<String>, statement_date: NaiveDate) -> Self {
        Self {
            source_name: source_name.into(),
            statement_date,
        }
    }
}

impl std::fmt::Display for StatementHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.source_name, self.statement_date)
    }
}

/// One account line of a statement: opening balance and turnover.
///
/// Closing amounts are derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Account code.
    pub account_code: AccountCode,
    /// Opening balance, active side.
    pub opening_active: Decimal,
    /// Opening balance, passive side.
    pub opening_passive: Decimal,
    /// Turnover, active side.
    pub turnover_active: Decimal,
    /// Turnover, passive side.
    pub turnover_passive: Decimal,
}

impl LedgerRow {
    /// Builds a row from the four amount cells in document order:
    /// opening active, opening passive, turnover active, turnover passive.
    #[must_use]
    pub const fn from_amounts(account_code: AccountCode, amounts: [Decimal; 4]) -> Self {
        let [opening_active, opening_passive, turnover_active, turnover_passive] = amounts;
        Self {
            account_code,
            opening_active,
            opening_passive,
            turnover_active,
            turnover_passive,
        }
    }

    /// The four input amounts in document order.
    #[must_use]
    pub const fn amounts(&self) -> [Decimal; 4] {
        [
            self.opening_active,
            self.opening_passive,
            self.turnover_active,
            self.turnover_passive,
        ]
    }

    /// Closing balance derived from opening balance and turnover.
    #[must_use]
    pub fn closing(&self) -> ClosingBalance {
        derive_closing(
            self.opening_active,
            self.opening_passive,
            self.turnover_active,
            self.turnover_passive,
        )
    }

    /// All six report columns for this row, closing included.
    #[must_use]
    pub fn totals(&self) -> RowTotals {
        let closing = self.closing();
        RowTotals {
            opening_active: self.opening_active,
            opening_passive: self.opening_passive,
            turnover_active: self.turnover_active,
            turnover_passive: self.turnover_passive,
            closing_active: closing.active,
            closing_passive: closing.passive,
        }
    }
}

/// The six numeric report columns.
///
/// Used both for a single account and for any subtotal level. Sums are kept
/// at full precision; see [`RowTotals::round_dp`] for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTotals {
    /// Opening balance, active side.
    pub opening_active: Decimal,
    /// Opening balance, passive side.
    pub opening_passive: Decimal,
    /// Turnover, active side.
    pub turnover_active: Decimal,
    /// Turnover, passive side.
    pub turnover_passive: Decimal,
    /// Closing balance, active side.
    pub closing_active: Decimal,
    /// Closing balance, passive side.
    pub closing_passive: Decimal,
}

impl RowTotals {
    /// All-zero totals.
    pub const ZERO: Self = Self {
        opening_active: Decimal::ZERO,
        opening_passive: Decimal::ZERO,
        turnover_active: Decimal::ZERO,
        turnover_passive: Decimal::ZERO,
        closing_active: Decimal::ZERO,
        closing_passive: Decimal::ZERO,
    };

    /// Columns in report order.
    #[must_use]
    pub const fn columns(&self) -> [Decimal; 6] {
        [
            self.opening_active,
            self.opening_passive,
            self.turnover_active,
            self.turnover_passive,
            self.closing_active,
            self.closing_passive,
        ]
    }

    /// Copy with every column rounded to `scale` fractional digits
    /// (half-to-even).
    #[must_use]
    pub fn round_dp(&self, scale: u32) -> Self {
        Self {
            opening_active: self.opening_active.round_dp(scale),
            opening_passive: self.opening_passive.round_dp(scale),
            turnover_active: self.turnover_active.round_dp(scale),
            turnover_passive: self.turnover_passive.round_dp(scale),
            closing_active: self.closing_active.round_dp(scale),
            closing_passive: self.closing_passive.round_dp(scale),
        }
    }
}

impl AddAssign for RowTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.opening_active += rhs.opening_active;
        self.opening_passive += rhs.opening_passive;
        self.turnover_active += rhs.turnover_active;
        self.turnover_passive += rhs.turnover_passive;
        self.closing_active += rhs.closing_active;
        self.closing_passive += rhs.closing_passive;
    }
}

impl Add for RowTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for RowTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a RowTotals> for RowTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
