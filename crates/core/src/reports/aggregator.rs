//! Streaming hierarchical aggregation.
//!
//! Walks a ledger sorted by account code exactly once and interleaves the
//! account rows with class headers, group subtotals, class subtotals and a
//! final grand total:
//!
//! ```text
//! ClassHeader(1)
//!   Leaf(1001)
//!   Leaf(1002)
//!   GroupSubtotal(10)
//! ClassSubtotal(1)
//! ClassHeader(2)
//!   Leaf(2001)
//!   GroupSubtotal(20)
//! ClassSubtotal(2)
//! GrandTotal
//! ```
//!
//! Group subtotals sum their accounts, class subtotals sum their group
//! subtotals and the grand total sums the class subtotals.

use tally_shared::{AccountCode, ClassId, GroupId};
use tracing::{debug, warn};

use super::error::ReportError;
use super::types::{LeafRow, ReportLabels, ReportRow};
use crate::ledger::{LedgerRow, RowTotals};

/// Single-pass aggregation state for one report.
///
/// Each report owns its aggregator; nothing is shared between runs.
#[derive(Debug)]
pub struct HierarchyAggregator<'a> {
    labels: &'a ReportLabels,
    table: Vec<ReportRow>,
    /// Group subtotals emitted in the current class.
    group_totals: Vec<RowTotals>,
    /// Class subtotals emitted so far.
    class_totals: Vec<RowTotals>,
    /// Running sum of the accounts since the last group subtotal.
    open_group: RowTotals,
    rows_since_group_subtotal: usize,
    previous: Option<AccountCode>,
    /// Class whose label lookup failed. Once set, the table is incomplete
    /// and every later call reports the same error.
    failed: Option<ClassId>,
}

impl<'a> HierarchyAggregator<'a> {
    /// Creates an empty aggregator.
    #[must_use]
    pub const fn new(labels: &'a ReportLabels) -> Self {
        Self {
            labels,
            table: Vec::new(),
            group_totals: Vec::new(),
            class_totals: Vec::new(),
            open_group: RowTotals::ZERO,
            rows_since_group_subtotal: 0,
            previous: None,
            failed: None,
        }
    }

    /// Feeds the next ledger row.
    ///
    /// Rows must arrive in ascending account code order. Out-of-order or
    /// non-four-digit codes are logged and processed where they stand.
    ///
    /// A missing class label is terminal: after it, `push` and `finish`
    /// keep returning [`ReportError::ClassLabelNotFound`].
    pub fn push(&mut self, row: &LedgerRow) -> Result<(), ReportError> {
        self.check_failed()?;
        let code = row.account_code;
        if !code.is_conventional() {
            warn!(account_code = %code, "Account code outside the four-digit convention");
        }

        match self.previous {
            None => self.open_class(code.class_id())?,
            Some(previous) => {
                if code < previous {
                    warn!(
                        account_code = %code,
                        previous = %previous,
                        "Ledger is not sorted by account code"
                    );
                }
                // A class change always implies a group change, so the class
                // boundary is only checked once a group has been closed.
                if previous.group_id() != code.group_id() && self.rows_since_group_subtotal > 0 {
                    self.close_group(previous.group_id());
                    if previous.class_id() != code.class_id() {
                        self.close_class(previous.class_id());
                        self.open_class(code.class_id())?;
                    }
                }
            }
        }

        let totals = row.totals();
        self.open_group += totals;
        self.rows_since_group_subtotal += 1;
        self.table.push(ReportRow::Leaf(LeafRow {
            account_code: code,
            totals,
        }));
        self.previous = Some(code);
        Ok(())
    }

    /// Closes the last group and class and appends the grand total.
    pub fn finish(mut self) -> Result<Vec<ReportRow>, ReportError> {
        self.check_failed()?;
        let last = self.previous.ok_or(ReportError::EmptyLedger)?;

        self.close_group(last.group_id());
        self.close_class(last.class_id());

        let totals: RowTotals = self.class_totals.iter().sum();
        self.table.push(ReportRow::GrandTotal {
            label: self.labels.grand_total_label.clone(),
            totals,
        });
        debug!(
            rows = self.table.len(),
            classes = self.class_totals.len(),
            "Report aggregated"
        );
        Ok(self.table)
    }

    fn check_failed(&self) -> Result<(), ReportError> {
        match self.failed {
            Some(class_id) => Err(ReportError::ClassLabelNotFound(class_id)),
            None => Ok(()),
        }
    }

    fn open_class(&mut self, class_id: ClassId) -> Result<(), ReportError> {
        let label = match self.labels.class_label(class_id) {
            Ok(label) => label.to_string(),
            Err(err) => {
                self.failed = Some(class_id);
                return Err(err);
            }
        };
        self.table.push(ReportRow::ClassHeader { class_id, label });
        Ok(())
    }

    fn close_group(&mut self, group_id: GroupId) {
        let totals = std::mem::take(&mut self.open_group);
        debug!(group_id, rows = self.rows_since_group_subtotal, "Group closed");
        self.group_totals.push(totals);
        self.table.push(ReportRow::GroupSubtotal { group_id, totals });
        self.rows_since_group_subtotal = 0;
    }

    fn close_class(&mut self, class_id: ClassId) {
        if self.group_totals.is_empty() {
            return;
        }
        let totals: RowTotals = self.group_totals.drain(..).sum();
        debug!(class_id, "Class closed");
        self.class_totals.push(totals);
        self.table.push(ReportRow::ClassSubtotal {
            class_id,
            label: self.labels.class_subtotal_label.clone(),
            totals,
        });
    }
}

/// Aggregates a sorted ledger into report rows.
pub fn aggregate<'r, I>(rows: I, labels: &ReportLabels) -> Result<Vec<ReportRow>, ReportError>
where
    I: IntoIterator<Item = &'r LedgerRow>,
{
    let mut aggregator = HierarchyAggregator::new(labels);
    for row in rows {
        aggregator.push(row)?;
    }
    aggregator.finish()
}
