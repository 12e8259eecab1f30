//! Report data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_shared::{AccountCode, ClassId, GroupId, LabelConfigError, ReportConfig};

use super::error::ReportError;
use crate::ledger::{RowTotals, StatementHeader};

/// Labels used for header and synthetic rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLabels {
    /// Class id to class header label.
    pub class_labels: BTreeMap<ClassId, String>,
    /// Label of class subtotal rows.
    pub class_subtotal_label: String,
    /// Label of the grand total row.
    pub grand_total_label: String,
}

impl ReportLabels {
    /// Creates labels with the given class captions and synthetic row labels.
    #[must_use]
    pub fn new(
        class_labels: BTreeMap<ClassId, String>,
        class_subtotal_label: impl Into<String>,
        grand_total_label: impl Into<String>,
    ) -> Self {
        Self {
            class_labels,
            class_subtotal_label: class_subtotal_label.into(),
            grand_total_label: grand_total_label.into(),
        }
    }

    /// Builds labels from the report configuration.
    pub fn from_config(config: &ReportConfig) -> Result<Self, LabelConfigError> {
        Ok(Self::new(
            config.class_labels_by_id()?,
            config.class_subtotal_label.clone(),
            config.grand_total_label.clone(),
        ))
    }

    /// Looks up the header label of a class.
    pub fn class_label(&self, class_id: ClassId) -> Result<&str, ReportError> {
        self.class_labels
            .get(&class_id)
            .map(String::as_str)
            .ok_or(ReportError::ClassLabelNotFound(class_id))
    }
}

/// A single account line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRow {
    /// Account code.
    pub account_code: AccountCode,
    /// Opening, turnover and closing amounts.
    #[serde(flatten)]
    pub totals: RowTotals,
}

/// One row of the hierarchical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportRow {
    /// Introduces a class.
    ClassHeader {
        /// Class id.
        class_id: ClassId,
        /// Configured class label.
        label: String,
    },
    /// One account.
    Leaf(LeafRow),
    /// Closes a group: sums the accounts of the group.
    GroupSubtotal {
        /// Group id.
        group_id: GroupId,
        /// Column sums.
        #[serde(flatten)]
        totals: RowTotals,
    },
    /// Closes a class: sums the group subtotals of the class.
    ClassSubtotal {
        /// Class id.
        class_id: ClassId,
        /// Configured class subtotal label.
        label: String,
        /// Column sums.
        #[serde(flatten)]
        totals: RowTotals,
    },
    /// Closes the table: sums the class subtotals.
    GrandTotal {
        /// Configured grand total label.
        label: String,
        /// Column sums.
        #[serde(flatten)]
        totals: RowTotals,
    },
}

impl ReportRow {
    /// Numeric columns of the row, `None` for class headers.
    #[must_use]
    pub const fn totals(&self) -> Option<&RowTotals> {
        match self {
            Self::ClassHeader { .. } => None,
            Self::Leaf(leaf) => Some(&leaf.totals),
            Self::GroupSubtotal { totals, .. }
            | Self::ClassSubtotal { totals, .. }
            | Self::GrandTotal { totals, .. } => Some(totals),
        }
    }

    /// Copy with numeric columns rounded for display.
    #[must_use]
    pub fn rounded(&self, scale: u32) -> Self {
        match self {
            Self::ClassHeader { .. } => self.clone(),
            Self::Leaf(leaf) => Self::Leaf(LeafRow {
                account_code: leaf.account_code,
                totals: leaf.totals.round_dp(scale),
            }),
            Self::GroupSubtotal { group_id, totals } => Self::GroupSubtotal {
                group_id: *group_id,
                totals: totals.round_dp(scale),
            },
            Self::ClassSubtotal {
                class_id,
                label,
                totals,
            } => Self::ClassSubtotal {
                class_id: *class_id,
                label: label.clone(),
                totals: totals.round_dp(scale),
            },
            Self::GrandTotal { label, totals } => Self::GrandTotal {
                label: label.clone(),
                totals: totals.round_dp(scale),
            },
        }
    }
}

/// A finished report for one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerReport {
    /// The statement reported on.
    pub header: StatementHeader,
    /// Report rows in display order, ending with the grand total.
    pub rows: Vec<ReportRow>,
}

impl LedgerReport {
    /// The grand total row's sums.
    #[must_use]
    pub fn grand_total(&self) -> Option<&RowTotals> {
        match self.rows.last() {
            Some(ReportRow::GrandTotal { totals, .. }) => Some(totals),
            _ => None,
        }
    }

    /// Number of account rows.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, ReportRow::Leaf(_)))
            .count()
    }

    /// Copy with every numeric column rounded to `scale` fractional digits.
    ///
    /// The report itself keeps full precision.
    #[must_use]
    pub fn rounded(&self, scale: u32) -> Self {
        Self {
            header: self.header.clone(),
            rows: self.rows.iter().map(|row| row.rounded(scale)).collect(),
        }
    }
}
