//! Report generation service.

use tracing::info;

use super::aggregator::aggregate;
use super::error::ReportError;
use super::types::{LedgerReport, ReportLabels};
use crate::import::ExtractedStatement;
use crate::ledger::{LedgerRow, StatementHeader};
use crate::store::LedgerSource;

/// Service for generating hierarchical ledger reports.
pub struct ReportService;

impl ReportService {
    /// Generates the report for a stored statement.
    ///
    /// The source must return rows sorted by account code.
    pub fn generate<S>(
        source: &S,
        statement: &StatementHeader,
        labels: &ReportLabels,
    ) -> Result<LedgerReport, ReportError>
    where
        S: LedgerSource + ?Sized,
    {
        let rows = source.ledger_rows(statement)?;
        Self::from_rows(statement.clone(), &rows, labels)
    }

    /// Generates the report straight from an extracted statement, consuming
    /// its account ids and row data in lockstep.
    pub fn from_statement(
        statement: &ExtractedStatement,
        labels: &ReportLabels,
    ) -> Result<LedgerReport, ReportError> {
        let rows: Vec<LedgerRow> = statement
            .account_ids()
            .zip(statement.row_data())
            .map(|(code, amounts)| LedgerRow::from_amounts(code, amounts))
            .collect();
        Self::from_rows(statement.header().clone(), &rows, labels)
    }

    /// Generates a report from rows already sorted by account code.
    pub fn from_rows(
        header: StatementHeader,
        rows: &[LedgerRow],
        labels: &ReportLabels,
    ) -> Result<LedgerReport, ReportError> {
        let rows = aggregate(rows, labels)?;
        let report = LedgerReport { header, rows };
        info!(
            statement = %report.header,
            accounts = report.leaf_count(),
            rows = report.rows.len(),
            "Report generated"
        );
        Ok(report)
    }
}
