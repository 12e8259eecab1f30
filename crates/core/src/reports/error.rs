//! Report error types.

use tally_shared::ClassId;
use thiserror::Error;

use crate::import::ImportError;
use crate::ledger::StatementHeader;

/// Errors that can occur during report generation.
///
/// Every variant is terminal: no partial report is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The source document does not have the expected tabular shape.
    #[error("Malformed document: {0}")]
    MalformedDocument(#[from] ImportError),

    /// An account maps to a class with no configured label.
    #[error("No label configured for account class {0}")]
    ClassLabelNotFound(ClassId),

    /// The ledger has no rows to report on.
    #[error("Ledger contains no rows")]
    EmptyLedger,

    /// No statement is stored under the requested key.
    #[error("Statement not found: {0}")]
    StatementNotFound(StatementHeader),
}
