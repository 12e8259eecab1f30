//! In-memory statement storage.
//!
//! Keeps at most one ledger per `(source_name, statement_date)`: importing
//! a statement whose header is already stored replaces the earlier import.
//! Thread-safe, so separate callers may build reports concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use crate::import::ExtractedStatement;
use crate::ledger::{LedgerRow, StatementHeader};
use crate::reports::ReportError;

/// Supplies the ledger of a statement, sorted ascending by account code.
pub trait LedgerSource {
    /// Returns the rows of the statement identified by `statement`.
    fn ledger_rows(&self, statement: &StatementHeader) -> Result<Vec<LedgerRow>, ReportError>;
}

/// Result of importing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Key the statement is stored under.
    pub statement: StatementHeader,
    /// Number of ledger rows stored.
    pub rows: usize,
    /// Whether an earlier import with the same key was replaced.
    pub replaced: bool,
}

/// Statement store backed by a concurrent map.
#[derive(Debug, Clone, Default)]
pub struct StatementStore {
    statements: Arc<DashMap<StatementHeader, Arc<[LedgerRow]>>>,
}

impl StatementStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports an extracted statement.
    pub fn import(&self, statement: ExtractedStatement) -> ImportOutcome {
        let (header, rows) = statement.into_parts();
        self.insert(header, rows)
    }

    /// Stores `rows` under `header`, replacing any earlier ledger for the
    /// same header. Rows are kept sorted by account code.
    pub fn insert(&self, header: StatementHeader, mut rows: Vec<LedgerRow>) -> ImportOutcome {
        rows.sort_by_key(|row| row.account_code);
        let count = rows.len();
        let replaced = self
            .statements
            .insert(header.clone(), Arc::from(rows))
            .is_some();

        info!(
            statement = %header,
            rows = count,
            replaced,
            "Statement imported"
        );

        ImportOutcome {
            statement: header,
            rows: count,
            replaced,
        }
    }

    /// Removes a statement. Returns whether it was stored.
    pub fn remove(&self, statement: &StatementHeader) -> bool {
        self.statements.remove(statement).is_some()
    }

    /// Stored statements ordered by date, then source name.
    #[must_use]
    pub fn list(&self) -> Vec<StatementHeader> {
        let mut headers: Vec<StatementHeader> =
            self.statements.iter().map(|entry| entry.key().clone()).collect();
        headers.sort_by(|a, b| {
            a.statement_date
                .cmp(&b.statement_date)
                .then_with(|| a.source_name.cmp(&b.source_name))
        });
        headers
    }

    /// Number of stored statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the store holds no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl LedgerSource for StatementStore {
    fn ledger_rows(&self, statement: &StatementHeader) -> Result<Vec<LedgerRow>, ReportError> {
        // Shard lock is held only while cloning the Arc.
        let rows = self
            .statements
            .get(statement)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| ReportError::StatementNotFound(statement.clone()))?;
        Ok(rows.to_vec())
    }
}
