//! Hierarchical ledger report generation.
//!
//! This module turns a sorted ledger into a single table of account rows
//! interleaved with class headers, group and class subtotals, and a grand
//! total. Amounts are summed at full precision; rounding is a display
//! concern (see [`LedgerReport::rounded`]).

pub mod aggregator;
pub mod error;
pub mod service;
pub mod types;


pub use aggregator::{HierarchyAggregator, aggregate};
pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
