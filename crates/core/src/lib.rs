//! Core ledger reporting logic for Tally.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `import` - Statement extraction from spreadsheets
//! - `ledger` - Ledger rows and closing balance derivation
//! - `reports` - Hierarchical report aggregation
//! - `store` - In-memory statement storage

pub mod import;
pub mod ledger;
pub mod reports;
pub mod store;
