//! Shared types and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Account codes and the class/group hierarchy derived from them
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, CellRef, LabelConfigError, ReportConfig, SheetConfig};
pub use types::{AccountCode, ClassId, GroupId};
