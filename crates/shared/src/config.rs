//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::types::ClassId;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report labelling and display configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Spreadsheet layout configuration.
    #[serde(default)]
    pub sheet: SheetConfig,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Class id (as written in the config file) to class header label.
    #[serde(default)]
    pub class_labels: BTreeMap<String, String>,
    /// Label of the synthetic row closing each class.
    #[serde(default = "default_class_subtotal_label")]
    pub class_subtotal_label: String,
    /// Label of the synthetic row closing the whole table.
    #[serde(default = "default_grand_total_label")]
    pub grand_total_label: String,
    /// Fractional digits kept when amounts are rendered.
    #[serde(default = "default_display_scale")]
    pub display_scale: u32,
}

fn default_class_subtotal_label() -> String {
    "class total".to_string()
}

fn default_grand_total_label() -> String {
    "table total".to_string()
}

fn default_display_scale() -> u32 {
    2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            class_labels: BTreeMap::new(),
            class_subtotal_label: default_class_subtotal_label(),
            grand_total_label: default_grand_total_label(),
            display_scale: default_display_scale(),
        }
    }
}

/// A class label key that is not a class id.
#[derive(Debug, Error)]
#[error("Invalid class id in report.class_labels: {key:?}")]
pub struct LabelConfigError {
    /// The offending key.
    pub key: String,
}

impl ReportConfig {
    /// Returns the class labels keyed by numeric class id.
    pub fn class_labels_by_id(&self) -> Result<BTreeMap<ClassId, String>, LabelConfigError> {
        self.class_labels
            .iter()
            .map(|(key, label)| {
                key.trim()
                    .parse::<ClassId>()
                    .map(|id| (id, label.clone()))
                    .map_err(|_| LabelConfigError { key: key.clone() })
            })
            .collect()
    }
}

/// Zero-based position of a cell in a worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CellRef {
    /// Row index.
    pub row: u32,
    /// Column index.
    pub col: u32,
}

impl CellRef {
    /// Creates a cell reference.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// Where the statement data sits in the first worksheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Cell holding the source (bank) name.
    #[serde(default = "default_source_name_cell")]
    pub source_name_cell: CellRef,
    /// Cell holding the statement date.
    #[serde(default = "default_statement_date_cell")]
    pub statement_date_cell: CellRef,
    /// First row scanned for ledger rows.
    #[serde(default = "default_first_ledger_row")]
    pub first_ledger_row: u32,
}

fn default_source_name_cell() -> CellRef {
    CellRef::new(0, 0)
}

fn default_statement_date_cell() -> CellRef {
    CellRef::new(5, 0)
}

fn default_first_ledger_row() -> u32 {
    8
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            source_name_cell: default_source_name_cell(),
            statement_date_cell: default_statement_date_cell(),
            first_ledger_row: default_first_ledger_row(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
