//! Survey export ingestion
//!
//! This module reads uploaded spreadsheet exports (xlsx/xls/xlsm/xlsb/csv)
//! fully into memory as a column-addressable response table.

pub mod loader;

// Re-export commonly used items
pub use loader::load_table;
