//! Swipr engine: the collaborators outside the pure core — the static
//! recipe catalog, the pantry fixture, the price table, and the simulated
//! receipt scanner.
mod catalog;
mod pricing;
mod scan;

pub use catalog::{load_pantry, load_recipes, parse_pantry, parse_recipes, CatalogError};
pub use pricing::PriceTable;
pub use scan::{ScanEvent, ScanHandle, DEFAULT_SCAN_DELAY};
