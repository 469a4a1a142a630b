use std::collections::BTreeMap;

use swipr_core::PriceLookup;

use crate::CatalogError;

const PRICES_JSON: &str = include_str!("../assets/prices.json");

/// Fixed per-ingredient price table, in integer cents.
///
/// The prototype has no pricing backend; this is the lookup the summary
/// screen uses. Names absent from the table surface downstream as
/// unknown-cost items rather than free ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceTable {
    prices: BTreeMap<String, u32>,
}

impl PriceTable {
    /// Loads the built-in table.
    pub fn builtin() -> Result<Self, CatalogError> {
        let prices = serde_json::from_str(PRICES_JSON)?;
        Ok(Self { prices })
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, u32)>) -> Self {
        Self {
            prices: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceLookup for PriceTable {
    fn price_cents(&self, name: &str) -> Option<u32> {
        self.prices.get(name).copied()
    }
}
