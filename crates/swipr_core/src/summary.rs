use std::collections::{BTreeMap, HashMap};

use crate::{ShoppingList, SwipeSession};

/// Flat per-meal savings estimate shown in the stats header, in dollars.
///
/// This is the product mock's heuristic ("vs ordering out"), not derived
/// from the price table. Treat it as a placeholder, not a contract.
pub const SAVINGS_PER_MEAL_DOLLARS: u32 = 25;

/// Seam to whatever supplies ingredient prices (the engine's fixed table
/// in the prototype, plain maps in tests).
pub trait PriceLookup {
    fn price_cents(&self, name: &str) -> Option<u32>;
}

impl PriceLookup for HashMap<String, u32> {
    fn price_cents(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

impl PriceLookup for BTreeMap<String, u32> {
    fn price_cents(&self, name: &str) -> Option<u32> {
        self.get(name).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCost {
    Known(u32),
    /// No price on file. Surfaced as its own marker instead of defaulting
    /// to zero so the plan total is never silently understated.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedItem {
    pub name: String,
    pub checked: bool,
    pub cost: ItemCost,
}

/// Derived statistics for the summary screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub meals_planned: usize,
    /// Cardinality of the distinct ingredient set, never the raw sum of
    /// per-recipe needs.
    pub items_to_buy: usize,
    pub money_saved_dollars: u32,
    /// Shopping list rows in first-seen order, each with its cost marker.
    pub items: Vec<PricedItem>,
    /// Total over items with a known price, in cents.
    pub known_total_cents: u32,
    /// How many items have no price on file.
    pub unknown_cost_count: usize,
}

/// Folds the session and shopping list into [`PlanSummary`].
pub fn summarize(
    session: &SwipeSession,
    list: &ShoppingList,
    prices: &impl PriceLookup,
) -> PlanSummary {
    let mut items = Vec::with_capacity(list.len());
    let mut known_total_cents = 0u32;
    let mut unknown_cost_count = 0usize;
    for item in list.items() {
        let cost = match prices.price_cents(&item.name) {
            Some(cents) => {
                known_total_cents += cents;
                ItemCost::Known(cents)
            }
            None => {
                unknown_cost_count += 1;
                ItemCost::Unknown
            }
        };
        items.push(PricedItem {
            name: item.name.clone(),
            checked: item.checked,
            cost,
        });
    }

    let meals_planned = session.accepted().len();
    PlanSummary {
        meals_planned,
        items_to_buy: list.len(),
        money_saved_dollars: SAVINGS_PER_MEAL_DOLLARS * meals_planned as u32,
        items,
        known_total_cents,
        unknown_cost_count,
    }
}
