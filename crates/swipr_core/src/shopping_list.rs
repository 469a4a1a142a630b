use std::collections::HashSet;

use thiserror::Error;

use crate::Recipe;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    #[error("unknown shopping list item: {0}")]
    UnknownItem(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    /// User tick mark on the summary screen. Purely cosmetic: it never
    /// removes the item or changes any total.
    pub checked: bool,
}

/// Deduplicated union of needed ingredients across accepted recipes.
///
/// Membership is a set (re-adding a recipe changes nothing), while display
/// order is the first-seen insertion order. The `HashSet` index keeps
/// membership checks O(1); the `Vec` keeps the order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    index: HashSet<String>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a recipe's needed ingredients into the list. Idempotent per
    /// ingredient: names already listed are skipped.
    pub fn add_recipe(&mut self, recipe: &Recipe) {
        for name in &recipe.needed_ingredients {
            if self.index.insert(name.clone()) {
                self.items.push(ShoppingItem {
                    name: name.clone(),
                    checked: false,
                });
            }
        }
    }

    /// Flips the checked mark on `name` and returns the new value.
    /// Unknown names are rejected with the list unchanged.
    pub fn toggle_checked(&mut self, name: &str) -> Result<bool, ShoppingListError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.name == name)
            .ok_or_else(|| ShoppingListError::UnknownItem(name.to_string()))?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Count of distinct ingredients, i.e. the "items to buy" stat.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in first-seen order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }
}
