use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use swipr_core::{PantryItem, Recipe, RecipeId};

const RECIPES_JSON: &str = include_str!("../assets/recipes.json");
const PANTRY_JSON: &str = include_str!("../assets/pantry.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate recipe id {0}")]
    DuplicateId(RecipeId),
    #[error("recipe {id} has an empty title")]
    EmptyTitle { id: RecipeId },
    #[error("recipe {id} lists {name:?} as both owned and needed")]
    OverlappingIngredient { id: RecipeId, name: String },
}

#[derive(Debug, Deserialize)]
struct RecipeRecord {
    id: RecipeId,
    emoji: String,
    title: String,
    description: String,
    time: String,
    difficulty: String,
    cost: String,
    you_have: Vec<String>,
    you_need: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PantryRecord {
    name: String,
    quantity: String,
    expiration: String,
}

/// Loads the built-in recipe catalog.
pub fn load_recipes() -> Result<Vec<Recipe>, CatalogError> {
    parse_recipes(RECIPES_JSON)
}

/// Loads the built-in pantry fixture handed to the scan simulation.
pub fn load_pantry() -> Result<Vec<PantryItem>, CatalogError> {
    parse_pantry(PANTRY_JSON)
}

/// Parses and validates a recipe catalog from JSON.
///
/// Validation enforces the core's data-model invariants at the boundary:
/// unique ids, non-empty titles, and owned/needed ingredient lists that
/// are disjoint within each recipe.
pub fn parse_recipes(json: &str) -> Result<Vec<Recipe>, CatalogError> {
    let records: Vec<RecipeRecord> = serde_json::from_str(json)?;

    let mut seen_ids = HashSet::new();
    let mut recipes = Vec::with_capacity(records.len());
    for record in records {
        if !seen_ids.insert(record.id) {
            return Err(CatalogError::DuplicateId(record.id));
        }
        if record.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle { id: record.id });
        }
        if let Some(name) = record
            .you_need
            .iter()
            .find(|name| record.you_have.contains(name))
        {
            return Err(CatalogError::OverlappingIngredient {
                id: record.id,
                name: name.clone(),
            });
        }
        recipes.push(Recipe {
            id: record.id,
            emoji: record.emoji,
            title: record.title,
            description: record.description,
            time: record.time,
            difficulty: record.difficulty,
            cost: record.cost,
            owned_ingredients: record.you_have,
            needed_ingredients: record.you_need,
        });
    }
    Ok(recipes)
}

/// Parses a pantry fixture from JSON.
pub fn parse_pantry(json: &str) -> Result<Vec<PantryItem>, CatalogError> {
    let records: Vec<PantryRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(|record| PantryItem {
            name: record.name,
            quantity: record.quantity,
            expiration: record.expiration,
        })
        .collect())
}
