pub type RecipeId = u32;

/// One recipe candidate as presented on a swipe card.
///
/// Ingredient matching against the pantry is pre-baked by the catalog:
/// `owned_ingredients` are already in the pantry, `needed_ingredients` must
/// be bought. The two lists are disjoint within one recipe; the catalog
/// loader enforces this at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub difficulty: String,
    pub cost: String,
    pub owned_ingredients: Vec<String>,
    pub needed_ingredients: Vec<String>,
}

impl Recipe {
    /// Number of ingredients still missing for this recipe.
    pub fn need_count(&self) -> usize {
        self.needed_ingredients.len()
    }
}

/// A pantry entry detected by the receipt-scan collaborator.
///
/// Quantity and expiration are display descriptors, not structured data;
/// the core only carries them through to rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryItem {
    pub name: String,
    pub quantity: String,
    pub expiration: String,
}
