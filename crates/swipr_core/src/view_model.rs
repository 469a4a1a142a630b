use crate::{RecipeId, ShoppingItem};

/// Which screen the front end should be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenPhase {
    /// No planning run yet (pantry confirmation pending).
    #[default]
    Idle,
    Presenting,
    Gated,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanViewModel {
    pub phase: ScreenPhase,
    pub current_card: Option<RecipeCardView>,
    pub meals_planned: usize,
    pub items_to_buy: usize,
    pub money_saved_dollars: u32,
    /// Swipes left before the gate; `None` before a run starts.
    pub swipes_remaining: Option<u32>,
    /// Shopping list rows in first-seen order.
    pub shopping_items: Vec<ShoppingItem>,
    pub dirty: bool,
}

/// Everything the card layout needs for the recipe on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCardView {
    pub recipe_id: RecipeId,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub difficulty: String,
    pub cost: String,
    pub you_have: Vec<String>,
    pub you_need: Vec<String>,
    pub need_count: usize,
}
