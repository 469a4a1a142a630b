use crate::view_model::{PlanViewModel, RecipeCardView, ScreenPhase};
use crate::{Recipe, SessionPhase, ShoppingList, SwipeSession};

/// Top-level application state: the current planning run plus the shopping
/// list it feeds. The dirty flag coalesces rendering in the front end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanState {
    session: Option<SwipeSession>,
    shopping_list: ShoppingList,
    dirty: bool,
}

impl PlanState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&SwipeSession> {
        self.session.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    /// Begins a fresh planning run, discarding any previous terminal
    /// session and its shopping list.
    pub(crate) fn start_session(&mut self, queue: Vec<Recipe>, quota_limit: u32) {
        self.session = Some(SwipeSession::new(queue, quota_limit));
        self.shopping_list = ShoppingList::new();
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut SwipeSession> {
        self.session.as_mut()
    }

    pub(crate) fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        &mut self.shopping_list
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> PlanViewModel {
        let phase = match self.session.as_ref().map(SwipeSession::phase) {
            None => ScreenPhase::Idle,
            Some(SessionPhase::Presenting) => ScreenPhase::Presenting,
            Some(SessionPhase::Gated) => ScreenPhase::Gated,
            Some(SessionPhase::Completed) => ScreenPhase::Completed,
        };
        let current_card = self
            .session
            .as_ref()
            .and_then(SwipeSession::current_recipe)
            .map(card_view);
        let meals_planned = self
            .session
            .as_ref()
            .map_or(0, |session| session.accepted().len());
        let swipes_remaining = self.session.as_ref().map(SwipeSession::swipes_remaining);

        PlanViewModel {
            phase,
            current_card,
            meals_planned,
            items_to_buy: self.shopping_list.len(),
            money_saved_dollars: crate::SAVINGS_PER_MEAL_DOLLARS * meals_planned as u32,
            swipes_remaining,
            shopping_items: self.shopping_list.items().to_vec(),
            dirty: self.dirty,
        }
    }
}

fn card_view(recipe: &Recipe) -> RecipeCardView {
    RecipeCardView {
        recipe_id: recipe.id,
        emoji: recipe.emoji.clone(),
        title: recipe.title.clone(),
        description: recipe.description.clone(),
        time: recipe.time.clone(),
        difficulty: recipe.difficulty.clone(),
        cost: recipe.cost.clone(),
        you_have: recipe.owned_ingredients.clone(),
        you_need: recipe.needed_ingredients.clone(),
        need_count: recipe.need_count(),
    }
}
