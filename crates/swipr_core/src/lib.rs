//! Swipr core: pure swipe-session state machine and shopping-list aggregation.
mod effect;
mod msg;
mod session;
mod shopping_list;
mod state;
mod summary;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use session::{
    Decision, GateChoice, SessionError, SessionPhase, SwipeOutcome, SwipeSession,
    DEFAULT_QUOTA_LIMIT,
};
pub use shopping_list::{ShoppingItem, ShoppingList, ShoppingListError};
pub use state::PlanState;
pub use summary::{
    summarize, ItemCost, PlanSummary, PriceLookup, PricedItem, SAVINGS_PER_MEAL_DOLLARS,
};
pub use types::{PantryItem, Recipe, RecipeId};
pub use update::update;
pub use view_model::{PlanViewModel, RecipeCardView, ScreenPhase};
