use crate::{GateChoice, Recipe, SwipeOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Pantry confirmed; start a planning run over the candidate queue.
    PlanningStarted {
        queue: Vec<Recipe>,
        quota_limit: u32,
    },
    /// A drag gesture crossed its commit threshold, or an action button
    /// was tapped. The core only sees the resolved outcome, never the
    /// gesture stream.
    SwipeCommitted { outcome: SwipeOutcome },
    /// User answered the paywall prompt.
    GateResolved { choice: GateChoice },
    /// User ticked or unticked a shopping list row.
    ItemToggled { name: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
