use crate::{RecipeId, SwipeOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Animate the decided card off screen.
    CardDismissed {
        recipe_id: RecipeId,
        outcome: SwipeOutcome,
    },
    /// Show the paywall overlay.
    GateRaised,
    /// Hand off to the billing collaborator (a stub in the prototype).
    UpgradeRequested,
    /// Terminal signal: navigate to the summary screen.
    AdvanceToSummary,
}
