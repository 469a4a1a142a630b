use swipr_core::PlanSummary;

/// Builds the "Share My Week" message from the summary screen.
pub fn share_text(summary: &PlanSummary) -> String {
    format!(
        "🎉 Week Planned with Swipr!\n\n\
         📋 {} meals planned\n\
         🛒 {} items to buy\n\
         💰 ${} saved vs ordering out\n\n\
         Check out Swipr - the AI meal planner that helps you stop buying food you already have!",
        summary.meals_planned, summary.items_to_buy, summary.money_saved_dollars
    )
}
