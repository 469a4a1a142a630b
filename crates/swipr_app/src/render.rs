//! Pure view-model to text rendering for the terminal front end.

use swipr_core::{ItemCost, PantryItem, PlanSummary, PlanViewModel, RecipeCardView, ScreenPhase};

use crate::schedule::PlannedMeal;

const GATE_PROMPT: &str = "👑 You've reached your free swipe limit.\n\
    Upgrade to premium for unlimited meal planning!\n\
    [upgrade] start free 7-day trial   [free] continue with free plan";

pub fn pantry(items: &[PantryItem]) -> String {
    let mut out = format!("Pantry detected ({} items):\n", items.len());
    for item in items {
        out.push_str(&format!(
            "  {} - {} - {}\n",
            item.name, item.quantity, item.expiration
        ));
    }
    out.push_str("Looks right? Let's plan some meals.");
    out
}

/// Renders whichever screen the view model calls for.
pub fn screen(view: &PlanViewModel) -> String {
    let mut out = stats_header(view);
    match view.phase {
        ScreenPhase::Presenting => {
            if let Some(card) = &view.current_card {
                out.push('\n');
                out.push_str(&card_text(card));
            }
        }
        ScreenPhase::Gated => {
            out.push('\n');
            out.push_str(GATE_PROMPT);
        }
        ScreenPhase::Idle | ScreenPhase::Completed => {}
    }
    if !view.shopping_items.is_empty() {
        out.push('\n');
        out.push_str(&shopping_preview(view));
    }
    out
}

pub fn summary(summary: &PlanSummary, plan: &[PlannedMeal]) -> String {
    let mut out = String::from("Your week, planned!\n");
    out.push_str(&format!("  Meals planned: {}\n", summary.meals_planned));
    out.push_str(&format!("  Items to buy:  {}\n", summary.items_to_buy));
    out.push_str(&format!(
        "  Money saved:   ${} (estimate vs ordering out)\n",
        summary.money_saved_dollars
    ));

    if !summary.items.is_empty() {
        out.push_str("\nShopping list:\n");
        for item in &summary.items {
            let mark = if item.checked { 'x' } else { ' ' };
            let cost = match item.cost {
                ItemCost::Known(cents) => format_cents(cents),
                ItemCost::Unknown => "price unavailable".to_string(),
            };
            out.push_str(&format!("  [{mark}] {} - {cost}\n", item.name));
        }
        out.push_str(&format!(
            "  Known total: {}",
            format_cents(summary.known_total_cents)
        ));
        if summary.unknown_cost_count > 0 {
            out.push_str(&format!(
                " (+{} items without a price)",
                summary.unknown_cost_count
            ));
        }
        out.push('\n');
    }

    if !plan.is_empty() {
        out.push_str("\nMeal plan:\n");
        for meal in plan {
            out.push_str(&format!(
                "  {} {} - {} - {}\n",
                meal.emoji, meal.name, meal.time, meal.day
            ));
        }
    }
    out
}

pub fn help(unknown: &str) -> String {
    format!(
        "Unknown command {unknown:?}. Try: y/n (swipe), check <item>, upgrade, free, quit."
    )
}

fn stats_header(view: &PlanViewModel) -> String {
    let mut line = format!(
        "Meals Planned: {}  |  Items to Buy: {}  |  Money Saved: ${}",
        view.meals_planned, view.items_to_buy, view.money_saved_dollars
    );
    if let Some(remaining) = view.swipes_remaining {
        if view.phase == ScreenPhase::Presenting {
            line.push_str(&format!("  |  Free swipes left: {remaining}"));
        }
    }
    line
}

fn card_text(card: &RecipeCardView) -> String {
    let mut out = format!(
        "{} {}  ({}, {}, {})\n{}\n",
        card.emoji, card.title, card.time, card.difficulty, card.cost, card.description
    );
    out.push_str(&format!("You only need {} items! 🎉\n", card.need_count));
    out.push_str(&format!("  Already have: {}\n", card.you_have.join(", ")));
    out.push_str(&format!("  You need:     {}\n", card.you_need.join(", ")));
    out.push_str("Swipe: [y] like  [n] pass");
    out
}

fn shopping_preview(view: &PlanViewModel) -> String {
    let names: Vec<&str> = view
        .shopping_items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    format!(
        "🛒 Shopping list ({}): {}",
        names.len(),
        names.join(", ")
    )
}

fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
