use std::sync::Once;

use swipr_core::{
    update, Effect, GateChoice, Msg, PlanState, Recipe, ScreenPhase, SwipeOutcome,
    DEFAULT_QUOTA_LIMIT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(swipr_logging::initialize_for_tests);
}

fn recipe(id: u32, title: &str, needed: &[&str]) -> Recipe {
    Recipe {
        id,
        emoji: "🍽".to_string(),
        title: title.to_string(),
        description: String::new(),
        time: "20 min".to_string(),
        difficulty: "Easy".to_string(),
        cost: "$10".to_string(),
        owned_ingredients: Vec::new(),
        needed_ingredients: needed.iter().map(|s| s.to_string()).collect(),
    }
}

fn start_planning(queue: Vec<Recipe>) -> (PlanState, Vec<Effect>) {
    update(
        PlanState::new(),
        Msg::PlanningStarted {
            queue,
            quota_limit: DEFAULT_QUOTA_LIMIT,
        },
    )
}

fn swipe(state: PlanState, outcome: SwipeOutcome) -> (PlanState, Vec<Effect>) {
    update(state, Msg::SwipeCommitted { outcome })
}

fn three_recipes() -> Vec<Recipe> {
    vec![
        recipe(1, "Honey Garlic Chicken", &["Honey", "Soy Sauce"]),
        recipe(2, "Veggie Fried Rice", &["Eggs", "Soy Sauce"]),
        recipe(3, "Mediterranean Bowl", &["Quinoa"]),
    ]
}

#[test]
fn planning_start_presents_the_first_card() {
    init_logging();
    let (mut state, effects) = start_planning(three_recipes());
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.phase, ScreenPhase::Presenting);
    assert_eq!(view.current_card.as_ref().unwrap().title, "Honey Garlic Chicken");
    assert_eq!(view.swipes_remaining, Some(3));
    assert!(state.consume_dirty());
}

#[test]
fn accepting_a_card_feeds_the_shopping_list() {
    init_logging();
    let (state, _) = start_planning(three_recipes());

    let (mut state, effects) = swipe(state, SwipeOutcome::Accept);
    assert_eq!(
        effects,
        vec![Effect::CardDismissed {
            recipe_id: 1,
            outcome: SwipeOutcome::Accept,
        }]
    );

    let view = state.view();
    assert_eq!(view.meals_planned, 1);
    assert_eq!(view.items_to_buy, 2);
    assert_eq!(view.money_saved_dollars, 25);
    assert_eq!(view.current_card.as_ref().unwrap().recipe_id, 2);
    assert!(state.consume_dirty());
}

#[test]
fn rejecting_a_card_advances_without_adding_items() {
    init_logging();
    let (state, _) = start_planning(three_recipes());

    let (mut state, effects) = swipe(state, SwipeOutcome::Reject);
    assert_eq!(
        effects,
        vec![Effect::CardDismissed {
            recipe_id: 1,
            outcome: SwipeOutcome::Reject,
        }]
    );
    let view = state.view();
    assert_eq!(view.meals_planned, 0);
    assert_eq!(view.items_to_buy, 0);
    assert!(state.consume_dirty());
}

#[test]
fn third_swipe_raises_the_gate() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (state, _) = swipe(state, SwipeOutcome::Accept);
    let (state, _) = swipe(state, SwipeOutcome::Accept);
    let (mut state, effects) = swipe(state, SwipeOutcome::Reject);

    assert_eq!(
        effects,
        vec![
            Effect::CardDismissed {
                recipe_id: 3,
                outcome: SwipeOutcome::Reject,
            },
            Effect::GateRaised,
        ]
    );
    let view = state.view();
    assert_eq!(view.phase, ScreenPhase::Gated);
    assert_eq!(view.meals_planned, 2);
    assert!(view.current_card.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn swipes_after_the_gate_are_dropped_unchanged() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (state, _) = swipe(state, SwipeOutcome::Reject);
    let (state, _) = swipe(state, SwipeOutcome::Reject);
    let (mut state, _) = swipe(state, SwipeOutcome::Reject);
    assert!(state.consume_dirty());
    let before = state.clone();

    // A double-fired gesture arriving after the gate raised.
    let (mut state, effects) = swipe(state, SwipeOutcome::Accept);
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn continue_free_advances_to_summary() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (state, _) = swipe(state, SwipeOutcome::Accept);
    let (state, _) = swipe(state, SwipeOutcome::Accept);
    let (state, _) = swipe(state, SwipeOutcome::Reject);

    let (mut state, effects) = update(
        state,
        Msg::GateResolved {
            choice: GateChoice::ContinueFree,
        },
    );
    assert_eq!(effects, vec![Effect::AdvanceToSummary]);
    assert_eq!(state.view().phase, ScreenPhase::Completed);
    assert!(state.consume_dirty());
}

#[test]
fn upgrade_requests_billing_then_advances() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (state, _) = swipe(state, SwipeOutcome::Reject);
    let (state, _) = swipe(state, SwipeOutcome::Reject);
    let (state, _) = swipe(state, SwipeOutcome::Reject);

    let (state, effects) = update(
        state,
        Msg::GateResolved {
            choice: GateChoice::Upgrade,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::UpgradeRequested, Effect::AdvanceToSummary]
    );
    assert_eq!(state.view().phase, ScreenPhase::Completed);
}

#[test]
fn gate_choice_outside_gated_is_dropped() {
    init_logging();
    let (mut state, _) = start_planning(three_recipes());
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(
        state,
        Msg::GateResolved {
            choice: GateChoice::ContinueFree,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn empty_catalog_routes_straight_to_summary() {
    init_logging();
    let (mut state, effects) = start_planning(Vec::new());

    assert_eq!(effects, vec![Effect::AdvanceToSummary]);
    let view = state.view();
    assert_eq!(view.phase, ScreenPhase::Completed);
    assert_eq!(view.meals_planned, 0);
    assert_eq!(view.items_to_buy, 0);
    assert!(state.consume_dirty());
}

#[test]
fn shared_ingredients_are_counted_once_across_accepts() {
    init_logging();
    let (state, _) = start_planning(vec![
        recipe(1, "A", &["Honey", "Soy Sauce"]),
        recipe(2, "B", &["Eggs", "Soy Sauce"]),
        recipe(3, "C", &["Quinoa"]),
    ]);
    let (state, _) = swipe(state, SwipeOutcome::Accept);
    let (state, _) = swipe(state, SwipeOutcome::Accept);

    let view = state.view();
    assert_eq!(view.items_to_buy, 3);
    let names: Vec<_> = view
        .shopping_items
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Honey", "Soy Sauce", "Eggs"]);
}

#[test]
fn toggling_a_listed_item_marks_it_checked() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (mut state, _) = swipe(state, SwipeOutcome::Accept);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::ItemToggled {
            name: "Honey".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert!(state.view().shopping_items[0].checked);
}

#[test]
fn toggling_an_unknown_item_is_dropped() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (mut state, _) = swipe(state, SwipeOutcome::Accept);
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(
        state,
        Msg::ItemToggled {
            name: "Caviar".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());
}

#[test]
fn planning_start_is_ignored_while_a_run_is_active() {
    init_logging();
    let (state, _) = start_planning(three_recipes());
    let (mut state, _) = swipe(state, SwipeOutcome::Accept);
    assert!(state.consume_dirty());
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::PlanningStarted {
            queue: vec![recipe(9, "Z", &[])],
            quota_limit: DEFAULT_QUOTA_LIMIT,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
