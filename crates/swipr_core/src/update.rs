use log::warn;

use crate::{Effect, GateChoice, Msg, PlanState, SessionPhase};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages are applied one at a time, so counters change exactly once per
/// logical decision. A message that arrives in the wrong phase (e.g. a
/// swipe double-fired by the animation layer after the session gated) is
/// logged and dropped with the state unchanged.
pub fn update(mut state: PlanState, msg: Msg) -> (PlanState, Vec<Effect>) {
    let effects = match msg {
        Msg::PlanningStarted { queue, quota_limit } => {
            if matches!(
                state.session().map(|s| s.phase()),
                Some(SessionPhase::Presenting) | Some(SessionPhase::Gated)
            ) {
                warn!("ignoring planning start: a run is already active");
                return (state, Vec::new());
            }
            state.start_session(queue, quota_limit);
            state.mark_dirty();
            // An empty catalog completes at creation; route straight to
            // the (empty) summary.
            match state.session().map(|s| s.phase()) {
                Some(SessionPhase::Completed) => vec![Effect::AdvanceToSummary],
                _ => Vec::new(),
            }
        }
        Msg::SwipeCommitted { outcome } => {
            let Some(session) = state.session_mut() else {
                warn!("ignoring swipe: no active session");
                return (state, Vec::new());
            };
            let decision = match session.decide(outcome) {
                Ok(decision) => decision,
                Err(err) => {
                    warn!("ignoring swipe: {err}");
                    return (state, Vec::new());
                }
            };
            if decision.outcome == crate::SwipeOutcome::Accept {
                state.shopping_list_mut().add_recipe(&decision.recipe);
            }
            state.mark_dirty();

            let mut effects = vec![Effect::CardDismissed {
                recipe_id: decision.recipe.id,
                outcome: decision.outcome,
            }];
            match decision.phase {
                SessionPhase::Gated => effects.push(Effect::GateRaised),
                SessionPhase::Completed => effects.push(Effect::AdvanceToSummary),
                SessionPhase::Presenting => {}
            }
            effects
        }
        Msg::GateResolved { choice } => {
            let Some(session) = state.session_mut() else {
                warn!("ignoring gate choice: no active session");
                return (state, Vec::new());
            };
            if let Err(err) = session.resolve_gate(choice) {
                warn!("ignoring gate choice: {err}");
                return (state, Vec::new());
            }
            state.mark_dirty();
            match choice {
                GateChoice::Upgrade => vec![Effect::UpgradeRequested, Effect::AdvanceToSummary],
                GateChoice::ContinueFree => vec![Effect::AdvanceToSummary],
            }
        }
        Msg::ItemToggled { name } => {
            if let Err(err) = state.shopping_list_mut().toggle_checked(&name) {
                warn!("ignoring toggle: {err}");
                return (state, Vec::new());
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
