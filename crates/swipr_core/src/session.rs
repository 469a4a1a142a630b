use thiserror::Error;

use crate::Recipe;

/// Free-tier swipe allowance before the paywall gate raises.
pub const DEFAULT_QUOTA_LIMIT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Right swipe: add the recipe to the plan.
    Accept,
    /// Left swipe: pass on the recipe.
    Reject,
}

/// User response to the paywall gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateChoice {
    Upgrade,
    ContinueFree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A recipe card is on screen awaiting a decision.
    Presenting,
    /// Swipe quota exhausted; waiting for an upgrade/continue-free choice.
    Gated,
    /// The run is over; remaining candidates (if any) are discarded.
    Completed,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("decide called while session is {phase:?}, not presenting")]
    NotPresenting { phase: SessionPhase },
    #[error("resolve_gate called while session is {phase:?}, not gated")]
    NotGated { phase: SessionPhase },
}

/// Result of one committed swipe, returned for UI feedback (e.g. which card
/// to animate away and what to show next).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub recipe: Recipe,
    pub outcome: SwipeOutcome,
    pub phase: SessionPhase,
}

/// One planning run over a fixed candidate queue.
///
/// Created after pantry confirmation and discarded once its terminal phase
/// has been consumed by the summary screen; never persisted. All mutation
/// goes through [`decide`](Self::decide) and
/// [`resolve_gate`](Self::resolve_gate), which reject calls made in the
/// wrong phase without touching any counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeSession {
    queue: Vec<Recipe>,
    cursor: usize,
    accepted: Vec<Recipe>,
    swipe_count: u32,
    quota_limit: u32,
    phase: SessionPhase,
}

impl SwipeSession {
    /// Starts a run over `queue`. An empty queue is not an error: the
    /// session begins `Completed` so the caller can route straight to an
    /// empty summary.
    ///
    /// A `quota_limit` of 0 disables the gate (the post-swipe count can
    /// never equal it).
    pub fn new(queue: Vec<Recipe>, quota_limit: u32) -> Self {
        let phase = if queue.is_empty() {
            SessionPhase::Completed
        } else {
            SessionPhase::Presenting
        };
        Self {
            queue,
            cursor: 0,
            accepted: Vec::new(),
            swipe_count: 0,
            quota_limit,
            phase,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The recipe currently on screen, if a card is being presented.
    pub fn current_recipe(&self) -> Option<&Recipe> {
        match self.phase {
            SessionPhase::Presenting => self.queue.get(self.cursor),
            SessionPhase::Gated | SessionPhase::Completed => None,
        }
    }

    /// Accepted recipes in decision order.
    pub fn accepted(&self) -> &[Recipe] {
        &self.accepted
    }

    pub fn swipe_count(&self) -> u32 {
        self.swipe_count
    }

    pub fn quota_limit(&self) -> u32 {
        self.quota_limit
    }

    /// Swipes left before the gate raises.
    pub fn swipes_remaining(&self) -> u32 {
        self.quota_limit.saturating_sub(self.swipe_count)
    }

    /// Commits one swipe decision on the current card.
    ///
    /// Increments the swipe count exactly once and, on `Accept`, appends
    /// the recipe to the accepted list. Phase transition order: the quota
    /// check wins over completion, so the swipe that would have emptied
    /// the queue still gates if it also hits the limit.
    ///
    /// Calling outside `Presenting` is a contract violation (including a
    /// double-fired gesture from the animation layer): the call is
    /// rejected and the session is left unchanged.
    pub fn decide(&mut self, outcome: SwipeOutcome) -> Result<Decision, SessionError> {
        if self.phase != SessionPhase::Presenting {
            return Err(SessionError::NotPresenting { phase: self.phase });
        }
        let recipe = self
            .queue
            .get(self.cursor)
            .cloned()
            .ok_or(SessionError::NotPresenting { phase: self.phase })?;

        self.swipe_count += 1;
        if outcome == SwipeOutcome::Accept {
            self.accepted.push(recipe.clone());
        }

        self.phase = if self.swipe_count == self.quota_limit {
            SessionPhase::Gated
        } else if self.cursor + 1 == self.queue.len() {
            SessionPhase::Completed
        } else {
            self.cursor += 1;
            SessionPhase::Presenting
        };

        Ok(Decision {
            recipe,
            outcome,
            phase: self.phase,
        })
    }

    /// Resolves the paywall gate.
    ///
    /// Both choices end the run: `ContinueFree` completes it with the
    /// remaining candidates discarded, and `Upgrade` currently does the
    /// same because billing is an external stub. Resuming presentation
    /// after an upgrade needs product clarification before it is modeled.
    pub fn resolve_gate(&mut self, _choice: GateChoice) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Gated {
            return Err(SessionError::NotGated { phase: self.phase });
        }
        self.phase = SessionPhase::Completed;
        Ok(())
    }
}
