//! Authoritative holder of the current load state.

use std::fmt;

use super::intent::LoadEvent;
use super::mvi::Reducer;
use super::reducer::LoadReducer;
use super::state::LoadState;
use super::transition::{TransitionError, TransitionPolicy};

type Observer = Box<dyn FnMut(&LoadState)>;

/// Handle returned by `LoadController::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the load state and notifies observers on every change.
///
/// Observers run synchronously inside `set_state`, in subscription order.
/// They are not `Send`, so the controller stays on the thread that created
/// it; events produced elsewhere go through a `LoadMailbox`.
pub struct LoadController {
    state: LoadState,
    policy: TransitionPolicy,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl LoadController {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            state: LoadState::default(),
            policy,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Last state set.
    pub fn current_state(&self) -> &LoadState {
        &self.state
    }

    /// Replace the state unconditionally and notify every observer.
    pub fn set_state(&mut self, new_state: LoadState) {
        if self.state.kind() != new_state.kind() {
            tracing::info!(
                from = %self.state.kind(),
                to = %new_state.kind(),
                "Load state changed"
            );
        }
        self.state = new_state;

        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
    }

    /// Fold a loader event into the state.
    ///
    /// Calls `set_state` once when the policy accepts the transition. Under
    /// `TransitionPolicy::Strict` a rejected transition leaves the state and
    /// observers untouched.
    pub fn dispatch(&mut self, event: LoadEvent) -> Result<(), TransitionError> {
        let starts_attempt = event.starts_attempt();
        let next = LoadReducer::reduce(self.state.clone(), event);
        self.policy.check(&self.state, starts_attempt, &next)?;

        if let (Some(previous), Some(current)) = (self.state.progress(), next.progress()) {
            if current < previous {
                tracing::debug!(previous, current, "Load progress went backwards");
            }
        }

        self.set_state(next);
        Ok(())
    }

    /// Register an observer, invoked on every subsequent `set_state`.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&LoadState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Default for LoadController {
    fn default() -> Self {
        Self::new(TransitionPolicy::default())
    }
}

impl fmt::Debug for LoadController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadController")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}
