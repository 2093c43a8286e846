//! Lifecycle checking for load-state transitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{LoadState, LoadStateKind};

/// What to do with a transition that does not fit a normal load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    /// Accept it and log a warning.
    #[default]
    Permissive,
    /// Reject it; the state stays as it was.
    Strict,
}

/// Errors raised by the strict transition policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Illegal load transition {from} -> {to}")]
    Illegal {
        from: LoadStateKind,
        to: LoadStateKind,
    },
}

/// Check whether `from -> to` fits a normal load lifecycle.
///
/// Anything may follow `Idle` or `Progressing`. A finished, failed or offline
/// attempt may only repeat itself or go back to `Idle`, unless the triggering
/// event opens a new attempt.
pub fn is_lifecycle_consistent(from: &LoadState, starts_attempt: bool, to: &LoadState) -> bool {
    if starts_attempt || !from.is_terminal() {
        return true;
    }

    from.kind() == to.kind() || matches!(to, LoadState::Idle)
}

impl TransitionPolicy {
    pub fn check(
        self,
        from: &LoadState,
        starts_attempt: bool,
        to: &LoadState,
    ) -> Result<(), TransitionError> {
        if is_lifecycle_consistent(from, starts_attempt, to) {
            return Ok(());
        }

        match self {
            TransitionPolicy::Permissive => {
                tracing::warn!(
                    from = %from.kind(),
                    to = %to.kind(),
                    "Load transition outside the normal lifecycle"
                );
                Ok(())
            }
            TransitionPolicy::Strict => Err(TransitionError::Illegal {
                from: from.kind(),
                to: to.kind(),
            }),
        }
    }
}
