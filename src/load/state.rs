//! State of the embedded content load.

use std::fmt;

use super::mvi::UiState;

/// Lifecycle phase of the content load.
///
/// Exactly one variant is active at a time; the controller owns the only
/// mutable copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No load has started yet.
    #[default]
    Idle,

    /// Load in progress.
    Progressing {
        /// Completion fraction in `[0.0, 1.0]`.
        percent: f64,
    },

    /// Load completed successfully.
    Finished,

    /// Load failed.
    Failure {
        /// Human-readable diagnostic, shown verbatim.
        message: String,
    },

    /// Network connectivity is unavailable.
    NoConnection,
}

impl UiState for LoadState {}

impl LoadState {
    pub fn progressing(percent: f64) -> Self {
        Self::Progressing { percent }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> LoadStateKind {
        match self {
            Self::Idle => LoadStateKind::Idle,
            Self::Progressing { .. } => LoadStateKind::Progressing,
            Self::Finished => LoadStateKind::Finished,
            Self::Failure { .. } => LoadStateKind::Failure,
            Self::NoConnection => LoadStateKind::NoConnection,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// Check if the current attempt has ended, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished | Self::Failure { .. } | Self::NoConnection
        )
    }

    /// Completion fraction while progressing.
    pub fn progress(&self) -> Option<f64> {
        match self {
            Self::Progressing { percent } => Some(*percent),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }
}

/// Payload-free discriminant of `LoadState`, used in logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStateKind {
    Idle,
    Progressing,
    Finished,
    Failure,
    NoConnection,
}

impl fmt::Display for LoadStateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Progressing => "progressing",
            Self::Finished => "finished",
            Self::Failure => "failure",
            Self::NoConnection => "no-connection",
        };
        f.write_str(name)
    }
}
