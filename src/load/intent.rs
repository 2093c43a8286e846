//! Lifecycle events reported by a content loader.

use super::mvi::Intent;

/// Events a content loader emits while fetching a page.
///
/// A normal attempt is `Started`, zero or more `Progress`, then exactly one
/// of `Finished`, `Failed` or `ConnectionLost`. Nothing enforces that order.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent {
    /// A new attempt began.
    Started,

    /// Part of the content arrived.
    Progress {
        /// Completion fraction, clamped into `[0.0, 1.0]` by the reducer.
        fraction: f64,
    },

    /// Content fully loaded.
    Finished,

    /// Load failed with a displayable diagnostic.
    Failed { message: String },

    /// Network went away.
    ConnectionLost,

    /// Forget the previous attempt.
    Reset,
}

impl Intent for LoadEvent {}

impl LoadEvent {
    pub fn progress(fraction: f64) -> Self {
        Self::Progress { fraction }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Check if the event opens a fresh lifecycle.
    pub fn starts_attempt(&self) -> bool {
        matches!(self, Self::Started | Self::Reset)
    }
}

/// Clamp a completion fraction into `[0.0, 1.0]`; NaN maps to zero.
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_fraction_bounds() {
        assert_eq!(clamp_fraction(-0.5), 0.0);
        assert_eq!(clamp_fraction(0.42), 0.42);
        assert_eq!(clamp_fraction(7.0), 1.0);
        assert_eq!(clamp_fraction(f64::NAN), 0.0);
        assert_eq!(clamp_fraction(f64::INFINITY), 1.0);
    }

    #[test]
    fn only_started_and_reset_open_an_attempt() {
        assert!(LoadEvent::Started.starts_attempt());
        assert!(LoadEvent::Reset.starts_attempt());
        assert!(!LoadEvent::progress(0.1).starts_attempt());
        assert!(!LoadEvent::Finished.starts_attempt());
        assert!(!LoadEvent::failed("x").starts_attempt());
        assert!(!LoadEvent::ConnectionLost.starts_attempt());
    }
}
