//! State renderer: which overlay sits on top of the content surface.
//!
//! Pure mapping from `LoadState` to a `Presentation`. Drawing happens in
//! `render.rs`; nothing here knows about the terminal.

use serde::{Deserialize, Serialize};

use crate::load::{clamp_fraction, LoadState};

/// Content opacity once the page has finished loading.
pub const FULL_OPACITY: f32 = 1.0;

/// Content opacity in every other state.
pub const DIMMED_OPACITY: f32 = 0.5;

/// Fixed text of the offline overlay.
pub const OFFLINE_TEXT: &str = "No connection";

/// How a completion fraction becomes a whole percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PercentRounding {
    /// `floor(p * 100)`: 0.999 shows as 99.
    #[default]
    Truncate,
    /// Nearest integer, halves away from zero.
    Round,
}

impl PercentRounding {
    pub fn percent(self, fraction: f64) -> u8 {
        let scaled = clamp_fraction(fraction) * 100.0;
        let whole = match self {
            PercentRounding::Truncate => scaled.floor(),
            PercentRounding::Round => scaled.round(),
        };
        whole as u8
    }
}

/// The single overlay composited above the content surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    Progress { percent: u8, fraction: f64 },
    Error { text: String },
    Offline { text: &'static str },
}

impl Overlay {
    /// Text the overlay shows, if any.
    pub fn text(&self) -> Option<String> {
        match self {
            Overlay::None => None,
            Overlay::Progress { percent, .. } => Some(progress_caption(*percent)),
            Overlay::Error { text } => Some(text.clone()),
            Overlay::Offline { text } => Some((*text).to_string()),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

/// Everything the renderer needs for one frame's worth of load state.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub overlay: Overlay,
    pub content_opacity: f32,
}

impl Presentation {
    pub fn is_dimmed(&self) -> bool {
        self.content_opacity < FULL_OPACITY
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Presenter::default().present(&LoadState::Idle)
    }
}

/// Derives a `Presentation` from the load state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presenter {
    rounding: PercentRounding,
}

impl Presenter {
    pub fn new(rounding: PercentRounding) -> Self {
        Self { rounding }
    }

    pub fn present(&self, state: &LoadState) -> Presentation {
        let overlay = match state {
            LoadState::Progressing { percent } => {
                let fraction = clamp_fraction(*percent);
                Overlay::Progress {
                    percent: self.rounding.percent(fraction),
                    fraction,
                }
            }
            LoadState::Finished | LoadState::Idle => Overlay::None,
            LoadState::Failure { message } => Overlay::Error {
                text: error_text(message),
            },
            LoadState::NoConnection => Overlay::Offline { text: OFFLINE_TEXT },
        };

        let content_opacity = if state.is_finished() {
            FULL_OPACITY
        } else {
            DIMMED_OPACITY
        };

        Presentation {
            overlay,
            content_opacity,
        }
    }
}

pub fn progress_caption(percent: u8) -> String {
    format!("Loading {}%", percent)
}

pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_table() {
        let presenter = Presenter::default();
        for (fraction, expected) in [(0.0, 0), (0.5, 50), (0.999, 99), (1.0, 100)] {
            let presentation = presenter.present(&LoadState::progressing(fraction));
            assert!(
                matches!(presentation.overlay, Overlay::Progress { percent, .. } if percent == expected),
                "{} should display {}",
                fraction,
                expected
            );
        }
    }

    #[test]
    fn rounding_policy() {
        assert_eq!(PercentRounding::Round.percent(0.999), 100);
        assert_eq!(PercentRounding::Round.percent(0.494), 49);
        assert_eq!(PercentRounding::Truncate.percent(0.999), 99);
    }

    #[test]
    fn out_of_range_fraction_is_clamped() {
        let presentation = Presenter::default().present(&LoadState::progressing(3.0));
        assert_eq!(
            presentation.overlay,
            Overlay::Progress {
                percent: 100,
                fraction: 1.0
            }
        );
    }

    #[test]
    fn only_finished_is_fully_opaque() {
        let presenter = Presenter::default();
        assert_eq!(presenter.present(&LoadState::Finished).content_opacity, FULL_OPACITY);
        for state in [
            LoadState::Idle,
            LoadState::progressing(1.0),
            LoadState::failure("x"),
            LoadState::NoConnection,
        ] {
            assert!(presenter.present(&state).is_dimmed());
        }
    }

    #[test]
    fn overlay_text() {
        assert_eq!(
            Overlay::Progress {
                percent: 42,
                fraction: 0.42
            }
            .text()
            .as_deref(),
            Some("Loading 42%")
        );
        assert_eq!(Overlay::None.text(), None);
        assert_eq!(
            Overlay::Offline { text: OFFLINE_TEXT }.text().as_deref(),
            Some("No connection")
        );
    }

    #[test]
    fn default_presentation_is_idle() {
        let presentation = Presentation::default();
        assert_eq!(presentation.overlay, Overlay::None);
        assert!(presentation.is_dimmed());
    }
}
