//! Load-state display controller.
//!
//! Tracks the lifecycle of a content load and hands every change to
//! whoever renders it.
//!
//! # Architecture
//!
//! ```text
//! loader thread ──→ LoadMailbox ──→ LoadReducer ──→ LoadController ──→ observers
//!   (LoadEvent)      (hand-off)      (next state)     (state slot)      (re-render)
//! ```
//!
//! - `state.rs` - the `LoadState` sum type
//! - `intent.rs` - lifecycle events reported by a content loader
//! - `reducer.rs` - event to state mapping
//! - `transition.rs` - optional lifecycle checking
//! - `controller.rs` - state slot with synchronous observers
//! - `mailbox.rs` - cross-thread hand-off onto the owning thread

mod controller;
mod intent;
pub mod mailbox;
mod mvi;
mod reducer;
mod state;
mod transition;

pub use controller::{LoadController, SubscriptionId};
pub use intent::{clamp_fraction, LoadEvent};
pub use mailbox::{LoadEventSender, LoadMailbox};
pub use mvi::{Intent, Reducer, UiState};
pub use reducer::LoadReducer;
pub use state::{LoadState, LoadStateKind};
pub use transition::{is_lifecycle_consistent, TransitionError, TransitionPolicy};
