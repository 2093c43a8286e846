pub mod app;
pub mod events;
pub mod layout;
pub mod presentation;
pub mod progress_bar;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
