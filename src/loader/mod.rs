//! Content loaders feeding the splash screen.
//!
//! A loader runs on the tokio runtime and reports lifecycle events through a
//! `LoadEventSender`. It never touches the controller directly.

mod error;
mod http;
mod scripted;

pub use error::LoadError;
pub use http::{preview_lines, progress_fraction, HttpLoader, UNKNOWN_LENGTH_CAP};
pub use scripted::{Scenario, ScriptedLoader};

use crate::load::LoadEventSender;
use crate::shutdown::ShutdownHandle;

/// The collaborator selected at startup.
pub enum ContentLoader {
    Http(HttpLoader),
    Scripted(ScriptedLoader),
}

impl ContentLoader {
    /// Drive the load until it ends or shutdown is signalled.
    ///
    /// A cancelled load reports nothing further; the screen is going away.
    pub async fn run(self, events: LoadEventSender, shutdown: ShutdownHandle) {
        let load = async {
            match self {
                ContentLoader::Http(loader) => loader.run(&events).await,
                ContentLoader::Scripted(loader) => loader.run(&events).await,
            }
        };

        tokio::select! {
            _ = load => {}
            _ = shutdown.wait() => {
                tracing::debug!("Content load cancelled by shutdown");
            }
        }
    }
}
