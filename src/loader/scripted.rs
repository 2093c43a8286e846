//! Scripted loader that replays a fixed lifecycle.

use std::time::Duration;

use clap::ValueEnum;

use crate::load::{LoadEvent, LoadEventSender};
use crate::surface::ContentSurface;

use super::error::LoadError;

const PROGRESS_STEPS: u32 = 20;

/// Outcome replayed by `ScriptedLoader`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Progress to 100% and finish.
    Success,
    /// Stall at 40% and fail.
    Failure,
    /// Lose the connection right after starting.
    Offline,
}

pub struct ScriptedLoader {
    scenario: Scenario,
    step: Duration,
    surface: ContentSurface,
}

impl ScriptedLoader {
    pub fn new(scenario: Scenario, step: Duration, surface: ContentSurface) -> Self {
        Self {
            scenario,
            step,
            surface,
        }
    }

    /// Events emitted for the configured scenario, in order.
    pub fn script(&self) -> Vec<LoadEvent> {
        let mut events = vec![LoadEvent::Started];
        match self.scenario {
            Scenario::Success => {
                events.extend(ramp(PROGRESS_STEPS));
                events.push(LoadEvent::Finished);
            }
            Scenario::Failure => {
                events.extend(ramp(PROGRESS_STEPS * 2 / 5));
                events.push(
                    LoadError::Scripted("Simulated failure: upstream closed the stream".into())
                        .into_event(),
                );
            }
            Scenario::Offline => {
                events.push(LoadEvent::progress(0.0));
                events.push(LoadEvent::ConnectionLost);
            }
        }
        events
    }

    pub async fn run(self, events: &LoadEventSender) {
        tracing::info!(scenario = ?self.scenario, "Replaying scripted load");

        for event in self.script() {
            if event == LoadEvent::Finished {
                self.surface.update(|page| {
                    page.status = Some(200);
                    page.preview = demo_page();
                    page.bytes = page.preview.iter().map(|line| line.len() as u64 + 1).sum();
                });
            }
            if !events.send(event) {
                tracing::debug!("Mailbox closed, stopping scripted load");
                return;
            }
            tokio::time::sleep(self.step).await;
        }
    }
}

/// `steps` evenly spaced progress events ending at `steps / PROGRESS_STEPS`.
fn ramp(steps: u32) -> impl Iterator<Item = LoadEvent> {
    (1..=steps).map(|i| LoadEvent::progress(f64::from(i) / f64::from(PROGRESS_STEPS)))
}

fn demo_page() -> Vec<String> {
    [
        "<!doctype html>",
        "<html>",
        "  <head><title>7 Feathers</title></head>",
        "  <body>",
        "    <main id=\"game\">Loaded.</main>",
        "  </body>",
        "</html>",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
