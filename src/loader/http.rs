//! HTTP page loader.
//!
//! Streams the response body and reports progress per chunk. Progress is
//! exact when the server sends `Content-Length`, otherwise it creeps towards
//! `UNKNOWN_LENGTH_CAP` as bytes arrive.

use crate::config::LoaderConfig;
use crate::load::{LoadEvent, LoadEventSender};
use crate::surface::ContentSurface;

use super::error::LoadError;

/// Highest progress reported while the total size is unknown.
pub const UNKNOWN_LENGTH_CAP: f64 = 0.95;

/// Received kilobytes at which the unknown-length estimate reaches one half.
const UNKNOWN_LENGTH_HALF_KB: f64 = 64.0;

/// Most body bytes held for the page preview.
const PREVIEW_BYTE_CAP: usize = 64 * 1024;

pub struct HttpLoader {
    client: reqwest::Client,
    url: String,
    preview_lines: usize,
    surface: ContentSurface,
}

impl HttpLoader {
    pub fn new(
        config: &LoaderConfig,
        url: impl Into<String>,
        surface: ContentSurface,
    ) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|source| LoadError::Client { source })?;

        Ok(Self {
            client,
            url: url.into(),
            preview_lines: config.preview_lines,
            surface,
        })
    }

    /// Run one load attempt, reporting every lifecycle step to `events`.
    pub async fn run(self, events: &LoadEventSender) {
        tracing::info!(url = %self.url, "Loading content");
        events.send(LoadEvent::Started);

        match self.fetch(events).await {
            Ok(bytes) => {
                tracing::info!(url = %self.url, bytes, "Content loaded");
                events.send(LoadEvent::Finished);
            }
            Err(err) => {
                tracing::warn!(url = %self.url, error = %err, "Content load failed");
                events.send(err.into_event());
            }
        }
    }

    async fn fetch(&self, events: &LoadEventSender) -> Result<u64, LoadError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::from_request(&self.url, e))?;

        let status = response.status();
        self.surface.update(|page| page.status = Some(status.as_u16()));
        if !status.is_success() {
            return Err(LoadError::Status { status });
        }

        let total = response.content_length();
        tracing::debug!(url = %self.url, ?total, "Response headers received");

        let mut received: u64 = 0;
        let mut head = PreviewBuffer::new(self.preview_lines);
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| LoadError::from_request(&self.url, e))?
        {
            received += chunk.len() as u64;
            head.push(&chunk);
            events.send(LoadEvent::progress(progress_fraction(received, total)));
        }
        events.send(LoadEvent::progress(1.0));

        let bytes = received;
        let preview = head.lines();
        self.surface.update(|page| {
            page.bytes = bytes;
            page.preview = preview;
        });
        Ok(bytes)
    }
}

/// Leading body bytes, kept only until the preview has enough lines.
struct PreviewBuffer {
    bytes: Vec<u8>,
    max_lines: usize,
    newlines: usize,
}

impl PreviewBuffer {
    fn new(max_lines: usize) -> Self {
        Self {
            bytes: Vec::new(),
            max_lines,
            newlines: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.newlines >= self.max_lines || self.bytes.len() >= PREVIEW_BYTE_CAP
    }

    fn push(&mut self, chunk: &[u8]) {
        if self.is_full() {
            return;
        }

        let mut take = chunk.len().min(PREVIEW_BYTE_CAP - self.bytes.len());
        for (i, byte) in chunk[..take].iter().enumerate() {
            if *byte == b'\n' {
                self.newlines += 1;
                if self.newlines >= self.max_lines {
                    take = i + 1;
                    break;
                }
            }
        }
        self.bytes.extend_from_slice(&chunk[..take]);
    }

    fn lines(&self) -> Vec<String> {
        preview_lines(&self.bytes, self.max_lines)
    }
}

/// Completion fraction after `received` bytes of an optional `total`.
pub fn progress_fraction(received: u64, total: Option<u64>) -> f64 {
    match total {
        Some(total) if total > 0 => (received as f64 / total as f64).min(1.0),
        _ => {
            let kb = received as f64 / 1024.0;
            let estimate = 1.0 - 1.0 / (1.0 + kb / UNKNOWN_LENGTH_HALF_KB);
            estimate.min(UNKNOWN_LENGTH_CAP)
        }
    }
}

/// First `max_lines` lines of `body`, decoded lossily.
pub fn preview_lines(body: &[u8], max_lines: usize) -> Vec<String> {
    String::from_utf8_lossy(body)
        .lines()
        .take(max_lines)
        .map(|line| line.trim_end().to_string())
        .collect()
}
