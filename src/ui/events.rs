use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;

/// Longest a single poll may block, so shutdown is noticed quickly.
const POLL_CEILING: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    /// Animation clock.
    Tick,
    Resize(u16, u16),
}

/// Terminal input and animation ticks, produced on a dedicated thread.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("ui-events".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    if shutdown.is_shutting_down() {
                        break;
                    }

                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(POLL_CEILING);

                    match event::poll(timeout) {
                        Ok(true) => match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                if tx.send(AppEvent::Key(key)).is_err() {
                                    break;
                                }
                            }
                            Ok(Event::Resize(cols, rows)) => {
                                let _ = tx.send(AppEvent::Resize(cols, rows));
                            }
                            Ok(_) => {}
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        },
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "Terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
