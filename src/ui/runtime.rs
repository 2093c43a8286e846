use crate::load::LoadMailbox;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the splash screen until the user quits or a signal arrives.
///
/// Loader events are applied between frames, on this thread, so controller
/// observers always run where the `App` lives.
pub fn run(
    mut app: App,
    mailbox: LoadMailbox,
    shutdown: &ShutdownCoordinator,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.handle())?;

    loop {
        mailbox.drain_into(app.controller_mut());
        terminal.draw(|frame| draw(frame, &app))?;

        if app.should_quit() {
            tracing::info!(state = %app.controller().current_state().kind(), "Quit requested");
            break;
        }
        if shutdown.os_signal_received() {
            tracing::info!("Termination signal received");
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => app.on_key(key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
