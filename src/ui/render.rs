use crate::surface::PageSnapshot;
use crate::ui::app::App;
use crate::ui::layout::{centered_rect_by_size, progress_regions};
use crate::ui::presentation::{progress_caption, Overlay};
use crate::ui::progress_bar::ProgressBar;
use crate::ui::theme::{
    BACKDROP, CONTENT_TEXT, GLOBAL_BORDER, LOGO_TEXT, PANEL, STATUS_ERROR, STATUS_OFFLINE,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Ticks per half cycle of the logo pulse.
const PULSE_HALF_PERIOD_TICKS: u64 = 7;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let presentation = app.presentation();

    draw_content(frame, area, &app.page(), presentation.is_dimmed());

    match &presentation.overlay {
        Overlay::None => {}
        Overlay::Progress { percent, fraction } => {
            draw_progress(frame, area, app.logo(), *percent, *fraction, app.tick());
        }
        Overlay::Error { text } => draw_notice(frame, area, text, STATUS_ERROR),
        Overlay::Offline { text } => draw_notice(frame, area, text, STATUS_OFFLINE),
    }
}

/// The page underneath every overlay, dimmed unless loading finished.
fn draw_content(frame: &mut Frame, area: Rect, page: &PageSnapshot, dimmed: bool) {
    let mut style = Style::default().fg(CONTENT_TEXT);
    if dimmed {
        style = style.add_modifier(Modifier::DIM);
    }

    let title = match page.status {
        Some(status) => format!(" {} [{}] ", page.url, status),
        None => format!(" {} ", page.url),
    };

    let lines: Vec<Line> = if page.preview.is_empty() {
        vec![Line::from("Waiting for content...")]
    } else {
        page.preview
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .style(style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_progress(frame: &mut Frame, area: Rect, logo: &str, percent: u8, fraction: f64, tick: u64) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(BACKDROP)), area);

    let regions = progress_regions(area);

    let pulse = if (tick / PULSE_HALF_PERIOD_TICKS) % 2 == 0 {
        Modifier::BOLD
    } else {
        Modifier::DIM
    };
    let logo_line = Line::from(Span::styled(
        logo.to_string(),
        Style::default().fg(LOGO_TEXT).add_modifier(pulse),
    ));
    frame.render_widget(
        Paragraph::new(logo_line).alignment(Alignment::Center),
        regions.logo,
    );

    let caption = Line::from(Span::styled(
        progress_caption(percent),
        Style::default().fg(LOGO_TEXT).bg(PANEL),
    ));
    frame.render_widget(
        Paragraph::new(caption).alignment(Alignment::Center),
        regions.caption,
    );

    frame.render_widget(ProgressBar::new(fraction, tick), regions.bar);
}

/// One line of status text in a small box over the dimmed page.
fn draw_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let width = u16::try_from(text.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let rect = centered_rect_by_size(area, width, 3);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(paragraph, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{LoadState, TransitionPolicy};
    use crate::surface::ContentSurface;
    use crate::ui::presentation::Presenter;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        App::new(
            Presenter::default(),
            TransitionPolicy::Permissive,
            ContentSurface::new("https://example.org"),
            "7 FEATHERS",
        )
    }

    fn screen(app: &App) -> (String, ratatui::buffer::Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (text, buffer)
    }

    #[test]
    fn progress_overlay_shows_percentage() {
        let mut app = app();
        app.controller_mut().set_state(LoadState::progressing(0.999));
        let (text, _) = screen(&app);
        assert!(text.contains("Loading 99%"));
        assert!(text.contains("7 FEATHERS"));
        assert!(!text.contains("Waiting for content"));
    }

    #[test]
    fn error_overlay_shows_message_over_dimmed_page() {
        let mut app = app();
        app.controller_mut().set_state(LoadState::failure("disk full"));
        let (text, buffer) = screen(&app);
        assert!(text.contains("Error: disk full"));
        assert!(!text.contains("Loading"));
        assert!(buffer[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn offline_overlay_is_fixed_text() {
        let mut app = app();
        app.controller_mut().set_state(LoadState::failure("stale"));
        app.controller_mut().set_state(LoadState::NoConnection);
        let (text, _) = screen(&app);
        assert!(text.contains("No connection"));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn finished_shows_page_at_full_opacity() {
        let mut app = app();
        app.controller_mut().set_state(LoadState::progressing(0.5));
        app.controller_mut().set_state(LoadState::Finished);
        let (text, buffer) = screen(&app);
        assert!(text.contains("example.org"));
        assert!(!text.contains("Loading"));
        assert!(!buffer[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn idle_has_no_overlay() {
        let app = app();
        let (text, buffer) = screen(&app);
        assert!(text.contains("Waiting for content..."));
        assert!(!text.contains("Loading"));
        assert!(!text.contains("Error"));
        assert!(buffer[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn overlong_error_spans_the_screen() {
        let mut app = app();
        let message = "x".repeat(usize::from(u16::MAX) + 1 - "Error: ".len());
        app.controller_mut().set_state(LoadState::failure(message));
        let (_, buffer) = screen(&app);
        assert_eq!(buffer[(0, 8)].symbol(), "┌");
        assert_eq!(buffer[(59, 8)].symbol(), "┐");
    }
}
